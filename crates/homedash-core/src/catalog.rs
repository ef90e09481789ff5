//! Seed service catalog.
//!
//! Used as the layout on first run, before anything has been persisted.

use crate::service::Service;

/// The built-in list of services, in display order.
pub fn seed_services() -> Vec<Service> {
    vec![
        Service::new(
            "1",
            "Time Tracker",
            "Track time for honorary work",
            "calendar",
            "https://timetracker.example.com",
            "Productivity",
        ),
        Service::new(
            "2",
            "Wishlist",
            "Keep track of wanted items",
            "shopping-cart",
            "https://wishlist.example.com",
            "Personal",
        ),
        Service::new(
            "3",
            "Portainer",
            "Container management",
            "monitor",
            "https://portainer.example.com",
            "Infrastructure",
        ),
        Service::new(
            "4",
            "Portfolio",
            "Personal portfolio site",
            "image",
            "https://portfolio.example.com",
            "Personal",
        ),
        Service::new(
            "5",
            "Database",
            "Database management",
            "database",
            "https://database.example.com",
            "Infrastructure",
        ),
        Service::new(
            "6",
            "Bitwarden",
            "Password manager",
            "lock",
            "https://bitwarden.example.com",
            "Security",
        ),
        Service::new(
            "7",
            "Cloud Storage",
            "Personal cloud storage",
            "cloud",
            "https://cloud.example.com",
            "Storage",
        ),
        Service::new(
            "8",
            "Immich",
            "Google Photos alternative",
            "image",
            "https://immich.example.com",
            "Media",
        ),
        Service::new(
            "9",
            "System Settings",
            "System configuration",
            "settings",
            "https://settings.example.com",
            "Infrastructure",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::icons::Icon;

    #[test]
    fn seed_ids_are_unique() {
        let services = seed_services();
        let ids: HashSet<&str> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn seed_has_infrastructure_category() {
        assert!(
            seed_services()
                .iter()
                .any(|s| s.category == "Infrastructure")
        );
    }

    #[test]
    fn seed_icons_all_resolve() {
        for svc in seed_services() {
            assert!(
                Icon::from_key(svc.icon.as_str()).is_some(),
                "unknown icon key {}",
                svc.icon
            );
        }
    }
}
