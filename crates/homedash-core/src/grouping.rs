//! Category grouping and search.

use crate::service::Service;

/// Distinct `category` values in order of first appearance.
pub fn derive_categories(services: &[Service]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for svc in services {
        if !categories.contains(&svc.category) {
            categories.push(svc.category.clone());
        }
    }
    categories
}

/// The category order to display.
///
/// An empty `custom` order means the user never customized the layout, so
/// the order is derived from `services`. Otherwise `custom` wins, with any
/// category a service uses but `custom` lacks appended at the end.
pub fn effective_categories(custom: &[String], services: &[Service]) -> Vec<String> {
    if custom.is_empty() {
        return derive_categories(services);
    }
    let mut categories = custom.to_vec();
    for category in derive_categories(services) {
        if !categories.contains(&category) {
            log::debug!("category '{category}' missing from saved order -- appending");
            categories.push(category);
        }
    }
    categories
}

fn matches(svc: &Service, needle: &str) -> bool {
    svc.name.to_lowercase().contains(needle) || svc.description.to_lowercase().contains(needle)
}

/// Services whose name or description contains `term`, ignoring case.
/// An empty term matches everything.
pub fn filter_services(services: &[Service], term: &str) -> Vec<Service> {
    if term.is_empty() {
        return services.to_vec();
    }
    let needle = term.to_lowercase();
    services
        .iter()
        .filter(|svc| matches(svc, &needle))
        .cloned()
        .collect()
}

/// One category's slice of the visible services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub title: String,
    pub services: Vec<Service>,
}

/// Bucket `services` by `categories`, keeping each bucket in list order.
///
/// Categories with no visible services are left out, as are services whose
/// category is not in `categories`.
pub fn group_by_category(categories: &[String], services: &[Service]) -> Vec<CategorySection> {
    categories
        .iter()
        .filter_map(|title| {
            let bucket: Vec<Service> = services
                .iter()
                .filter(|svc| &svc.category == title)
                .cloned()
                .collect();
            (!bucket.is_empty()).then(|| CategorySection {
                title: title.clone(),
                services: bucket,
            })
        })
        .collect()
}
