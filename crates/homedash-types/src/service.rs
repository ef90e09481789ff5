//! Service records: one link card on the dashboard.
//!
//! Records are serialized with camelCase field names so a persisted layout
//! keeps the `{id, name, description, icon, url, category, iconColor}` shape.

use serde::{Deserialize, Serialize};

/// Symbolic icon reference (e.g. `"database"`).
///
/// The data model only ever stores the key. Resolving it to something
/// renderable happens in the icon registry at render time, so an unknown key
/// is never an error here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconKey(String);

impl IconKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconKey {
    fn default() -> Self {
        Self::new("settings")
    }
}

impl From<&str> for IconKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dashboard card. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: IconKey,
    pub url: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<IconKey>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            url: url.into(),
            category: category.into(),
            icon_color: None,
        }
    }

    /// Merge the set fields of `patch` over this record.
    pub fn apply(&mut self, patch: &ServicePatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(url) = &patch.url {
            self.url.clone_from(url);
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
        if let Some(color) = &patch.icon_color {
            self.icon_color = Some(color.clone()).filter(|c| !c.is_empty());
        }
    }
}

/// Partial update for a service's editable fields.
///
/// `None` leaves the field as it is. An empty `icon_color` clears the colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<IconKey>,
    #[serde(default)]
    pub icon_color: Option<String>,
}

impl ServicePatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconKey>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database() -> Service {
        Service::new(
            "5",
            "Database",
            "Database management",
            "database",
            "https://database.example.com",
            "Infrastructure",
        )
    }

    #[test]
    fn serializes_camel_case_without_empty_color() {
        let json = serde_json::to_value(database()).unwrap();
        assert_eq!(json["id"], "5");
        assert_eq!(json["icon"], "database");
        assert!(json.get("iconColor").is_none());
    }

    #[test]
    fn icon_color_uses_camel_case_key() {
        let mut svc = database();
        svc.icon_color = Some("#ff0000".into());
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["iconColor"], "#ff0000");
    }

    #[test]
    fn missing_icon_deserializes_to_default_key() {
        let svc: Service = serde_json::from_str(
            r#"{"id":"1","name":"a","description":"b","url":"u","category":"c"}"#,
        )
        .unwrap();
        assert_eq!(svc.icon, IconKey::default());
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut svc = database();
        svc.apply(&ServicePatch::default().name("Postgres"));
        assert_eq!(svc.name, "Postgres");
        assert_eq!(svc.description, "Database management");
        assert_eq!(svc.url, "https://database.example.com");
        assert_eq!(svc.category, "Infrastructure");
    }

    #[test]
    fn patch_can_change_every_editable_field() {
        let mut svc = database();
        let patch = ServicePatch::default()
            .name("DB")
            .description("Postgres cluster")
            .url("https://pg.example.com")
            .icon("cloud");
        svc.apply(&patch);
        assert_eq!(svc.name, "DB");
        assert_eq!(svc.description, "Postgres cluster");
        assert_eq!(svc.url, "https://pg.example.com");
        assert_eq!(svc.icon.as_str(), "cloud");
        assert_eq!(svc.id, "5");
    }

    #[test]
    fn empty_icon_color_clears() {
        let mut svc = database();
        svc.icon_color = Some("#123456".into());
        svc.apply(&ServicePatch {
            icon_color: Some(String::new()),
            ..Default::default()
        });
        assert!(svc.icon_color.is_none());
    }

    #[test]
    fn empty_patch_is_noop() {
        let patch = ServicePatch::default();
        let mut svc = database();
        svc.apply(&patch);
        assert_eq!(svc, database());
    }
}
