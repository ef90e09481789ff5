//! Layout editor: gated working copies of the dashboard layout.
//!
//! Editing starts behind an [`EditLock`]. An [`EditorSession`] then holds
//! working copies of the services, the category order, the cosmetic settings
//! and the theme choice. Nothing here touches the store: the dashboard
//! persists a session's copies on save and simply drops them on cancel.

use crate::reorder::{ReorderEvent, apply_order};
use crate::service::{IconKey, Service, ServicePatch};
use crate::settings::{AnimationLevel, CardOpacity, CardSize, CosmeticSettings};

/// Why an editor operation was refused. The refused operation never changes
/// any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditRejection {
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    #[error("category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("category '{category}' still has {count} service(s)")]
    CategoryInUse { category: String, count: usize },

    #[error("no category named '{0}'")]
    UnknownCategory(String),

    #[error("no service with id '{0}'")]
    UnknownService(String),

    #[error("service name cannot be empty")]
    EmptyServiceName,

    #[error("service URL cannot be empty")]
    EmptyServiceUrl,

    #[error("layout is locked")]
    Locked,

    #[error("incorrect password")]
    WrongPassphrase,
}

/// Shared-passphrase lock in front of the editor.
///
/// This is a convenience lock against accidental edits, not authentication:
/// the passphrase is a plain string compared in-process.
#[derive(Debug, Clone)]
pub struct EditLock {
    passphrase: String,
}

impl EditLock {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    pub fn check(&self, attempt: &str) -> Result<(), EditRejection> {
        if attempt == self.passphrase {
            Ok(())
        } else {
            Err(EditRejection::WrongPassphrase)
        }
    }
}

/// Direction for [`EditorSession::move_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Up,
    Down,
}

/// Fields for a service created in the editor. The id is allocated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub icon: IconKey,
    pub url: String,
    pub category: String,
}

/// Working copies for one editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    services: Vec<Service>,
    categories: Vec<String>,
    cosmetics: CosmeticSettings,
    theme_id: String,
}

impl EditorSession {
    pub fn new(
        services: Vec<Service>,
        categories: Vec<String>,
        cosmetics: CosmeticSettings,
        theme_id: impl Into<String>,
    ) -> Self {
        Self {
            services,
            categories,
            cosmetics,
            theme_id: theme_id.into(),
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn cosmetics(&self) -> &CosmeticSettings {
        &self.cosmetics
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    fn service_mut(&mut self, id: &str) -> Result<&mut Service, EditRejection> {
        self.services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EditRejection::UnknownService(id.to_string()))
    }

    fn require_category(&self, name: &str) -> Result<(), EditRejection> {
        if self.categories.iter().any(|c| c == name) {
            Ok(())
        } else {
            Err(EditRejection::UnknownCategory(name.to_string()))
        }
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// Append a category. Surrounding whitespace is trimmed; the duplicate
    /// check is exact and case-sensitive.
    pub fn add_category(&mut self, name: &str) -> Result<(), EditRejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditRejection::EmptyCategoryName);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(EditRejection::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        Ok(())
    }

    /// Remove a category no service uses.
    pub fn remove_category(&mut self, name: &str) -> Result<(), EditRejection> {
        let count = self.services.iter().filter(|s| s.category == name).count();
        if count > 0 {
            return Err(EditRejection::CategoryInUse {
                category: name.to_string(),
                count,
            });
        }
        let idx = self
            .categories
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EditRejection::UnknownCategory(name.to_string()))?;
        self.categories.remove(idx);
        Ok(())
    }

    /// Swap a category with its neighbour. Returns `false` at either end.
    pub fn move_category(&mut self, name: &str, shift: Shift) -> Result<bool, EditRejection> {
        let idx = self
            .categories
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EditRejection::UnknownCategory(name.to_string()))?;
        let other = match shift {
            Shift::Up if idx > 0 => idx - 1,
            Shift::Down if idx + 1 < self.categories.len() => idx + 1,
            _ => return Ok(false),
        };
        self.categories.swap(idx, other);
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Services
    // -----------------------------------------------------------------------

    /// Move a service to another existing category.
    pub fn set_service_category(&mut self, id: &str, category: &str) -> Result<(), EditRejection> {
        self.require_category(category)?;
        self.service_mut(id)?.category = category.to_string();
        Ok(())
    }

    pub fn update_service(&mut self, id: &str, patch: &ServicePatch) -> Result<(), EditRejection> {
        self.service_mut(id)?.apply(patch);
        Ok(())
    }

    /// Append a new service and return its id.
    ///
    /// Ids are decimal strings; the new one is one past the largest numeric
    /// id in use.
    pub fn add_service(&mut self, draft: NewService) -> Result<String, EditRejection> {
        if draft.name.trim().is_empty() {
            return Err(EditRejection::EmptyServiceName);
        }
        if draft.url.trim().is_empty() {
            return Err(EditRejection::EmptyServiceUrl);
        }
        self.require_category(&draft.category)?;
        let next = self
            .services
            .iter()
            .filter_map(|s| s.id.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        let mut id = next.to_string();
        let mut bump = next;
        while self.services.iter().any(|s| s.id == id) {
            bump += 1;
            id = bump.to_string();
        }
        self.services.push(Service {
            id: id.clone(),
            name: draft.name.trim().to_string(),
            description: draft.description,
            icon: draft.icon,
            url: draft.url.trim().to_string(),
            category: draft.category,
            icon_color: None,
        });
        Ok(id)
    }

    pub fn remove_service(&mut self, id: &str) -> Result<Service, EditRejection> {
        let idx = self
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EditRejection::UnknownService(id.to_string()))?;
        Ok(self.services.remove(idx))
    }

    /// Write a drag-reorder result into the working service list.
    pub fn apply_reorder(&mut self, event: &ReorderEvent) {
        apply_order(&mut self.services, &event.services);
    }

    // -----------------------------------------------------------------------
    // Cosmetics
    // -----------------------------------------------------------------------

    pub fn set_theme(&mut self, id: &str) {
        self.theme_id = id.to_string();
    }

    pub fn set_card_size(&mut self, size: CardSize) {
        self.cosmetics.card_size = size;
    }

    pub fn set_animation_level(&mut self, level: AnimationLevel) {
        self.cosmetics.animation_level = level;
    }

    /// Set card opacity in percent, clamped to 30..=100.
    pub fn set_opacity(&mut self, percent: i64) {
        self.cosmetics.opacity = CardOpacity::new(percent);
    }

    pub fn set_glass(&mut self, enabled: bool) {
        self.cosmetics.glass = enabled;
    }

    pub(crate) fn into_parts(self) -> (Vec<Service>, Vec<String>, CosmeticSettings, String) {
        (self.services, self.categories, self.cosmetics, self.theme_id)
    }
}
