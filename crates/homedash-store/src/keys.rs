//! Well-known store keys.

/// Ordered list of every service record (the global layout).
pub const SERVICES_LAYOUT: &str = "dashboard-services-layout";
/// Custom category order; empty means "derive from services".
pub const CATEGORIES_LAYOUT: &str = "dashboard-categories-layout";
/// Active theme id.
pub const THEME: &str = "app-theme";
pub const CARD_SIZE: &str = "dashboard-card-size";
pub const ANIMATION_LEVEL: &str = "dashboard-animation-level";
/// Card opacity in percent (integer).
pub const CARD_OPACITY: &str = "dashboard-card-opacity";
pub const GLASS_EFFECT: &str = "dashboard-glass-effect";
