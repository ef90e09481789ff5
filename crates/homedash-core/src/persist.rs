//! Typed access to the persisted dashboard layout and settings.
//!
//! Each value lives under its own store key (see
//! [`keys`](crate::store::keys)), so a corrupt entry only resets that one
//! value to its default.

use crate::catalog::seed_services;
use crate::error::Result;
use crate::service::Service;
use crate::settings::{AnimationLevel, CardOpacity, CardSize, CosmeticSettings};
use crate::store::{Store, StoreExt, keys};

/// Persisted service list, or the seed catalog on first run.
pub fn load_services<S: Store + ?Sized>(store: &S) -> Vec<Service> {
    store.read_or(keys::SERVICES_LAYOUT, seed_services())
}

pub fn save_services<S: Store + ?Sized>(store: &mut S, services: &[Service]) -> Result<()> {
    store.write_value(keys::SERVICES_LAYOUT, services)
}

/// Persisted custom category order; empty when never customized.
pub fn load_category_order<S: Store + ?Sized>(store: &S) -> Vec<String> {
    store.read_or(keys::CATEGORIES_LAYOUT, Vec::new())
}

pub fn save_category_order<S: Store + ?Sized>(store: &mut S, categories: &[String]) -> Result<()> {
    store.write_value(keys::CATEGORIES_LAYOUT, categories)
}

/// Persisted theme id, or `default_id`.
pub fn load_theme_id<S: Store + ?Sized>(store: &S, default_id: &str) -> String {
    store.read_or(keys::THEME, default_id.to_string())
}

/// Cosmetic settings, each field read from its own key.
pub fn load_cosmetics<S: Store + ?Sized>(store: &S) -> CosmeticSettings {
    CosmeticSettings {
        card_size: store.read_or(keys::CARD_SIZE, CardSize::default()),
        animation_level: store.read_or(keys::ANIMATION_LEVEL, AnimationLevel::default()),
        opacity: store.read_or(keys::CARD_OPACITY, CardOpacity::default()),
        glass: store.read_or(keys::GLASS_EFFECT, false),
    }
}

/// Write every cosmetic key, even after a failure. Returns the first error.
pub fn save_cosmetics<S: Store + ?Sized>(store: &mut S, settings: &CosmeticSettings) -> Result<()> {
    let results = [
        store.write_value(keys::CARD_SIZE, &settings.card_size),
        store.write_value(keys::ANIMATION_LEVEL, &settings.animation_level),
        store.write_value(keys::CARD_OPACITY, &settings.opacity),
        store.write_value(keys::GLASS_EFFECT, &settings.glass),
    ];
    results.into_iter().collect()
}
