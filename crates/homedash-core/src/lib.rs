//! homedash core.
//!
//! Everything between the persisted key-value store and a presentation
//! layer: the seed catalog, icon and theme registries, category grouping and
//! search, the drag-reorder engine, the layout editor, and the
//! [`Dashboard`](dashboard::Dashboard) state container that composes them.
//! Rendering is left to the caller.

// Re-exports from homedash-types and homedash-store.
pub use homedash_store as store;
pub use homedash_types::error;
pub use homedash_types::service;
pub use homedash_types::settings;

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod grouping;
pub mod icons;
pub mod notice;
pub mod persist;
pub mod reorder;
pub mod theme;
