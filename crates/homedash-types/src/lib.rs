//! Foundation types for homedash.
//!
//! This crate contains the data model shared by every homedash crate:
//! service records and their partial updates, cosmetic settings, and the
//! common error type. It has no I/O of its own.

pub mod error;
pub mod service;
pub mod settings;

pub use error::{DashError, Result};
pub use service::{IconKey, Service, ServicePatch};
pub use settings::{AnimationLevel, CardOpacity, CardSize, CosmeticSettings};
