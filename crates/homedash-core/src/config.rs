//! Dashboard configuration, loaded from TOML.
//!
//! ```toml
//! edit_passphrase = "momopc"
//! store_dir = ".homedash"
//! default_theme = "default"
//!
//! [[themes]]
//! id = "crimson"
//! name = "Crimson"
//! background = "#100000"
//! primary = "#ff2040"
//! secondary = "#301010"
//! accent = "#ff6080"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DashError, Result};
use crate::theme::{Theme, ThemeRegistry};

fn default_passphrase() -> String {
    "momopc".to_string()
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".homedash")
}

fn default_theme() -> String {
    "default".to_string()
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Passphrase for the layout editor's convenience lock.
    #[serde(default = "default_passphrase")]
    pub edit_passphrase: String,
    /// Directory for the file-backed store.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    /// Theme used when none has been persisted yet.
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// Extra themes appended to (or replacing) the built-ins.
    #[serde(default)]
    pub themes: Vec<Theme>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            edit_passphrase: default_passphrase(),
            store_dir: default_store_dir(),
            default_theme: default_theme(),
            themes: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        if config.edit_passphrase.is_empty() {
            return Err(DashError::Config("edit_passphrase must not be empty".into()));
        }
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_toml(&src),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {} -- using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Built-in themes plus any configured ones.
    pub fn theme_registry(&self) -> ThemeRegistry {
        ThemeRegistry::builtin().with_themes(self.themes.iter().cloned())
    }
}
