//! homedash desktop preview.
//!
//! Loads the dashboard from its file store and prints the theme styles and
//! the grouped service view to stdout.
//!
//! Usage: `homedash [CONFIG] [SEARCH]`. The config path falls back to
//! `HOMEDASH_CONFIG`, then `homedash.toml` in the working directory.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};

use homedash_core::config::DashboardConfig;
use homedash_core::dashboard::Dashboard;
use homedash_core::store::FileStore;
use homedash_core::theme::StyleSheet;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path: PathBuf = args
        .next()
        .or_else(|| std::env::var("HOMEDASH_CONFIG").ok())
        .unwrap_or_else(|| "homedash.toml".to_string())
        .into();
    let search = args.next();

    let config = DashboardConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    let store = FileStore::new(&config.store_dir);
    log::info!(
        "Starting homedash (store: {}, {} themes)",
        store.root().display(),
        config.theme_registry().themes().len(),
    );

    let mut dashboard = Dashboard::from_config(store, StyleSheet::new(), &config);
    if let Some(term) = search {
        dashboard.search(&term);
    }

    print!("{}", dashboard.style().to_css());
    println!();
    print!("{}", render::render_view(&dashboard.view()));
    print!("{}", render::render_notices(&dashboard.take_notices()));
    Ok(())
}
