use anyhow::Result;
use std::path::PathBuf;

use crate::{runtime::Runtime, window::WindowConfig};

use super::config::Config;

/// Print the effective download catalog and where it was loaded from
#[tracing::instrument(skip(runtime, catalog_path))]
pub fn catalog<R: Runtime>(runtime: R, catalog_path: Option<PathBuf>) -> Result<()> {
    let config = Config::new(&runtime, catalog_path)?;
    println!("# source: {}", config.catalog_source);
    println!("{}", config.catalog.to_json_pretty()?);
    Ok(())
}

/// Print the launcher window configuration
pub fn window() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&WindowConfig::default())?);
    Ok(())
}
