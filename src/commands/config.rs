use anyhow::Result;
use log::{debug, info};
use std::fmt;
use std::path::PathBuf;

use crate::{catalog::DownloadCatalog, runtime::Runtime};

/// Environment variable naming a catalog file.
pub const CATALOG_ENV: &str = "ACUITY_CATALOG";

/// Where the active catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `--catalog` flag or `ACUITY_CATALOG`
    Explicit(PathBuf),
    /// `<config_dir>/acuity/catalog.json`
    UserConfig(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Explicit(path) | CatalogSource::UserConfig(path) => {
                write!(f, "{}", path.display())
            }
            CatalogSource::Builtin => f.write_str("built-in"),
        }
    }
}

pub struct Config {
    pub catalog: DownloadCatalog,
    pub catalog_source: CatalogSource,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, catalog_path: Option<PathBuf>) -> Result<Self> {
        let catalog_source = catalog_source(runtime, catalog_path);
        info!("Using download catalog: {}", catalog_source);

        let catalog = match &catalog_source {
            CatalogSource::Explicit(path) | CatalogSource::UserConfig(path) => {
                DownloadCatalog::load(runtime, path)?
            }
            CatalogSource::Builtin => DownloadCatalog::builtin(),
        };

        Ok(Self {
            catalog,
            catalog_source,
        })
    }
}

/// Default per-user catalog location
pub fn default_catalog_path<R: Runtime>(runtime: &R) -> Option<PathBuf> {
    runtime
        .config_dir()
        .map(|dir| dir.join("acuity").join("catalog.json"))
}

#[tracing::instrument(skip(runtime))]
fn catalog_source<R: Runtime>(runtime: &R, catalog_path: Option<PathBuf>) -> CatalogSource {
    if let Some(path) = catalog_path {
        return CatalogSource::Explicit(path);
    }

    if let Ok(path) = runtime.env_var(CATALOG_ENV) {
        if !path.trim().is_empty() {
            debug!("Catalog path taken from {}", CATALOG_ENV);
            return CatalogSource::Explicit(PathBuf::from(path));
        }
    }

    match default_catalog_path(runtime) {
        Some(path) if runtime.exists(&path) => CatalogSource::UserConfig(path),
        _ => CatalogSource::Builtin,
    }
}
