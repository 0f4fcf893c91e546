//! Download catalog
//!
//! Static mapping from [`PlatformId`] to the URI of its release artifact.
//! An entry whose value is `None` is a valid "not yet available" state, an
//! entry that is missing altogether is a configuration error.

mod error;

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::platform::PlatformId;
use crate::runtime::Runtime;

pub use error::CatalogError;

/// Owner segment used by template catalogs that were never filled in.
pub const PLACEHOLDER_OWNER: &str = "yourusername";

const BUILTIN_WINDOWS: &str =
    "https://github.com/delanoklee/acuity/releases/latest/download/acuity-windows-x64.zip";
const BUILTIN_MACOS: &str =
    "https://github.com/delanoklee/acuity/releases/latest/download/acuity-macos-x64.dmg";
const BUILTIN_LINUX: &str =
    "https://github.com/delanoklee/acuity/releases/latest/download/acuity-linux-x64.tar.gz";

/// Read-only mapping of platform to optional artifact URI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadCatalog {
    entries: BTreeMap<PlatformId, Option<String>>,
}

/// On-disk representation: `{ "windows": "https://...", "macos": null }`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(transparent)]
struct RawCatalog(BTreeMap<String, Option<String>>);

impl DownloadCatalog {
    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        let entries = [
            (PlatformId::Windows, Some(BUILTIN_WINDOWS.to_string())),
            (PlatformId::Macos, Some(BUILTIN_MACOS.to_string())),
            (PlatformId::Linux, Some(BUILTIN_LINUX.to_string())),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build a catalog, validating every URI.
    ///
    /// Empty values and template URIs pointing at [`PLACEHOLDER_OWNER`] are
    /// stored as `None`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (PlatformId, Option<S>)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (platform, uri) in entries {
            let uri = match uri.map(Into::into) {
                Some(uri) => normalize(platform, uri)?,
                None => None,
            };
            if map.insert(platform, uri).is_some() {
                return Err(CatalogError::DuplicateEntry(platform));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parse a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json).context("Failed to parse catalog JSON")?;

        let mut entries = Vec::with_capacity(raw.0.len());
        for (key, uri) in raw.0 {
            let platform = key
                .parse::<PlatformId>()
                .map_err(|_| CatalogError::UnknownPlatform(key.clone()))?;
            entries.push((platform, uri));
        }

        Ok(Self::from_entries(entries)?)
    }

    /// Load a catalog file through the runtime.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        debug!("Loading download catalog from {:?}", path);
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read catalog {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Invalid catalog {:?}", path))
    }

    /// Look up a platform's artifact.
    ///
    /// `Ok(None)` means the platform is known but pending.
    pub fn entry(&self, platform: PlatformId) -> Result<Option<&str>, CatalogError> {
        self.entries
            .get(&platform)
            .map(|uri| uri.as_deref())
            .ok_or(CatalogError::MissingEntry(platform))
    }

    pub fn contains(&self, platform: PlatformId) -> bool {
        self.entries.contains_key(&platform)
    }

    /// Entries in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, Option<&str>)> {
        self.entries.iter().map(|(p, uri)| (*p, uri.as_deref()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let raw = RawCatalog(
            self.entries
                .iter()
                .map(|(p, uri)| (p.key().to_string(), uri.clone()))
                .collect(),
        );
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}

fn normalize(platform: PlatformId, uri: String) -> Result<Option<String>, CatalogError> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.contains(PLACEHOLDER_OWNER) {
        warn!(
            "Catalog entry for {} still points at a template URI, treating it as pending",
            platform
        );
        return Ok(None);
    }

    let invalid = |reason: &str| CatalogError::InvalidUri {
        platform,
        uri: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(Some(trimmed.to_string()))
}
