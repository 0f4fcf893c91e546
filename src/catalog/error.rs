use crate::platform::PlatformId;

/// Errors raised while building or reading a [`super::DownloadCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A platform was looked up that the catalog has no entry for
    MissingEntry(PlatformId),
    /// The same platform was configured twice (e.g. via `mac` and `macos`)
    DuplicateEntry(PlatformId),
    /// A key that names no known platform
    UnknownPlatform(String),
    /// A URI that is not an absolute HTTP(S) location
    InvalidUri {
        platform: PlatformId,
        uri: String,
        reason: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::MissingEntry(platform) => {
                write!(f, "Download catalog has no entry for '{}'", platform)
            }
            CatalogError::DuplicateEntry(platform) => {
                write!(f, "Download catalog configures '{}' more than once", platform)
            }
            CatalogError::UnknownPlatform(key) => {
                write!(
                    f,
                    "Unknown platform '{}' in download catalog. Expected one of: windows, macos, linux.",
                    key
                )
            }
            CatalogError::InvalidUri {
                platform,
                uri,
                reason,
            } => {
                write!(
                    f,
                    "Invalid download URI for '{}': {} ({})",
                    platform, uri, reason
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}
