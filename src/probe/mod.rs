//! Artifact availability check
//!
//! Asks the release host whether each catalog URI actually resolves to a
//! published file. This runs only on demand and never as part of routing.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use std::fmt;

use crate::catalog::DownloadCatalog;
use crate::http::HttpClient;
use crate::platform::PlatformId;

/// Trait for querying a release host (useful for testing)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtifactProbe: Send + Sync {
    /// HTTP status the artifact URI finally answers with.
    async fn status(&self, uri: &str) -> Result<u16>;
}

/// Probe backed by HEAD requests.
pub struct HttpProbe {
    client: HttpClient,
}

impl HttpProbe {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtifactProbe for HttpProbe {
    async fn status(&self, uri: &str) -> Result<u16> {
        Ok(self.client.head_status(uri).await?.as_u16())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Missing(u16),
    /// No URI configured, the page shows the unavailable notice
    Pending,
    Unreachable(String),
    /// The catalog has no entry at all; routing would fail
    Unconfigured,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Missing(status) => write!(f, "missing (HTTP {})", status),
            Availability::Pending => f.write_str("pending"),
            Availability::Unreachable(reason) => write!(f, "unreachable ({})", reason),
            Availability::Unconfigured => f.write_str("unconfigured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub platform: PlatformId,
    pub uri: Option<String>,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub results: Vec<ProbeResult>,
}

impl Report {
    /// True when every platform has an entry and every configured URI
    /// answered successfully. Pending entries do not count as failures.
    pub fn is_healthy(&self) -> bool {
        self.results.iter().all(|r| {
            matches!(
                r.availability,
                Availability::Available | Availability::Pending
            )
        })
    }
}

/// Probe every platform's catalog entry in platform order.
#[tracing::instrument(skip(probe, catalog))]
pub async fn check_catalog<P: ArtifactProbe + ?Sized>(
    probe: &P,
    catalog: &DownloadCatalog,
) -> Report {
    let mut results = Vec::new();

    for platform in PlatformId::ALL {
        let entry = catalog.entry(platform);
        let uri = entry.clone().ok().flatten();
        let availability = match entry {
            Err(e) => {
                warn!("{}", e);
                Availability::Unconfigured
            }
            Ok(None) => Availability::Pending,
            Ok(Some(uri)) => match probe.status(uri).await {
                Ok(status) if (200..300).contains(&status) => Availability::Available,
                Ok(status) => Availability::Missing(status),
                Err(e) => {
                    warn!("Could not reach {} artifact at {}: {:#}", platform, uri, e);
                    Availability::Unreachable(format!("{:#}", e))
                }
            },
        };
        debug!("{}: {}", platform, availability);

        results.push(ProbeResult {
            platform,
            uri: uri.map(str::to_string),
            availability,
        });
    }

    Report { results }
}
