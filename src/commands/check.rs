use anyhow::Result;
use std::path::PathBuf;

use crate::{
    http::HttpClient,
    probe::{ArtifactProbe, HttpProbe, Report, check_catalog},
    runtime::Runtime,
};

use super::config::Config;

/// Check that every configured download URI resolves to a published artifact
#[tracing::instrument(skip(runtime, catalog_path))]
pub async fn check<R: Runtime>(runtime: R, catalog_path: Option<PathBuf>) -> Result<()> {
    let probe = HttpProbe::new(HttpClient::default_client()?);
    run(runtime, catalog_path, &probe).await
}

pub(crate) async fn run<R: Runtime, P: ArtifactProbe + ?Sized>(
    runtime: R,
    catalog_path: Option<PathBuf>,
    probe: &P,
) -> Result<()> {
    let config = Config::new(&runtime, catalog_path)?;
    println!("Catalog: {}", config.catalog_source);

    let report = check_catalog(probe, &config.catalog).await;
    print_report(&report);

    if !report.is_healthy() {
        anyhow::bail!(
            "Some download links do not resolve to a published artifact or are not configured."
        );
    }
    Ok(())
}

fn print_report(report: &Report) {
    for result in &report.results {
        println!(
            "{:<8} {:<24} {}",
            result.platform.key(),
            result.availability.to_string(),
            result.uri.as_deref().unwrap_or("-")
        );
    }
}
