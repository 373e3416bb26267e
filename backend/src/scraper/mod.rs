//! Catalogue scraper for the upstream schedule-builder data service.
//!
//! The service returns a JavaScript `define({data:[ … ]})` blob; the
//! pipeline is fetch → decode into JSON → transform into the catalogue
//! schema consumed by [`crate::catalogue::Catalogue::load`]. Run once per
//! term via the `asb-scrape` binary.

pub mod decode;
pub mod transform;

pub use transform::ScrapedSection;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde_json::Value;

/// Latest-term catalogue endpoint of the upstream data service.
pub const DEFAULT_CATALOGUE_URL: &str = "https://myhub.njit.edu/scbldr/include/datasvc.php?p=/";

/// Download the raw datasvc response body.
pub async fn fetch(url: &str) -> Result<String> {
    log::info!("downloading catalogue from {url}");
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()
        .context("catalogue endpoint returned an error status")?;
    response.text().await.context("failed to read response body")
}

/// Decode and transform a raw datasvc response into catalogue records.
pub fn convert(raw_js: &str) -> Result<BTreeMap<String, Vec<ScrapedSection>>> {
    let payload = decode::extract_define_payload(raw_js)?;
    let quoted = decode::quote_bare_keys(&payload)?;
    let blob: Value =
        serde_json::from_str(&quoted).context("decoded payload is not valid JSON")?;
    transform::transform(&blob)
}
