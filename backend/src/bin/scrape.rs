//! ASB Catalogue Scraper Binary
//!
//! Downloads the upstream schedule-builder catalogue, decodes the
//! JavaScript blob, and writes the JSON data file the server loads at
//! startup. Run once per term.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin asb-scrape --features scraper                  # latest term
//! cargo run --bin asb-scrape --features scraper -- <datasvc-url> # specific term
//! ```
//!
//! The destination file defaults to `all_sections.json` and can be
//! overridden with `ASB_CATALOGUE`.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

use asb_rust::scraper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| scraper::DEFAULT_CATALOGUE_URL.to_string());
    let dest = env::var("ASB_CATALOGUE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("all_sections.json"));

    println!("downloading catalogue from {url} ...");
    let raw_js = scraper::fetch(&url).await?;

    let catalogue = scraper::convert(&raw_js)?;
    let total_sections: usize = catalogue.values().map(Vec::len).sum();

    let json = serde_json::to_string_pretty(&catalogue)?;
    std::fs::write(&dest, json)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    println!(
        "saved {} sections across {} courses to {}",
        total_sections,
        catalogue.len(),
        dest.display()
    );
    Ok(())
}
