//! Structured parse of the catalogue data file.
//!
//! The file is a JSON object mapping course code to an array of section
//! records. Only the fields the engine needs are extracted here; display
//! fields the scraper retains (`location`, `section`, `instructor`, `title`)
//! and anything else are discarded at this boundary.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::CatalogueError;
use crate::api::Crn;
use crate::models::{DaySet, MinuteOfDay, Section};

/// Required fields of one section record. Unknown keys are dropped.
#[derive(Debug, Deserialize)]
struct RawSection {
    crn: i64,
    days: String,
    start: String,
    end: String,
}

pub(super) fn parse_courses(
    raw: &str,
) -> Result<BTreeMap<String, Vec<Section>>, CatalogueError> {
    let records: BTreeMap<String, Vec<RawSection>> = serde_json::from_str(raw)
        .map_err(|e| CatalogueError::malformed(format!("invalid JSON: {e}")))?;

    let mut courses: BTreeMap<String, Vec<Section>> = BTreeMap::new();
    for (code, raw_sections) in records {
        let code = code.trim().to_ascii_uppercase();
        if raw_sections.is_empty() {
            return Err(CatalogueError::malformed(format!(
                "course {code} has no sections"
            )));
        }

        let mut pool = Vec::with_capacity(raw_sections.len());
        for raw_section in raw_sections {
            pool.push(build_section(&code, raw_section)?);
        }

        if courses.insert(code.clone(), pool).is_some() {
            return Err(CatalogueError::malformed(format!(
                "duplicate course code {code}"
            )));
        }
    }
    Ok(courses)
}

fn build_section(code: &str, raw: RawSection) -> Result<Section, CatalogueError> {
    let context = format!("section {} of {code}", raw.crn);
    let days = DaySet::parse(&raw.days)
        .map_err(|e| CatalogueError::malformed(format!("{context}: {e}")))?;
    let start = MinuteOfDay::parse(&raw.start)
        .map_err(|e| CatalogueError::malformed(format!("{context}: {e}")))?;
    let end = MinuteOfDay::parse(&raw.end)
        .map_err(|e| CatalogueError::malformed(format!("{context}: {e}")))?;
    Section::new(code, Crn::new(raw.crn), days, start, end)
        .map_err(|e| CatalogueError::malformed(e.to_string()))
}
