//! Catalogue store: course code → candidate sections.
//!
//! The catalogue is an immutable, in-memory mapping built once at startup
//! from the scraped data file and shared behind an `Arc` for the process
//! lifetime. Loading is all-or-nothing: any malformed record fails the whole
//! load, so no request is ever served from a partial catalogue. Concurrent
//! readers need no locking.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Serving layer (HTTP handlers)                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ get(course) -> &[Section]
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Catalogue (in-memory, write-once)                      │
//! └───────────────────▲─────────────────────────────────────┘
//!                     │ load(path), once at startup
//!            all_sections.json (produced by asb-scrape)
//! ```

pub mod error;
mod load;

pub use error::CatalogueError;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::models::Section;

/// Immutable mapping from uppercase course code to its ordered section pool.
#[derive(Debug, Clone)]
pub struct Catalogue {
    courses: BTreeMap<String, Vec<Section>>,
    checksum: String,
    loaded_at: DateTime<Utc>,
}

impl Catalogue {
    /// Load the catalogue from a JSON data file.
    ///
    /// A missing or unreadable file is `DataUnavailable`; any malformed
    /// record fails the whole load with `Malformed`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogueError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json_str(&raw)?;
        log::info!(
            "catalogue loaded from {}: {} courses, {} sections, checksum {}",
            path.display(),
            catalogue.course_count(),
            catalogue.section_count(),
            catalogue.checksum()
        );
        Ok(catalogue)
    }

    /// Build a catalogue from raw JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogueError> {
        let courses = load::parse_courses(raw)?;
        Ok(Catalogue {
            courses,
            checksum: content_checksum(raw.as_bytes()),
            loaded_at: Utc::now(),
        })
    }

    /// Look up a course's section pool. The key is case-normalized, so
    /// `"cs100"` and `"CS100"` resolve identically.
    pub fn get(&self, course: &str) -> Option<&[Section]> {
        let key = course.trim().to_ascii_uppercase();
        self.courses.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.get(course).is_some()
    }

    /// All course codes in sorted order.
    pub fn course_codes(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn section_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    /// SHA-256 hex digest of the raw data the catalogue was built from.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn content_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "CS100": [
            {"crn": 101, "days": "MW", "start": "09:00", "end": "10:15"},
            {"crn": 102, "days": "TR", "start": "13:00", "end": "14:15"}
        ],
        "MA100": [
            {"crn": 201, "days": "M", "start": "10:15", "end": "11:30"}
        ]
    }"#;

    #[test]
    fn test_lookup_is_case_normalizing() {
        let catalogue = Catalogue::from_json_str(SAMPLE).unwrap();
        assert!(catalogue.get("CS100").is_some());
        assert!(catalogue.get("cs100").is_some());
        assert!(catalogue.get(" cs100 ").is_some());
        assert!(catalogue.get("CS999").is_none());
    }

    #[test]
    fn test_counts() {
        let catalogue = Catalogue::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalogue.course_count(), 2);
        assert_eq!(catalogue.section_count(), 3);
        assert!(catalogue.contains("MA100"));
    }

    #[test]
    fn test_course_codes_sorted() {
        let catalogue = Catalogue::from_json_str(SAMPLE).unwrap();
        let codes: Vec<&str> = catalogue.course_codes().collect();
        assert_eq!(codes, vec!["CS100", "MA100"]);
    }

    #[test]
    fn test_checksum_tracks_content() {
        let a = Catalogue::from_json_str(SAMPLE).unwrap();
        let b = Catalogue::from_json_str(SAMPLE).unwrap();
        assert_eq!(a.checksum(), b.checksum());
        assert_eq!(a.checksum().len(), 64);

        let other = r#"{"CS100": [{"crn": 1, "days": "M", "start": "09:00", "end": "10:00"}]}"#;
        let c = Catalogue::from_json_str(other).unwrap();
        assert_ne!(a.checksum(), c.checksum());
    }

    #[test]
    fn test_load_missing_file_is_data_unavailable() {
        let result = Catalogue::load("/nonexistent/all_sections.json");
        assert!(matches!(
            result,
            Err(CatalogueError::DataUnavailable { .. })
        ));
    }
}
