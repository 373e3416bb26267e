//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types shared between the engine, the HTTP
//! layer, and library consumers. All types derive Serialize/Deserialize for
//! JSON serialization.

use serde::{Deserialize, Serialize};

use crate::models::Section;

/// Course Reference Number: the external identifier of a section.
///
/// Not required to be unique within a course pool, though in practice it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Crn(pub i64);

impl Crn {
    pub fn new(value: i64) -> Self {
        Crn(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Crn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Crn> for i64 {
    fn from(crn: Crn) -> Self {
        crn.0
    }
}

/// Wire representation of a section, as returned to the serving layer.
///
/// Days are rendered in canonical token order, times as `"HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub course: String,
    pub crn: i64,
    pub days: String,
    pub start: String,
    pub end: String,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        SectionSummary {
            course: section.course().to_string(),
            crn: section.crn().value(),
            days: section.days().to_string(),
            start: section.start().to_string(),
            end: section.end().to_string(),
        }
    }
}
