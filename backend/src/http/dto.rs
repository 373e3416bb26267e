//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The section wire format is re-exported from the api module since it
//! already derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::SectionSummary;
pub use crate::services::StatsSnapshot;

/// Request body for the solve endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Requested course codes, case-insensitive, in display order
    pub courses: Vec<String>,
    /// Earliest acceptable section start, "HH:MM"
    pub start: String,
    /// Latest acceptable section end, "HH:MM"
    pub end: String,
    /// Allowed day tokens, e.g. "MTWRF"
    pub days: String,
    /// Solution cap; defaults to the configured limit, clamped to the ceiling
    #[serde(default)]
    pub max_solutions: Option<usize>,
}

/// Response for the solve endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Valid schedules in enumeration order, each one section per course
    pub schedules: Vec<Vec<SectionSummary>>,
    /// Number of schedules returned
    pub total: usize,
    /// True iff enumeration stopped at the solution cap
    pub truncated: bool,
}

/// One course in the catalogue listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfoDto {
    /// Course code
    pub course: String,
    /// Number of candidate sections
    pub sections: usize,
}

/// Course list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    /// All known courses in sorted order
    pub courses: Vec<CourseInfoDto>,
    /// Total count
    pub total: usize,
}

/// One course's section pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePoolResponse {
    pub course: String,
    pub sections: Vec<SectionSummary>,
}

/// Catalogue summary reported by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueStatusDto {
    pub courses: usize,
    pub sections: usize,
    /// SHA-256 of the loaded data file
    pub checksum: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Loaded catalogue summary
    pub catalogue: CatalogueStatusDto,
}
