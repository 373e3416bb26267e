//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! catalogue and solver for the actual work.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

use super::dto::{
    CatalogueStatusDto, CourseInfoDto, CourseListResponse, CoursePoolResponse, HealthResponse,
    SectionSummary, SolveRequest, SolveResponse, StatsSnapshot,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{DaySet, MinuteOfDay};
use crate::solver::{self, Constraints};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Embedded landing page with the solve form.
const INDEX_HTML: &str = include_str!("index.html");

// =============================================================================
// Landing Page & Health
// =============================================================================

/// GET /
///
/// Static landing page; submits to the JSON solve endpoint.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint reporting the loaded catalogue.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalogue: CatalogueStatusDto {
            courses: state.catalogue.course_count(),
            sections: state.catalogue.section_count(),
            checksum: state.catalogue.checksum().to_string(),
            loaded_at: state.catalogue.loaded_at(),
        },
    }))
}

// =============================================================================
// Solve
// =============================================================================

/// POST /v1/solve
///
/// Enumerate clash-free schedules for the requested courses. Zero results is
/// a successful response with an empty list, not an error.
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> HandlerResult<SolveResponse> {
    let outcome = run_solve(&state, &request);
    if outcome.is_err() {
        state.stats.record_rejected();
    }
    let solutions = outcome?;

    state
        .stats
        .record_solve(solutions.schedules.len(), solutions.truncated);

    let schedules: Vec<Vec<SectionSummary>> = solutions
        .schedules
        .iter()
        .map(|schedule| schedule.iter().map(|s| SectionSummary::from(*s)).collect())
        .collect();
    let total = schedules.len();

    Ok(Json(SolveResponse {
        schedules,
        total,
        truncated: solutions.truncated,
    }))
}

fn run_solve<'a>(
    state: &'a AppState,
    request: &SolveRequest,
) -> Result<solver::Solutions<'a>, AppError> {
    let earliest = MinuteOfDay::parse(&request.start)?;
    let latest = MinuteOfDay::parse(&request.end)?;
    let allowed_days = DaySet::parse(&request.days)?;
    let constraints = Constraints::new(earliest, latest, allowed_days)?;
    let cap = state.effective_cap(request.max_solutions);

    let solutions = solver::solve(&state.catalogue, &request.courses, constraints, cap)?;
    Ok(solutions)
}

// =============================================================================
// Catalogue Browsing
// =============================================================================

/// GET /v1/courses
///
/// List all known course codes with their section counts.
pub async fn list_courses(State(state): State<AppState>) -> HandlerResult<CourseListResponse> {
    let courses: Vec<CourseInfoDto> = state
        .catalogue
        .course_codes()
        .map(|code| CourseInfoDto {
            course: code.to_string(),
            // Codes come from the catalogue itself, so the pool exists.
            sections: state.catalogue.get(code).map(|pool| pool.len()).unwrap_or(0),
        })
        .collect();
    let total = courses.len();

    Ok(Json(CourseListResponse { courses, total }))
}

/// GET /v1/courses/{code}
///
/// One course's candidate section pool.
pub async fn get_course(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> HandlerResult<CoursePoolResponse> {
    let pool = state
        .catalogue
        .get(&code)
        .ok_or_else(|| AppError::UnknownCourse(format!("unknown course: {}", code)))?;

    Ok(Json(CoursePoolResponse {
        course: code.trim().to_ascii_uppercase(),
        sections: pool.iter().map(SectionSummary::from).collect(),
    }))
}

// =============================================================================
// Statistics
// =============================================================================

/// GET /v1/stats
///
/// Snapshot of the process-wide solve counters.
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<StatsSnapshot> {
    Ok(Json(state.stats.snapshot()))
}
