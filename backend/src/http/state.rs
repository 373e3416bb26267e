//! Application state for the HTTP server.

use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::config::LimitSettings;
use crate::services::SolveStats;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalogue snapshot, shared by every request
    pub catalogue: Arc<Catalogue>,
    /// Solution-cap limits from configuration
    pub limits: LimitSettings,
    /// Process-wide solve counters
    pub stats: SolveStats,
}

impl AppState {
    /// Create a new application state around a loaded catalogue.
    pub fn new(catalogue: Arc<Catalogue>, limits: LimitSettings) -> Self {
        Self {
            catalogue,
            limits,
            stats: SolveStats::new(),
        }
    }

    /// Clamp a caller-supplied cap into the configured limits.
    pub fn effective_cap(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.default_max_solutions)
            .min(self.limits.max_solutions_ceiling)
    }
}
