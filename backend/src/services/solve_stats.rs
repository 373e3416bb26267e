//! In-memory solve statistics.
//!
//! A small process-wide tracker for observability: how many solve requests
//! the server has handled and how they ended. Cloneable; all clones share
//! the same counters.

use parking_lot::RwLock;
use std::sync::Arc;

/// Counters shared by all handler clones.
#[derive(Debug, Default)]
struct StatsInner {
    requests: u64,
    schedules_emitted: u64,
    truncated_solves: u64,
    empty_solves: u64,
    rejected_requests: u64,
    last_solve_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Cloneable solve statistics tracker.
#[derive(Clone)]
pub struct SolveStats {
    inner: Arc<RwLock<StatsInner>>,
}

/// Serializable point-in-time view of the counters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatsSnapshot {
    /// Solve requests that reached the engine and completed.
    pub requests: u64,
    /// Total schedules returned across all solves.
    pub schedules_emitted: u64,
    /// Solves that stopped at the solution cap.
    pub truncated_solves: u64,
    /// Solves that completed with zero schedules.
    pub empty_solves: u64,
    /// Requests rejected before enumeration (unknown course, bad constraint).
    pub rejected_requests: u64,
    pub last_solve_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SolveStats {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StatsInner::default())),
        }
    }

    /// Record a completed solve.
    pub fn record_solve(&self, emitted: usize, truncated: bool) {
        let mut inner = self.inner.write();
        inner.requests += 1;
        inner.schedules_emitted += emitted as u64;
        if truncated {
            inner.truncated_solves += 1;
        }
        if emitted == 0 {
            inner.empty_solves += 1;
        }
        inner.last_solve_at = Some(chrono::Utc::now());
    }

    /// Record a request rejected before any enumeration work.
    pub fn record_rejected(&self) {
        self.inner.write().rejected_requests += 1;
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.inner.read();
        StatsSnapshot {
            requests: inner.requests,
            schedules_emitted: inner.schedules_emitted,
            truncated_solves: inner.truncated_solves,
            empty_solves: inner.empty_solves,
            rejected_requests: inner.rejected_requests,
            last_solve_at: inner.last_solve_at,
        }
    }
}

impl Default for SolveStats {
    fn default() -> Self {
        Self::new()
    }
}
