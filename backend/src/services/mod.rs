//! Service layer for cross-cutting concerns around the solver.
//!
//! The engine itself is pure; what lives here is the request-scoped glue the
//! serving layer shares across handlers, currently the in-memory solve
//! statistics tracker.

pub mod solve_stats;

pub use solve_stats::{SolveStats, StatsSnapshot};
