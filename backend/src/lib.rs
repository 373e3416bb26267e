//! # Auto Schedule Builder Backend
//!
//! Clash-free course timetable search engine.
//!
//! This crate finds every weekly meeting-time combination for a set of
//! requested courses that satisfies a day-set and time-window constraint,
//! with no two sections overlapping. The search is a capped, lazy walk of
//! the Cartesian product of each course's candidate sections. The backend
//! exposes a REST API via Axum plus a minimal HTML landing page.
//!
//! ## Features
//!
//! - **Catalogue**: immutable in-memory course → sections store, loaded
//!   once at startup from the scraped JSON data file
//! - **Solver**: deterministic, capped enumeration of clash-free schedules
//! - **HTTP API**: solve, catalogue browsing, health, and stats endpoints
//! - **Scraper**: converts the upstream datasvc blob into the data file
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: DTO types shared across the library surface
//! - [`models`]: entity model (times, day sets, sections)
//! - [`catalogue`]: catalogue store and data-file loading
//! - [`solver`]: the schedule enumeration engine
//! - [`services`]: solve statistics for observability
//! - [`config`]: TOML server configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`scraper`]: upstream catalogue scraper pipeline

pub mod api;

pub mod catalogue;
pub mod config;
pub mod models;

pub mod services;
pub mod solver;

#[cfg(feature = "scraper")]
pub mod scraper;

#[cfg(feature = "http-server")]
pub mod http;
