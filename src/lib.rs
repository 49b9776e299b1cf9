// src/lib.rs
//! Career-orientation test interpretation service.
//!
//! The heart of the crate is [`insights::interpret`], a pure function turning
//! questionnaire results into user-facing insights. Around it sit a SQLite
//! store for test-result records, the rocket HTTP API and a CLI.

pub mod cli;
pub mod core;
pub mod insights;
pub mod results;
pub mod web;

pub use insights::{interpret, InsightsResult, TestType};
pub use web::start_web_server;
