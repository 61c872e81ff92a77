//! Quiz-driven tribe matching.
//!
//! The crate derives a behavioral profile from a user's personality-quiz
//! answers and scores it against candidate tribes, producing ranked 0-100
//! compatibility results with per-factor breakdowns and human-readable
//! reasons to join. All engine entry points are pure functions over plain
//! in-memory records; persistence and transport belong to the caller.

pub mod config;
pub mod error;
pub mod matching;
pub mod quiz;
pub mod telemetry;
