//! The matching and ranking engine.
//!
//! Three pure entry points cover the full flow: [`build_profile`] derives a
//! [`UserProfile`] from raw answers, [`extract_goal_weights`] accumulates
//! per-goal answer weights, and [`rank_tribes`] scores and orders candidate
//! tribes. Inputs are never mutated and no entry point can fail for
//! well-typed input.

pub mod domain;
pub mod profile;
pub mod ranker;
pub mod scoring;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityLevel, Commitment, ExperienceLevel, LearningStyle, Motivation, PersonalityTraits,
    TribeProfile, UserProfile,
};
pub use profile::build_profile;
pub use ranker::{rank_tribes, rank_with_scorer, DEFAULT_LIMIT};
pub use scoring::{
    MatchBreakdown, MatchResult, MatchScorer, MatchWeights, Recommendation, STANDARD_WEIGHTS,
};
pub use weights::{extract_goal_weights, GoalWeights};
