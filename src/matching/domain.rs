use serde::{Deserialize, Serialize};

use crate::quiz::GoalTag;

/// How a user prefers to take in new material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
    Mixed,
}

/// Primary driver a user reports for pursuing their goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motivation {
    Achievement,
    Community,
    Growth,
    Purpose,
    Autonomy,
}

/// Self-reported intensity of engagement, from drop-in to all-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commitment {
    Casual,
    Moderate,
    Serious,
    Obsessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A tribe's observed posting cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

/// Trait scores on a 0-10 scale; 0 is the low end of the named trait and 10
/// the high end (so `introvert: 10` is fully introverted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub introvert: u8,
    pub detail_oriented: u8,
    pub planner: u8,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            introvert: 5,
            detail_oriented: 5,
            planner: 5,
        }
    }
}

/// Derived behavioral profile, rebuilt from quiz answers on every scoring
/// request and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub primary_goal: GoalTag,
    #[serde(default)]
    pub secondary_goals: Vec<GoalTag>,
    /// Free-form tags, compared case-insensitively.
    pub interests: Vec<String>,
    pub learning_style: LearningStyle,
    pub motivation: Motivation,
    pub commitment: Commitment,
    pub personality: PersonalityTraits,
    pub experience: ExperienceLevel,
    /// Carried through for downstream display; not scored numerically.
    pub challenge_area: String,
    pub preferred_community_style: String,
}

/// Snapshot of a candidate tribe as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TribeProfile {
    pub id: String,
    pub name: String,
    pub goal: GoalTag,
    #[serde(default)]
    pub interests: Vec<String>,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub preferred_learning_style: Option<LearningStyle>,
    /// Presence of non-empty rules signals a structured tribe; the content
    /// is not interpreted.
    #[serde(default)]
    pub rules: Option<String>,
    pub is_verified: bool,
    /// Average member engagement on a 0-10 scale.
    pub avg_engagement: f64,
    pub members_count: u32,
}
