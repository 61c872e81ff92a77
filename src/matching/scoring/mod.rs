//! Scores one (profile, tribe) pair into a [`MatchResult`].

mod config;
mod reasons;
mod rules;

pub use config::{MatchWeights, STANDARD_WEIGHTS};

use serde::{Deserialize, Serialize};

use super::domain::{TribeProfile, UserProfile};
use super::weights::GoalWeights;

/// Recommendation tier derived from the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    Marginal,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::HighlyRecommended => "highly_recommended",
            Recommendation::Recommended => "recommended",
            Recommendation::Marginal => "marginal",
        }
    }
}

/// The five sub-scores as actually fed into the weighted sum, rounded for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub goal_match: u8,
    pub interest_match: u8,
    pub learning_style_match: u8,
    pub personality_match: u8,
    pub engagement_match: u8,
}

/// Scored outcome for one candidate tribe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub tribe_id: String,
    pub tribe_name: String,
    /// Combined compatibility score, rounded to an integer 0-100.
    pub match_score: u8,
    /// Display form of `match_score`, e.g. `"82%"`.
    pub match_percentage: String,
    pub recommendation: Recommendation,
    pub breakdown: MatchBreakdown,
    /// Up to three reasons, in fixed priority order.
    pub reasons_to_join: Vec<String>,
    /// Pre-rounding combined score; the ranker sorts by this exact value.
    #[serde(skip)]
    pub(crate) combined: f64,
}

impl MatchResult {
    pub fn combined(&self) -> f64 {
        self.combined
    }
}

/// Unrounded sub-scores, already clamped to [0, 100].
pub(crate) struct SubScores {
    pub goal: f64,
    pub interest: f64,
    pub learning_style: f64,
    pub personality: f64,
    pub engagement: f64,
}

/// Stateless scorer applying a [`MatchWeights`] rubric to (profile, tribe)
/// pairs. Deterministic and total: missing optional tribe fields resolve to
/// neutral credit instead of errors.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    weights: MatchWeights,
}

impl MatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn score(
        &self,
        profile: &UserProfile,
        tribe: &TribeProfile,
        answer_weights: Option<&GoalWeights>,
    ) -> MatchResult {
        let scores = SubScores {
            goal: rules::goal_match(profile, tribe, answer_weights).clamp(0.0, 100.0),
            interest: rules::interest_match(&profile.interests, &tribe.interests)
                .clamp(0.0, 100.0),
            learning_style: rules::learning_style_match(
                profile.learning_style,
                tribe.preferred_learning_style,
            )
            .clamp(0.0, 100.0),
            personality: rules::personality_match(profile, tribe).clamp(0.0, 100.0),
            engagement: rules::engagement_match(profile.commitment, tribe.activity_level)
                .clamp(0.0, 100.0),
        };

        let weights = self.weights;
        let combined = (scores.goal * weights.goal
            + scores.interest * weights.interest
            + scores.learning_style * weights.learning_style
            + scores.personality * weights.personality
            + scores.engagement * weights.engagement)
            .clamp(0.0, 100.0);

        let recommendation = if combined >= config::HIGHLY_RECOMMENDED_FLOOR {
            Recommendation::HighlyRecommended
        } else if combined >= config::RECOMMENDED_FLOOR {
            Recommendation::Recommended
        } else {
            Recommendation::Marginal
        };

        let reasons_to_join = reasons::reasons_to_join(tribe, &scores);
        let rounded = combined.round() as u8;

        MatchResult {
            tribe_id: tribe.id.clone(),
            tribe_name: tribe.name.clone(),
            match_score: rounded,
            match_percentage: format!("{rounded}%"),
            recommendation,
            breakdown: MatchBreakdown {
                goal_match: scores.goal.round() as u8,
                interest_match: scores.interest.round() as u8,
                learning_style_match: scores.learning_style.round() as u8,
                personality_match: scores.personality.round() as u8,
                engagement_match: scores.engagement.round() as u8,
            },
            reasons_to_join,
            combined,
        }
    }
}
