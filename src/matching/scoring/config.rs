use serde::{Deserialize, Serialize};

/// Relative weight of each sub-score in the combined compatibility score.
/// Components sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub goal: f64,
    pub interest: f64,
    pub learning_style: f64,
    pub personality: f64,
    pub engagement: f64,
}

/// Production weighting: goal alignment dominates, engagement is a nudge.
pub const STANDARD_WEIGHTS: MatchWeights = MatchWeights {
    goal: 0.40,
    interest: 0.25,
    learning_style: 0.15,
    personality: 0.15,
    engagement: 0.05,
};

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.goal + self.interest + self.learning_style + self.personality + self.engagement
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        STANDARD_WEIGHTS
    }
}

/// Combined-score floor for the `highly_recommended` tier.
pub(crate) const HIGHLY_RECOMMENDED_FLOOR: f64 = 75.0;
/// Combined-score floor for the `recommended` tier.
pub(crate) const RECOMMENDED_FLOOR: f64 = 60.0;
