use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Life-goal categories used both to classify tribes and to weight quiz
/// answers. Ordered so it can key deterministic maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    Health,
    Fitness,
    Learning,
    Career,
    Mindfulness,
    Relationships,
    Financial,
    Creative,
    PersonalGrowth,
    Spirituality,
}

impl GoalTag {
    pub const ALL: [GoalTag; 10] = [
        GoalTag::Health,
        GoalTag::Fitness,
        GoalTag::Learning,
        GoalTag::Career,
        GoalTag::Mindfulness,
        GoalTag::Relationships,
        GoalTag::Financial,
        GoalTag::Creative,
        GoalTag::PersonalGrowth,
        GoalTag::Spirituality,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GoalTag::Health => "health",
            GoalTag::Fitness => "fitness",
            GoalTag::Learning => "learning",
            GoalTag::Career => "career",
            GoalTag::Mindfulness => "mindfulness",
            GoalTag::Relationships => "relationships",
            GoalTag::Financial => "financial",
            GoalTag::Creative => "creative",
            GoalTag::PersonalGrowth => "personal_growth",
            GoalTag::Spirituality => "spirituality",
        }
    }
}

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    Scale,
    Text,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single_choice",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::Scale => "scale",
            QuestionKind::Text => "text",
        }
    }
}

/// One selectable answer. `goal_weights` is sparse; goals without an entry
/// contribute zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    /// Raw answer score on a 0-10 scale.
    pub value: u8,
    #[serde(default)]
    pub goal_weights: BTreeMap<GoalTag, u8>,
}

impl QuizOption {
    /// Weight this option contributes toward `goal` (0 when unlisted).
    pub fn goal_weight(&self, goal: GoalTag) -> u8 {
        self.goal_weights.get(&goal).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub category: String,
    pub required: bool,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// Ordered questionnaire the engine scores against. Loaded once by the
/// caller and threaded into the engine functions; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCatalogue {
    pub version: u32,
    pub title: String,
    pub description: String,
    pub estimated_minutes: u8,
    pub questions: Vec<QuizQuestion>,
}

impl QuizCatalogue {
    pub fn question(&self, question_id: &str) -> Option<&QuizQuestion> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// First question tagged with `category`, in catalogue order.
    pub fn question_in_category(&self, category: &str) -> Option<&QuizQuestion> {
        self.questions
            .iter()
            .find(|question| question.category == category)
    }
}

/// Category tags the profile builder uses to locate its designated
/// questions inside a catalogue.
pub mod category {
    pub const PRIMARY_GOAL: &str = "primary_goal";
    pub const INTERESTS: &str = "interests";
    pub const COMMITMENT: &str = "commitment";
    pub const LEARNING_STYLE: &str = "learning_style";
    pub const COMMUNITY_STYLE: &str = "community_style";
    pub const PLANNING_STYLE: &str = "planning_style";
    pub const MOTIVATION: &str = "motivation";
    pub const RESILIENCE: &str = "resilience";
    pub const PERSONALITY: &str = "personality";
    pub const DETAIL_ORIENTATION: &str = "detail_orientation";
    pub const EXPERIENCE: &str = "experience";
    pub const GOAL_HISTORY: &str = "goal_history";
    pub const SUCCESS_METRICS: &str = "success_metrics";
    pub const LIFE_PHASE: &str = "life_phase";
    pub const CHALLENGE: &str = "challenge";
    pub const FEEDBACK_STYLE: &str = "feedback_style";
    pub const CORE_VALUES: &str = "core_values";
    pub const IDEAL_TRIBE: &str = "ideal_tribe";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_weight_defaults_to_zero_for_unlisted_goals() {
        let option = QuizOption {
            id: "opt".to_string(),
            text: "Option".to_string(),
            value: 8,
            goal_weights: BTreeMap::from([(GoalTag::Fitness, 9)]),
        };

        assert_eq!(option.goal_weight(GoalTag::Fitness), 9);
        assert_eq!(option.goal_weight(GoalTag::Spirituality), 0);
    }

    #[test]
    fn goal_tag_labels_round_trip_through_serde() {
        for goal in GoalTag::ALL {
            let encoded = serde_json::to_string(&goal).expect("goal serializes");
            assert_eq!(encoded, format!("\"{}\"", goal.label()));
        }
    }
}
