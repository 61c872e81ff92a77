use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quiz::{GoalTag, QuizAnswers, QuizCatalogue};

/// Accumulated per-goal answer weight. Backed by a sparse map; goals without
/// an entry weigh 0.0, so lookups never need a null check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalWeights(BTreeMap<GoalTag, f64>);

impl GoalWeights {
    pub fn weight(&self, goal: GoalTag) -> f64 {
        self.0.get(&goal).copied().unwrap_or(0.0)
    }

    pub fn add(&mut self, goal: GoalTag, amount: f64) {
        *self.0.entry(goal).or_insert(0.0) += amount;
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GoalTag, f64)> + '_ {
        self.0.iter().map(|(goal, weight)| (*goal, *weight))
    }
}

impl FromIterator<(GoalTag, f64)> for GoalWeights {
    fn from_iter<I: IntoIterator<Item = (GoalTag, f64)>>(iter: I) -> Self {
        GoalWeights(iter.into_iter().collect())
    }
}

/// Sums every selected option's goal-weight entries into one map. Breadth of
/// goal-aligned answers sharpens goal scoring beyond the single primary-goal
/// check; multi-select questions contribute once per selected option.
/// Unknown question or option ids contribute nothing.
pub fn extract_goal_weights(answers: &QuizAnswers, catalogue: &QuizCatalogue) -> GoalWeights {
    let mut weights = GoalWeights::default();

    for question in &catalogue.questions {
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };
        for option_id in answer.selections() {
            let Some(option) = question.option(option_id) else {
                continue;
            };
            for (goal, weight) in &option.goal_weights {
                weights.add(*goal, f64::from(*weight));
            }
        }
    }

    weights
}
