use super::domain::{TribeProfile, UserProfile};
use super::scoring::{MatchResult, MatchScorer};
use super::weights::GoalWeights;

/// Recommendations returned when the caller does not ask for more.
pub const DEFAULT_LIMIT: usize = 5;

/// Score every candidate with the standard weights and return the top
/// `limit`, highest combined score first. Callers must exclude tribes the
/// user already belongs to before ranking.
pub fn rank_tribes(
    profile: &UserProfile,
    tribes: &[TribeProfile],
    answer_weights: Option<&GoalWeights>,
    limit: usize,
) -> Vec<MatchResult> {
    rank_with_scorer(&MatchScorer::default(), profile, tribes, answer_weights, limit)
}

/// As [`rank_tribes`], with a caller-supplied scorer.
pub fn rank_with_scorer(
    scorer: &MatchScorer,
    profile: &UserProfile,
    tribes: &[TribeProfile],
    answer_weights: Option<&GoalWeights>,
    limit: usize,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = tribes
        .iter()
        .map(|tribe| scorer.score(profile, tribe, answer_weights))
        .collect();

    // Sort on the pre-rounding score; exact ties fall back to tribe id so
    // the ordering is reproducible regardless of input order.
    results.sort_by(|a, b| {
        b.combined
            .total_cmp(&a.combined)
            .then_with(|| a.tribe_id.cmp(&b.tribe_id))
    });
    results.truncate(limit);
    results
}
