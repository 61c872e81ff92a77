//! The five compatibility sub-scores, each on a 0-100 scale.

use crate::matching::domain::{
    ActivityLevel, Commitment, ExperienceLevel, LearningStyle, TribeProfile, UserProfile,
};
use crate::matching::weights::GoalWeights;

/// Goal alignment. Base credit for primary (70) / secondary (40) / any other
/// goal (10), sharpened by accumulated answer weights and the user's
/// commitment level, capped at 100.
pub(crate) fn goal_match(
    profile: &UserProfile,
    tribe: &TribeProfile,
    answer_weights: Option<&GoalWeights>,
) -> f64 {
    let mut score = if profile.primary_goal == tribe.goal {
        70.0
    } else if profile.secondary_goals.contains(&tribe.goal) {
        40.0
    } else {
        10.0
    };

    if let Some(weights) = answer_weights {
        // A max per-goal weight of 10 contributes up to 20 extra points.
        score += weights.weight(tribe.goal) / 10.0 * 20.0;
    }

    score += match profile.commitment {
        Commitment::Obsessed => 15.0,
        Commitment::Serious => 10.0,
        Commitment::Moderate => 5.0,
        Commitment::Casual => 0.0,
    };

    score.min(100.0)
}

/// Interest overlap, measured against the user's list. Absence of data on
/// either side is neutral, never a penalty.
pub(crate) fn interest_match(user_interests: &[String], tribe_interests: &[String]) -> f64 {
    if user_interests.is_empty() || tribe_interests.is_empty() {
        return 50.0;
    }

    let tribe_lowered: Vec<String> = tribe_interests
        .iter()
        .map(|interest| interest.to_lowercase())
        .collect();
    let matches = user_interests
        .iter()
        .filter(|interest| tribe_lowered.contains(&interest.to_lowercase()))
        .count();

    if matches == user_interests.len() {
        return 100.0;
    }

    let overlap_pct = matches as f64 / user_interests.len() as f64 * 100.0;
    if overlap_pct >= 50.0 {
        // [50, 100) overlap maps onto [80, 100).
        80.0 + (overlap_pct - 50.0) * 0.4
    } else {
        // [0, 50) overlap maps onto [0, 40).
        overlap_pct * 0.8
    }
}

/// Learning-style compatibility. An unstated or mixed tribe style is
/// neutral-favorable; a mismatch still earns partial credit.
pub(crate) fn learning_style_match(user: LearningStyle, tribe: Option<LearningStyle>) -> f64 {
    let Some(tribe_style) = tribe else {
        return 70.0;
    };
    if tribe_style == LearningStyle::Mixed {
        return 70.0;
    }
    if tribe_style == user {
        return 100.0;
    }
    if compatible_styles(user).contains(&tribe_style) {
        80.0
    } else {
        60.0
    }
}

fn compatible_styles(style: LearningStyle) -> &'static [LearningStyle] {
    match style {
        LearningStyle::Visual => &[LearningStyle::Mixed],
        LearningStyle::Auditory => &[LearningStyle::Mixed],
        LearningStyle::Reading => &[LearningStyle::Visual, LearningStyle::Mixed],
        LearningStyle::Kinesthetic => &[LearningStyle::Mixed, LearningStyle::Auditory],
        LearningStyle::Mixed => &[
            LearningStyle::Visual,
            LearningStyle::Auditory,
            LearningStyle::Reading,
            LearningStyle::Kinesthetic,
        ],
    }
}

/// Personality fit from a neutral base of 50: social energy against the
/// tribe's activity level, planning style against its structure, and a
/// verified-tribe bonus for beginners.
pub(crate) fn personality_match(profile: &UserProfile, tribe: &TribeProfile) -> f64 {
    let mut score: f64 = 50.0;
    let traits = profile.personality;

    if traits.introvert < 3 {
        // Extrovert-leaning users thrive on activity.
        score += match tribe.activity_level {
            ActivityLevel::High => 20.0,
            ActivityLevel::Medium => 10.0,
            ActivityLevel::Low => 0.0,
        };
    } else if traits.introvert > 7 {
        if matches!(
            tribe.activity_level,
            ActivityLevel::Low | ActivityLevel::Medium
        ) {
            score += 20.0;
        }
    } else {
        // Ambiverts are comfortable at any activity level.
        score += 15.0;
    }

    if traits.planner > 6 {
        if tribe
            .rules
            .as_deref()
            .is_some_and(|rules| !rules.is_empty())
        {
            score += 10.0;
        }
    } else if traits.planner < 4 {
        // Spontaneous users are not penalized by structure.
        score += 10.0;
    }

    if profile.experience == ExperienceLevel::Beginner && tribe.is_verified {
        score += 15.0;
    }

    score.min(100.0)
}

/// Fixed commitment x activity-level table.
pub(crate) fn engagement_match(commitment: Commitment, activity: ActivityLevel) -> f64 {
    match (commitment, activity) {
        (Commitment::Casual, ActivityLevel::Low) => 90.0,
        (Commitment::Casual, ActivityLevel::Medium) => 60.0,
        (Commitment::Casual, ActivityLevel::High) => 30.0,
        (Commitment::Moderate, ActivityLevel::Low) => 60.0,
        (Commitment::Moderate, ActivityLevel::Medium) => 90.0,
        (Commitment::Moderate, ActivityLevel::High) => 60.0,
        (Commitment::Serious, ActivityLevel::Low) => 40.0,
        (Commitment::Serious, ActivityLevel::Medium) => 80.0,
        (Commitment::Serious, ActivityLevel::High) => 100.0,
        (Commitment::Obsessed, ActivityLevel::Low) => 20.0,
        (Commitment::Obsessed, ActivityLevel::Medium) => 70.0,
        (Commitment::Obsessed, ActivityLevel::High) => 100.0,
    }
}
