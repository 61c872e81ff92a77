use crate::matching::domain::{ActivityLevel, TribeProfile};

use super::SubScores;

const MAX_REASONS: usize = 3;

/// Human-readable reasons to join, collected in fixed priority order (goal,
/// interests, activity, verification, engagement) and truncated to the first
/// three that apply. Thresholds read the unrounded sub-scores.
pub(crate) fn reasons_to_join(tribe: &TribeProfile, scores: &SubScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.goal > 80.0 {
        reasons.push(format!(
            "Perfectly aligned with your {} goals",
            tribe.goal.label()
        ));
    } else if scores.goal > 60.0 {
        reasons.push(format!("Supports your {} journey", tribe.goal.label()));
    }

    if scores.interest > 80.0 {
        reasons.push("Shares your core interests and passions".to_string());
    }

    match tribe.activity_level {
        ActivityLevel::High => {
            reasons.push("Very active community for daily engagement".to_string());
        }
        ActivityLevel::Medium => {
            reasons.push("Balanced activity level with consistent support".to_string());
        }
        ActivityLevel::Low => {}
    }

    if tribe.is_verified {
        reasons.push("Verified and high-quality community with trusted content".to_string());
    }

    if tribe.avg_engagement > 7.0 {
        reasons.push("High member engagement and supportive atmosphere".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
