//! Builds a [`UserProfile`] from raw quiz answers.
//!
//! Every attribute resolves through a fixed option-id table with a stated
//! default, so the builder is total: missing answers, unknown question ids,
//! and unrecognized option ids all fall back instead of failing. Designated
//! questions are located by their catalogue category tag.

use crate::quiz::{category, GoalTag, QuizAnswers, QuizCatalogue};

use super::domain::{
    Commitment, ExperienceLevel, LearningStyle, Motivation, PersonalityTraits, UserProfile,
};

const NEUTRAL_TRAIT: u8 = 5;

/// Derive the structured profile for one answer set.
pub fn build_profile(answers: &QuizAnswers, catalogue: &QuizCatalogue) -> UserProfile {
    let primary_goal = single_answer(answers, catalogue, category::PRIMARY_GOAL)
        .and_then(goal_for_option)
        .unwrap_or(GoalTag::PersonalGrowth);

    let interests = catalogue
        .question_in_category(category::INTERESTS)
        .and_then(|question| answers.get(&question.id))
        .map(|answer| {
            answer
                .selections()
                .iter()
                .filter_map(|option_id| interest_for_option(option_id))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let commitment = single_answer(answers, catalogue, category::COMMITMENT)
        .and_then(commitment_for_option)
        .unwrap_or(Commitment::Moderate);

    let learning_style = single_answer(answers, catalogue, category::LEARNING_STYLE)
        .and_then(learning_style_for_option)
        .unwrap_or(LearningStyle::Mixed);

    let motivation = single_answer(answers, catalogue, category::MOTIVATION)
        .and_then(motivation_for_option)
        .unwrap_or(Motivation::Growth);

    let experience = single_answer(answers, catalogue, category::EXPERIENCE)
        .and_then(experience_for_option)
        .unwrap_or(ExperienceLevel::Beginner);

    let personality = PersonalityTraits {
        introvert: single_answer(answers, catalogue, category::PERSONALITY)
            .and_then(introversion_for_option)
            .unwrap_or(NEUTRAL_TRAIT),
        detail_oriented: single_answer(answers, catalogue, category::DETAIL_ORIENTATION)
            .and_then(detail_orientation_for_option)
            .unwrap_or(NEUTRAL_TRAIT),
        planner: single_answer(answers, catalogue, category::PLANNING_STYLE)
            .and_then(planning_for_option)
            .unwrap_or(NEUTRAL_TRAIT),
    };

    let challenge_area = single_answer(answers, catalogue, category::CHALLENGE)
        .unwrap_or_default()
        .to_string();
    let preferred_community_style = single_answer(answers, catalogue, category::COMMUNITY_STYLE)
        .unwrap_or_default()
        .to_string();

    UserProfile {
        primary_goal,
        // Never inferred here; callers may populate from stored preferences.
        secondary_goals: Vec::new(),
        interests,
        learning_style,
        motivation,
        commitment,
        personality,
        experience,
        challenge_area,
        preferred_community_style,
    }
}

fn single_answer<'a>(
    answers: &'a QuizAnswers,
    catalogue: &QuizCatalogue,
    category: &str,
) -> Option<&'a str> {
    let question = catalogue.question_in_category(category)?;
    answers.single(&question.id)
}

fn goal_for_option(option_id: &str) -> Option<GoalTag> {
    match option_id {
        "q1_health" => Some(GoalTag::Health),
        "q1_fitness" => Some(GoalTag::Fitness),
        "q1_learning" => Some(GoalTag::Learning),
        "q1_career" => Some(GoalTag::Career),
        "q1_mindfulness" => Some(GoalTag::Mindfulness),
        "q1_relationships" => Some(GoalTag::Relationships),
        "q1_financial" => Some(GoalTag::Financial),
        "q1_creative" => Some(GoalTag::Creative),
        "q1_purpose" => Some(GoalTag::PersonalGrowth),
        _ => None,
    }
}

fn interest_for_option(option_id: &str) -> Option<&'static str> {
    match option_id {
        "q2_nutrition" => Some("nutrition"),
        "q2_workout" => Some("fitness-training"),
        "q2_sleep" => Some("sleep-optimization"),
        "q2_stress" => Some("stress-management"),
        "q2_meditation" => Some("meditation"),
        "q2_programming" => Some("programming"),
        "q2_language" => Some("language-learning"),
        "q2_business" => Some("entrepreneurship"),
        "q2_finance" => Some("personal-finance"),
        "q2_relationships" => Some("relationships"),
        "q2_creative" => Some("creative-arts"),
        "q2_spirituality" => Some("spirituality"),
        _ => None,
    }
}

fn commitment_for_option(option_id: &str) -> Option<Commitment> {
    match option_id {
        "q3_casual" => Some(Commitment::Casual),
        "q3_moderate" => Some(Commitment::Moderate),
        "q3_serious" => Some(Commitment::Serious),
        "q3_obsessed" => Some(Commitment::Obsessed),
        _ => None,
    }
}

fn learning_style_for_option(option_id: &str) -> Option<LearningStyle> {
    match option_id {
        "q4_visual" => Some(LearningStyle::Visual),
        "q4_auditory" => Some(LearningStyle::Auditory),
        "q4_reading" => Some(LearningStyle::Reading),
        "q4_kinesthetic" => Some(LearningStyle::Kinesthetic),
        "q4_mixed" => Some(LearningStyle::Mixed),
        _ => None,
    }
}

fn motivation_for_option(option_id: &str) -> Option<Motivation> {
    match option_id {
        "q7_achievement" => Some(Motivation::Achievement),
        "q7_community" => Some(Motivation::Community),
        "q7_growth" => Some(Motivation::Growth),
        "q7_purpose" => Some(Motivation::Purpose),
        "q7_autonomy" => Some(Motivation::Autonomy),
        _ => None,
    }
}

fn experience_for_option(option_id: &str) -> Option<ExperienceLevel> {
    match option_id {
        "q11_beginner" => Some(ExperienceLevel::Beginner),
        "q11_intermediate" => Some(ExperienceLevel::Intermediate),
        "q11_advanced" => Some(ExperienceLevel::Advanced),
        _ => None,
    }
}

// Trait tables map to the introversion/detail/planning scales where 0 is the
// low end of the trait and 10 the high end.

fn introversion_for_option(option_id: &str) -> Option<u8> {
    match option_id {
        "q9_introvert" => Some(8),
        "q9_ambivert" => Some(5),
        "q9_extrovert" => Some(2),
        _ => None,
    }
}

fn detail_orientation_for_option(option_id: &str) -> Option<u8> {
    match option_id {
        "q10_details" => Some(8),
        "q10_balanced" => Some(5),
        "q10_big_picture" => Some(2),
        _ => None,
    }
}

fn planning_for_option(option_id: &str) -> Option<u8> {
    match option_id {
        "q6_planner" => Some(8),
        "q6_hybrid" => Some(5),
        "q6_spontaneous" => Some(2),
        _ => None,
    }
}
