use crate::matching::domain::{
    ActivityLevel, Commitment, ExperienceLevel, LearningStyle, Motivation, PersonalityTraits,
    TribeProfile, UserProfile,
};
use crate::quiz::{GoalTag, QuizAnswers, QuizCatalogue};

/// Fitness-focused baseline profile; tests tweak fields as needed.
pub(super) fn profile() -> UserProfile {
    UserProfile {
        primary_goal: GoalTag::Fitness,
        secondary_goals: Vec::new(),
        interests: vec!["fitness-training".to_string(), "nutrition".to_string()],
        learning_style: LearningStyle::Visual,
        motivation: Motivation::Achievement,
        commitment: Commitment::Moderate,
        personality: PersonalityTraits::default(),
        experience: ExperienceLevel::Intermediate,
        challenge_area: "q15_motivation".to_string(),
        preferred_community_style: "q5_accountability".to_string(),
    }
}

/// Medium-activity, unverified tribe with one overlapping interest.
pub(super) fn tribe(id: &str, goal: GoalTag) -> TribeProfile {
    TribeProfile {
        id: id.to_string(),
        name: format!("Tribe {id}"),
        goal,
        interests: vec!["fitness-training".to_string()],
        activity_level: ActivityLevel::Medium,
        preferred_learning_style: None,
        rules: None,
        is_verified: false,
        avg_engagement: 5.0,
        members_count: 40,
    }
}

pub(super) fn catalogue() -> QuizCatalogue {
    QuizCatalogue::standard()
}

/// A complete submission touching every question of the standard quiz.
pub(super) fn full_answers() -> QuizAnswers {
    let mut answers = QuizAnswers::default();
    answers.insert_single("q1", "q1_fitness");
    answers.insert_multiple("q2", ["q2_workout", "q2_nutrition"]);
    answers.insert_single("q3", "q3_serious");
    answers.insert_single("q4", "q4_kinesthetic");
    answers.insert_single("q5", "q5_accountability");
    answers.insert_single("q6", "q6_planner");
    answers.insert_single("q7", "q7_achievement");
    answers.insert_single("q8", "q8_action");
    answers.insert_single("q9", "q9_extrovert");
    answers.insert_single("q10", "q10_balanced");
    answers.insert_single("q11", "q11_intermediate");
    answers.insert_single("q12", "q12_growing");
    answers.insert_single("q13", "q13_numbers");
    answers.insert_single("q14", "q14_employed");
    answers.insert_single("q15", "q15_support");
    answers.insert_single("q16", "q16_light");
    answers.insert_single("q17", "q17_excellence");
    answers.insert_multiple("q18", ["q18_active", "q18_accountability"]);
    answers
}
