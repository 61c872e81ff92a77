use super::common::{catalogue, full_answers};
use crate::matching::domain::{Commitment, ExperienceLevel, LearningStyle, Motivation};
use crate::matching::profile::build_profile;
use crate::quiz::{GoalTag, QuizAnswers};

#[test]
fn builds_every_field_from_a_full_submission() {
    let profile = build_profile(&full_answers(), &catalogue());

    assert_eq!(profile.primary_goal, GoalTag::Fitness);
    assert_eq!(
        profile.interests,
        vec!["fitness-training".to_string(), "nutrition".to_string()]
    );
    assert_eq!(profile.commitment, Commitment::Serious);
    assert_eq!(profile.learning_style, LearningStyle::Kinesthetic);
    assert_eq!(profile.motivation, Motivation::Achievement);
    assert_eq!(profile.experience, ExperienceLevel::Intermediate);
    assert_eq!(profile.personality.introvert, 2);
    assert_eq!(profile.personality.detail_oriented, 5);
    assert_eq!(profile.personality.planner, 8);
    assert_eq!(profile.challenge_area, "q15_support");
    assert_eq!(profile.preferred_community_style, "q5_accountability");
    assert!(profile.secondary_goals.is_empty());
}

#[test]
fn empty_submission_yields_the_documented_defaults() {
    let profile = build_profile(&QuizAnswers::default(), &catalogue());

    assert_eq!(profile.primary_goal, GoalTag::PersonalGrowth);
    assert!(profile.interests.is_empty());
    assert_eq!(profile.commitment, Commitment::Moderate);
    assert_eq!(profile.learning_style, LearningStyle::Mixed);
    assert_eq!(profile.motivation, Motivation::Growth);
    assert_eq!(profile.experience, ExperienceLevel::Beginner);
    assert_eq!(profile.personality.introvert, 5);
    assert_eq!(profile.personality.detail_oriented, 5);
    assert_eq!(profile.personality.planner, 5);
    assert_eq!(profile.challenge_area, "");
    assert_eq!(profile.preferred_community_style, "");
}

#[test]
fn unrecognized_option_ids_fall_back_to_defaults() {
    let mut answers = full_answers();
    answers.insert_single("q1", "q1_time_travel");
    answers.insert_single("q3", "q3_unknown");
    answers.insert_single("q9", "q9_mystery");

    let profile = build_profile(&answers, &catalogue());

    assert_eq!(profile.primary_goal, GoalTag::PersonalGrowth);
    assert_eq!(profile.commitment, Commitment::Moderate);
    assert_eq!(profile.personality.introvert, 5);
}

#[test]
fn unknown_question_ids_are_ignored() {
    let mut answers = full_answers();
    answers.insert_single("q99", "q99_whatever");
    let baseline = build_profile(&full_answers(), &catalogue());

    let profile = build_profile(&answers, &catalogue());

    assert_eq!(profile, baseline);
}

#[test]
fn unmapped_interest_selections_are_dropped() {
    let mut answers = full_answers();
    answers.insert_multiple("q2", ["q2_workout", "q2_basket_weaving"]);

    let profile = build_profile(&answers, &catalogue());

    assert_eq!(profile.interests, vec!["fitness-training".to_string()]);
}

#[test]
fn introversion_scale_follows_the_answer() {
    let mut answers = full_answers();
    answers.insert_single("q9", "q9_introvert");

    let profile = build_profile(&answers, &catalogue());

    // High end of the introversion trait, so the scorer's introvert-leaning
    // branch sees self-identified introverts.
    assert_eq!(profile.personality.introvert, 8);
}

#[test]
fn multi_select_answer_on_a_single_choice_question_falls_back() {
    let mut answers = full_answers();
    answers.insert_multiple("q1", ["q1_fitness", "q1_career"]);

    let profile = build_profile(&answers, &catalogue());

    assert_eq!(profile.primary_goal, GoalTag::PersonalGrowth);
}
