use super::common::{catalogue, full_answers};
use crate::matching::weights::{extract_goal_weights, GoalWeights};
use crate::quiz::{GoalTag, QuizAnswers};

#[test]
fn sums_weights_across_all_answered_questions() {
    let mut answers = QuizAnswers::default();
    answers.insert_single("q1", "q1_fitness");
    answers.insert_single("q3", "q3_casual");

    let weights = extract_goal_weights(&answers, &catalogue());

    // q1_fitness carries fitness 10 / health 7 / personal_growth 5;
    // q3_casual adds fitness 3 / health 3 / personal_growth 3.
    assert_eq!(weights.weight(GoalTag::Fitness), 13.0);
    assert_eq!(weights.weight(GoalTag::Health), 10.0);
    assert_eq!(weights.weight(GoalTag::PersonalGrowth), 8.0);
}

#[test]
fn multi_select_answers_accumulate_per_option() {
    let mut answers = QuizAnswers::default();
    answers.insert_multiple("q2", ["q2_nutrition", "q2_workout"]);

    let weights = extract_goal_weights(&answers, &catalogue());

    assert_eq!(weights.weight(GoalTag::Health), 13.0);
    assert_eq!(weights.weight(GoalTag::Fitness), 15.0);
    assert_eq!(weights.weight(GoalTag::Spirituality), 0.0);
}

#[test]
fn unknown_questions_and_options_contribute_nothing() {
    let mut answers = QuizAnswers::default();
    answers.insert_single("q99", "q99_whatever");
    answers.insert_single("q1", "q1_not_an_option");

    let weights = extract_goal_weights(&answers, &catalogue());

    assert!(weights.is_empty());
}

#[test]
fn empty_submission_yields_an_empty_map() {
    let weights = extract_goal_weights(&QuizAnswers::default(), &catalogue());
    assert!(weights.is_empty());
    assert_eq!(weights.weight(GoalTag::Career), 0.0);
}

#[test]
fn full_submission_touches_the_dominant_goal_hardest() {
    let weights = extract_goal_weights(&full_answers(), &catalogue());

    let fitness = weights.weight(GoalTag::Fitness);
    assert!(fitness > weights.weight(GoalTag::Spirituality));
    assert!(fitness > weights.weight(GoalTag::Financial));
}

#[test]
fn goal_weights_lookup_is_total_with_zero_default() {
    let weights: GoalWeights = [(GoalTag::Creative, 7.5)].into_iter().collect();

    assert_eq!(weights.weight(GoalTag::Creative), 7.5);
    assert_eq!(weights.weight(GoalTag::Mindfulness), 0.0);
}
