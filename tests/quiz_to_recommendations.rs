//! End-to-end specifications for the quiz-to-recommendation flow.
//!
//! Scenarios drive the three public engine functions together over the
//! standard catalogue, the way the surrounding service would after a quiz
//! submission.

mod common {
    use tribe_match::matching::{ActivityLevel, TribeProfile};
    use tribe_match::quiz::{GoalTag, QuizAnswers};

    pub(super) fn fitness_answers() -> QuizAnswers {
        serde_json::from_str(
            r#"{
                "q1": "q1_fitness",
                "q2": ["q2_workout", "q2_nutrition", "q2_sleep"],
                "q3": "q3_serious",
                "q4": "q4_kinesthetic",
                "q5": "q5_accountability",
                "q6": "q6_planner",
                "q7": "q7_achievement",
                "q8": "q8_action",
                "q9": "q9_extrovert",
                "q10": "q10_balanced",
                "q11": "q11_beginner",
                "q12": "q12_growing",
                "q13": "q13_numbers",
                "q14": "q14_employed",
                "q15": "q15_support",
                "q16": "q16_light",
                "q17": "q17_excellence",
                "q18": ["q18_active", "q18_accountability"]
            }"#,
        )
        .expect("fixture answers parse")
    }

    pub(super) fn tribes() -> Vec<TribeProfile> {
        vec![
            TribeProfile {
                id: "tribe-iron".to_string(),
                name: "Iron Circle".to_string(),
                goal: GoalTag::Fitness,
                interests: vec!["fitness-training".to_string(), "nutrition".to_string()],
                activity_level: ActivityLevel::High,
                preferred_learning_style: None,
                rules: Some("Log workouts weekly".to_string()),
                is_verified: true,
                avg_engagement: 8.4,
                members_count: 412,
            },
            TribeProfile {
                id: "tribe-ledger".to_string(),
                name: "Ledger Club".to_string(),
                goal: GoalTag::Financial,
                interests: vec!["personal-finance".to_string()],
                activity_level: ActivityLevel::Low,
                preferred_learning_style: None,
                rules: None,
                is_verified: false,
                avg_engagement: 4.0,
                members_count: 58,
            },
            TribeProfile {
                id: "tribe-still".to_string(),
                name: "Still Waters".to_string(),
                goal: GoalTag::Mindfulness,
                interests: vec!["meditation".to_string(), "sleep-optimization".to_string()],
                activity_level: ActivityLevel::Medium,
                preferred_learning_style: None,
                rules: None,
                is_verified: false,
                avg_engagement: 6.1,
                members_count: 130,
            },
            TribeProfile {
                id: "tribe-atlas".to_string(),
                name: "Atlas Builders".to_string(),
                goal: GoalTag::Career,
                interests: vec!["entrepreneurship".to_string()],
                activity_level: ActivityLevel::Medium,
                preferred_learning_style: None,
                rules: None,
                is_verified: true,
                avg_engagement: 7.5,
                members_count: 203,
            },
        ]
    }
}

use tribe_match::matching::{
    build_profile, extract_goal_weights, rank_tribes, Commitment, ExperienceLevel, LearningStyle,
    Recommendation,
};
use tribe_match::quiz::{GoalTag, QuizCatalogue};

use common::{fitness_answers, tribes};

#[test]
fn quiz_submission_produces_a_fitness_profile() {
    let catalogue = QuizCatalogue::standard();
    let profile = build_profile(&fitness_answers(), &catalogue);

    assert_eq!(profile.primary_goal, GoalTag::Fitness);
    assert_eq!(profile.commitment, Commitment::Serious);
    assert_eq!(profile.learning_style, LearningStyle::Kinesthetic);
    assert_eq!(profile.experience, ExperienceLevel::Beginner);
    assert!(profile
        .interests
        .contains(&"fitness-training".to_string()));
}

#[test]
fn the_fitness_tribe_tops_the_ranking() {
    let catalogue = QuizCatalogue::standard();
    let answers = fitness_answers();
    let profile = build_profile(&answers, &catalogue);
    let weights = extract_goal_weights(&answers, &catalogue);

    let results = rank_tribes(&profile, &tribes(), Some(&weights), 5);

    assert_eq!(results[0].tribe_id, "tribe-iron");
    assert_eq!(
        results[0].recommendation,
        Recommendation::HighlyRecommended
    );
    assert!(results
        .windows(2)
        .all(|pair| pair[0].combined() >= pair[1].combined()));
}

#[test]
fn ranking_is_stable_across_repeated_runs() {
    let catalogue = QuizCatalogue::standard();
    let answers = fitness_answers();
    let profile = build_profile(&answers, &catalogue);
    let weights = extract_goal_weights(&answers, &catalogue);

    let first = rank_tribes(&profile, &tribes(), Some(&weights), 5);
    let second = rank_tribes(&profile, &tribes(), Some(&weights), 5);

    assert_eq!(first, second);
}

#[test]
fn every_result_respects_the_score_invariants() {
    let catalogue = QuizCatalogue::standard();
    let answers = fitness_answers();
    let profile = build_profile(&answers, &catalogue);
    let weights = extract_goal_weights(&answers, &catalogue);

    for result in rank_tribes(&profile, &tribes(), Some(&weights), 10) {
        assert!(result.match_score <= 100);
        assert!(result.reasons_to_join.len() <= 3);
        let expected_tier = if result.combined() >= 75.0 {
            Recommendation::HighlyRecommended
        } else if result.combined() >= 60.0 {
            Recommendation::Recommended
        } else {
            Recommendation::Marginal
        };
        assert_eq!(result.recommendation, expected_tier);
    }
}

#[test]
fn answer_weights_lift_goal_adjacent_tribes() {
    let catalogue = QuizCatalogue::standard();
    let answers = fitness_answers();
    let profile = build_profile(&answers, &catalogue);
    let weights = extract_goal_weights(&answers, &catalogue);

    let unweighted = rank_tribes(&profile, &tribes(), None, 5);
    let weighted = rank_tribes(&profile, &tribes(), Some(&weights), 5);

    let find = |results: &[tribe_match::matching::MatchResult], id: &str| {
        results
            .iter()
            .find(|result| result.tribe_id == id)
            .map(|result| result.breakdown.goal_match)
            .expect("tribe present")
    };

    assert!(find(&weighted, "tribe-iron") >= find(&unweighted, "tribe-iron"));
}

#[test]
fn skipping_the_quiz_still_ranks_with_defaults() {
    let catalogue = QuizCatalogue::standard();
    let answers = tribe_match::quiz::QuizAnswers::default();
    let profile = build_profile(&answers, &catalogue);
    let weights = extract_goal_weights(&answers, &catalogue);

    let results = rank_tribes(&profile, &tribes(), Some(&weights), 2);

    assert_eq!(results.len(), 2);
    assert_eq!(profile.primary_goal, GoalTag::PersonalGrowth);
}
