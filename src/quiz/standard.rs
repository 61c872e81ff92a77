//! The production tribe-matching questionnaire.

use std::collections::BTreeMap;

use super::catalogue::{category, GoalTag, QuestionKind, QuizCatalogue, QuizOption, QuizQuestion};

use GoalTag::{
    Career, Creative, Financial, Fitness, Health, Learning, Mindfulness, PersonalGrowth,
    Relationships, Spirituality,
};

fn option(id: &str, text: &str, value: u8, weights: &[(GoalTag, u8)]) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: text.to_string(),
        value,
        goal_weights: weights.iter().copied().collect::<BTreeMap<_, _>>(),
    }
}

fn single(id: &str, prompt: &str, category: &str, options: Vec<QuizOption>) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        kind: QuestionKind::SingleChoice,
        category: category.to_string(),
        required: true,
        options,
    }
}

fn multiple(id: &str, prompt: &str, category: &str, options: Vec<QuizOption>) -> QuizQuestion {
    QuizQuestion {
        kind: QuestionKind::MultipleChoice,
        ..single(id, prompt, category, options)
    }
}

impl QuizCatalogue {
    /// The 18-question personality quiz used in production. Covers primary
    /// goals, interests, commitment, learning style, personality traits,
    /// experience, and lifestyle, with per-option goal weights feeding the
    /// answer-weight extractor.
    pub fn standard() -> Self {
        QuizCatalogue {
            version: 1,
            title: "Find Your Perfect Tribe".to_string(),
            description: "Answer 18 quick questions to discover tribes that align with your \
                          goals, interests, and learning style."
                .to_string(),
            estimated_minutes: 5,
            questions: vec![
                single(
                    "q1",
                    "What's your primary reason for joining the community?",
                    category::PRIMARY_GOAL,
                    vec![
                        option(
                            "q1_health",
                            "Improve my physical and mental health",
                            10,
                            &[
                                (Health, 10),
                                (Fitness, 8),
                                (Mindfulness, 7),
                                (PersonalGrowth, 5),
                            ],
                        ),
                        option(
                            "q1_fitness",
                            "Get fit and build muscle/lose weight",
                            10,
                            &[(Fitness, 10), (Health, 7), (PersonalGrowth, 5)],
                        ),
                        option(
                            "q1_learning",
                            "Learn new skills and expand knowledge",
                            10,
                            &[
                                (Learning, 10),
                                (Career, 6),
                                (Creative, 5),
                                (PersonalGrowth, 7),
                            ],
                        ),
                        option(
                            "q1_career",
                            "Advance my career and professional goals",
                            10,
                            &[
                                (Career, 10),
                                (Learning, 7),
                                (PersonalGrowth, 6),
                                (Financial, 6),
                            ],
                        ),
                        option(
                            "q1_mindfulness",
                            "Find peace, practice mindfulness, and reduce stress",
                            10,
                            &[
                                (Mindfulness, 10),
                                (Health, 8),
                                (Spirituality, 7),
                                (PersonalGrowth, 6),
                            ],
                        ),
                        option(
                            "q1_relationships",
                            "Improve relationships and social connections",
                            10,
                            &[(Relationships, 10), (PersonalGrowth, 7), (Mindfulness, 4)],
                        ),
                        option(
                            "q1_financial",
                            "Achieve financial stability and growth",
                            10,
                            &[(Financial, 10), (Career, 7), (PersonalGrowth, 6)],
                        ),
                        option(
                            "q1_creative",
                            "Express creativity and pursue artistic goals",
                            10,
                            &[(Creative, 10), (PersonalGrowth, 8), (Learning, 6)],
                        ),
                        option(
                            "q1_purpose",
                            "Find purpose and spiritual growth",
                            10,
                            &[
                                (Spirituality, 10),
                                (Mindfulness, 8),
                                (PersonalGrowth, 9),
                                (Relationships, 5),
                            ],
                        ),
                    ],
                ),
                multiple(
                    "q2",
                    "Which areas are you interested in improving? (Select all that apply)",
                    category::INTERESTS,
                    vec![
                        option(
                            "q2_nutrition",
                            "Nutrition and diet",
                            8,
                            &[(Health, 8), (Fitness, 6)],
                        ),
                        option(
                            "q2_workout",
                            "Exercise and workouts",
                            8,
                            &[(Fitness, 9), (Health, 5)],
                        ),
                        option(
                            "q2_sleep",
                            "Sleep quality and recovery",
                            7,
                            &[(Health, 8), (Mindfulness, 6)],
                        ),
                        option(
                            "q2_stress",
                            "Stress management and anxiety",
                            8,
                            &[(Mindfulness, 9), (Health, 7)],
                        ),
                        option(
                            "q2_meditation",
                            "Meditation and mindfulness practices",
                            8,
                            &[(Mindfulness, 10), (Spirituality, 8)],
                        ),
                        option(
                            "q2_programming",
                            "Programming and tech skills",
                            8,
                            &[(Learning, 9), (Career, 8)],
                        ),
                        option(
                            "q2_language",
                            "Language learning",
                            7,
                            &[(Learning, 9), (Career, 5)],
                        ),
                        option(
                            "q2_business",
                            "Business and entrepreneurship",
                            8,
                            &[(Career, 9), (Financial, 8), (Learning, 6)],
                        ),
                        option(
                            "q2_finance",
                            "Personal finance and investing",
                            8,
                            &[(Financial, 10), (Career, 5)],
                        ),
                        option(
                            "q2_relationships",
                            "Relationships and communication",
                            8,
                            &[(Relationships, 10), (PersonalGrowth, 7)],
                        ),
                        option(
                            "q2_creative",
                            "Creative pursuits (art, music, writing)",
                            8,
                            &[(Creative, 10), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q2_spirituality",
                            "Spirituality and philosophy",
                            8,
                            &[(Spirituality, 10), (Mindfulness, 7)],
                        ),
                    ],
                ),
                single(
                    "q3",
                    "How committed are you to your goals?",
                    category::COMMITMENT,
                    vec![
                        option(
                            "q3_casual",
                            "Just exploring, no major commitment yet",
                            5,
                            &[
                                (Health, 3),
                                (Fitness, 3),
                                (Learning, 4),
                                (Career, 2),
                                (Mindfulness, 4),
                                (Relationships, 4),
                                (Financial, 2),
                                (Creative, 4),
                                (PersonalGrowth, 3),
                                (Spirituality, 4),
                            ],
                        ),
                        option(
                            "q3_moderate",
                            "2-3 hours per week for my goals",
                            7,
                            &[
                                (Health, 6),
                                (Fitness, 7),
                                (Learning, 7),
                                (Career, 5),
                                (Mindfulness, 7),
                                (Relationships, 6),
                                (Financial, 5),
                                (Creative, 7),
                                (PersonalGrowth, 6),
                                (Spirituality, 7),
                            ],
                        ),
                        option(
                            "q3_serious",
                            "5+ hours per week, I'm serious about this",
                            9,
                            &[
                                (Health, 9),
                                (Fitness, 9),
                                (Learning, 9),
                                (Career, 9),
                                (Mindfulness, 8),
                                (Relationships, 7),
                                (Financial, 8),
                                (Creative, 9),
                                (PersonalGrowth, 9),
                                (Spirituality, 8),
                            ],
                        ),
                        option(
                            "q3_obsessed",
                            "This is my top priority, 10+ hours weekly",
                            10,
                            &[
                                (Health, 10),
                                (Fitness, 10),
                                (Learning, 10),
                                (Career, 10),
                                (Mindfulness, 9),
                                (Relationships, 8),
                                (Financial, 9),
                                (Creative, 10),
                                (PersonalGrowth, 10),
                                (Spirituality, 9),
                            ],
                        ),
                    ],
                ),
                single(
                    "q4",
                    "How do you learn best?",
                    category::LEARNING_STYLE,
                    vec![
                        option(
                            "q4_visual",
                            "Visual (charts, diagrams, videos, infographics)",
                            8,
                            &[(Learning, 8), (Creative, 7)],
                        ),
                        option(
                            "q4_auditory",
                            "Auditory (podcasts, discussions, lectures)",
                            8,
                            &[(Learning, 8), (Relationships, 6)],
                        ),
                        option(
                            "q4_reading",
                            "Reading & writing (books, articles, notes)",
                            8,
                            &[(Learning, 9), (Creative, 6)],
                        ),
                        option(
                            "q4_kinesthetic",
                            "Kinesthetic (hands-on, practice, doing)",
                            8,
                            &[(Fitness, 8), (Learning, 8), (Creative, 7)],
                        ),
                        option(
                            "q4_mixed",
                            "Mixed (combination of all styles)",
                            7,
                            &[(Learning, 7), (PersonalGrowth, 7)],
                        ),
                    ],
                ),
                single(
                    "q5",
                    "What's your preferred way to engage with a community?",
                    category::COMMUNITY_STYLE,
                    vec![
                        option(
                            "q5_observe",
                            "I like to observe and learn from others",
                            6,
                            &[(Learning, 8), (Mindfulness, 6)],
                        ),
                        option(
                            "q5_share",
                            "I prefer sharing my knowledge and helping others",
                            8,
                            &[(Relationships, 8), (Career, 6), (PersonalGrowth, 7)],
                        ),
                        option(
                            "q5_discuss",
                            "I enjoy in-depth discussions and debates",
                            8,
                            &[(Learning, 8), (Relationships, 7)],
                        ),
                        option(
                            "q5_accountability",
                            "I need accountability and regular check-ins",
                            8,
                            &[(Fitness, 7), (Relationships, 8), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q5_solo",
                            "I'm more of a solo learner but like periodic tips",
                            5,
                            &[(Learning, 6), (Mindfulness, 7)],
                        ),
                    ],
                ),
                single(
                    "q6",
                    "How do you approach goals?",
                    category::PLANNING_STYLE,
                    vec![
                        option(
                            "q6_planner",
                            "I'm a planner - detailed roadmap, milestones, tracking",
                            8,
                            &[(Career, 8), (Learning, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q6_hybrid",
                            "Hybrid - some planning, but flexible and adaptable",
                            7,
                            &[(Learning, 7), (PersonalGrowth, 7), (Mindfulness, 6)],
                        ),
                        option(
                            "q6_spontaneous",
                            "Spontaneous - I adapt as I go, no rigid plans",
                            6,
                            &[(Creative, 8), (PersonalGrowth, 6)],
                        ),
                    ],
                ),
                single(
                    "q7",
                    "What motivates you most?",
                    category::MOTIVATION,
                    vec![
                        option(
                            "q7_achievement",
                            "Achieving goals and seeing measurable progress",
                            9,
                            &[
                                (Career, 8),
                                (Fitness, 8),
                                (Learning, 8),
                                (PersonalGrowth, 8),
                            ],
                        ),
                        option(
                            "q7_community",
                            "Community support and accountability",
                            8,
                            &[
                                (Relationships, 9),
                                (Fitness, 7),
                                (Health, 7),
                                (PersonalGrowth, 7),
                            ],
                        ),
                        option(
                            "q7_growth",
                            "Personal growth and self-improvement",
                            8,
                            &[(PersonalGrowth, 10), (Learning, 8), (Mindfulness, 7)],
                        ),
                        option(
                            "q7_purpose",
                            "Finding purpose and deeper meaning",
                            8,
                            &[(Spirituality, 10), (Mindfulness, 8), (PersonalGrowth, 9)],
                        ),
                        option(
                            "q7_autonomy",
                            "Independence and doing things my way",
                            7,
                            &[(Creative, 8), (Learning, 7), (Career, 7)],
                        ),
                    ],
                ),
                single(
                    "q8",
                    "How do you typically handle challenges?",
                    category::RESILIENCE,
                    vec![
                        option(
                            "q8_analytical",
                            "Analyze, problem-solve, find logical solutions",
                            8,
                            &[(Learning, 8), (Career, 8)],
                        ),
                        option(
                            "q8_supportive",
                            "Seek advice from mentors or community",
                            8,
                            &[(Relationships, 9), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q8_mindful",
                            "Take a step back, meditate, find perspective",
                            8,
                            &[(Mindfulness, 9), (Spirituality, 8)],
                        ),
                        option(
                            "q8_action",
                            "Push through with determination and action",
                            8,
                            &[(Fitness, 8), (Career, 8), (PersonalGrowth, 8)],
                        ),
                    ],
                ),
                single(
                    "q9",
                    "Are you more introverted or extroverted?",
                    category::PERSONALITY,
                    vec![
                        option(
                            "q9_introvert",
                            "Introvert - I recharge alone, one-on-one conversations",
                            6,
                            &[(Learning, 7), (Mindfulness, 7), (Creative, 7)],
                        ),
                        option(
                            "q9_ambivert",
                            "Ambivert - I enjoy both social and alone time equally",
                            7,
                            &[(PersonalGrowth, 8), (Learning, 7), (Relationships, 7)],
                        ),
                        option(
                            "q9_extrovert",
                            "Extrovert - I thrive in group settings and discussions",
                            8,
                            &[
                                (Relationships, 9),
                                (Fitness, 7),
                                (Learning, 7),
                                (Career, 7),
                            ],
                        ),
                    ],
                ),
                single(
                    "q10",
                    "What's your attention to detail level?",
                    category::DETAIL_ORIENTATION,
                    vec![
                        option(
                            "q10_details",
                            "Detail-oriented - precision and accuracy matter",
                            7,
                            &[(Learning, 8), (Career, 8), (Financial, 8)],
                        ),
                        option(
                            "q10_balanced",
                            "Balanced - I focus on important details, not everything",
                            7,
                            &[(PersonalGrowth, 8), (Learning, 7), (Career, 7)],
                        ),
                        option(
                            "q10_big_picture",
                            "Big picture - I focus on overall vision and strategy",
                            7,
                            &[(Creative, 8), (Spirituality, 7), (PersonalGrowth, 8)],
                        ),
                    ],
                ),
                single(
                    "q11",
                    "What's your experience level in your primary interest?",
                    category::EXPERIENCE,
                    vec![
                        option(
                            "q11_beginner",
                            "Complete beginner - just starting out",
                            8,
                            &[
                                (Learning, 9),
                                (Health, 8),
                                (Fitness, 8),
                                (Mindfulness, 8),
                                (Creative, 8),
                                (PersonalGrowth, 9),
                            ],
                        ),
                        option(
                            "q11_intermediate",
                            "Some experience - I've made progress",
                            8,
                            &[
                                (Learning, 8),
                                (Fitness, 8),
                                (Career, 7),
                                (PersonalGrowth, 8),
                            ],
                        ),
                        option(
                            "q11_advanced",
                            "Advanced - I'm quite experienced",
                            7,
                            &[(Career, 9), (Learning, 7), (Creative, 8)],
                        ),
                    ],
                ),
                single(
                    "q12",
                    "How long have you been working on your primary goal?",
                    category::GOAL_HISTORY,
                    vec![
                        option(
                            "q12_new",
                            "This is new for me (less than 1 month)",
                            8,
                            &[(Learning, 8), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q12_growing",
                            "I've been at it for 1-6 months",
                            8,
                            &[(Fitness, 8), (Learning, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q12_established",
                            "I've been consistent for 6+ months",
                            8,
                            &[(Career, 8), (Fitness, 8), (Health, 8)],
                        ),
                    ],
                ),
                single(
                    "q13",
                    "How do you measure success?",
                    category::SUCCESS_METRICS,
                    vec![
                        option(
                            "q13_numbers",
                            "Quantifiable metrics (pounds lost, hours logged, money earned)",
                            8,
                            &[(Fitness, 8), (Financial, 9), (Career, 8)],
                        ),
                        option(
                            "q13_feeling",
                            "How I feel (energy, confidence, peace of mind)",
                            8,
                            &[(Health, 8), (Mindfulness, 9), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q13_impact",
                            "Impact on others (helping, inspiring, contributing)",
                            8,
                            &[(Relationships, 9), (Career, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q13_progress",
                            "Personal growth (learning, improving, evolving)",
                            8,
                            &[(PersonalGrowth, 10), (Learning, 9), (Creative, 8)],
                        ),
                    ],
                ),
                single(
                    "q14",
                    "What's your current life situation?",
                    category::LIFE_PHASE,
                    vec![
                        option(
                            "q14_student",
                            "Student or early career",
                            6,
                            &[(Learning, 9), (Career, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q14_employed",
                            "Employed full-time/part-time",
                            7,
                            &[(Career, 8), (Health, 7), (Financial, 8)],
                        ),
                        option(
                            "q14_parent",
                            "Parent or caregiver",
                            6,
                            &[(Health, 7), (Relationships, 8), (PersonalGrowth, 7)],
                        ),
                        option(
                            "q14_entrepreneur",
                            "Entrepreneur or self-employed",
                            7,
                            &[(Career, 9), (Financial, 8), (Learning, 8)],
                        ),
                        option(
                            "q14_retired",
                            "Retired or transitioning",
                            6,
                            &[
                                (Mindfulness, 8),
                                (Spirituality, 8),
                                (Creative, 7),
                                (PersonalGrowth, 8),
                            ],
                        ),
                    ],
                ),
                single(
                    "q15",
                    "What's your biggest challenge right now?",
                    category::CHALLENGE,
                    vec![
                        option(
                            "q15_motivation",
                            "Staying motivated and consistent",
                            8,
                            &[(Relationships, 8), (Mindfulness, 6), (PersonalGrowth, 9)],
                        ),
                        option(
                            "q15_knowledge",
                            "Lack of knowledge or guidance",
                            8,
                            &[(Learning, 10), (Career, 8)],
                        ),
                        option(
                            "q15_time",
                            "Time management and finding time",
                            7,
                            &[(Mindfulness, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q15_support",
                            "Lack of support or accountability",
                            8,
                            &[(Relationships, 10), (Fitness, 8), (Health, 7)],
                        ),
                        option(
                            "q15_balance",
                            "Work-life balance and burnout",
                            8,
                            &[(Mindfulness, 9), (Health, 8), (Relationships, 7)],
                        ),
                    ],
                ),
                single(
                    "q16",
                    "How do you prefer to receive feedback?",
                    category::FEEDBACK_STYLE,
                    vec![
                        option(
                            "q16_direct",
                            "Direct and honest, no sugar-coating",
                            8,
                            &[(Career, 8), (Learning, 7)],
                        ),
                        option(
                            "q16_supportive",
                            "Supportive with constructive criticism",
                            8,
                            &[(Relationships, 8), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q16_light",
                            "Light and encouraging, focus on wins",
                            7,
                            &[(Fitness, 7), (Health, 7), (Mindfulness, 7)],
                        ),
                        option(
                            "q16_mentor",
                            "One-on-one mentorship and guidance",
                            8,
                            &[(Learning, 8), (Career, 9), (PersonalGrowth, 8)],
                        ),
                    ],
                ),
                single(
                    "q17",
                    "Which value resonates most with you?",
                    category::CORE_VALUES,
                    vec![
                        option(
                            "q17_excellence",
                            "Excellence and continuous improvement",
                            8,
                            &[(Career, 9), (Fitness, 8), (Learning, 9), (Creative, 8)],
                        ),
                        option(
                            "q17_community",
                            "Community and connection",
                            8,
                            &[(Relationships, 10), (Fitness, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q17_wellness",
                            "Wellness and balance",
                            8,
                            &[(Health, 9), (Mindfulness, 9), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q17_autonomy",
                            "Freedom and independence",
                            8,
                            &[(Creative, 9), (Career, 8), (Financial, 7)],
                        ),
                        option(
                            "q17_purpose",
                            "Purpose and meaning",
                            8,
                            &[(Spirituality, 10), (Mindfulness, 8), (PersonalGrowth, 9)],
                        ),
                    ],
                ),
                multiple(
                    "q18",
                    "What would make the perfect tribe for you?",
                    category::IDEAL_TRIBE,
                    vec![
                        option(
                            "q18_active",
                            "Very active community (daily posts and discussions)",
                            7,
                            &[(Relationships, 8), (Fitness, 7), (Learning, 7)],
                        ),
                        option(
                            "q18_supportive",
                            "Deeply supportive and encouraging",
                            8,
                            &[
                                (Relationships, 9),
                                (Health, 8),
                                (Mindfulness, 8),
                                (PersonalGrowth, 8),
                            ],
                        ),
                        option(
                            "q18_expert",
                            "Led by experts and experienced mentors",
                            8,
                            &[(Learning, 9), (Career, 9)],
                        ),
                        option(
                            "q18_accountability",
                            "Strong accountability and tracking systems",
                            8,
                            &[(Fitness, 8), (Career, 7), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q18_diverse",
                            "Diverse backgrounds and perspectives",
                            7,
                            &[(Learning, 8), (Relationships, 7), (Creative, 8)],
                        ),
                        option(
                            "q18_smallniche",
                            "Small and niche with like-minded people",
                            7,
                            &[(Creative, 8), (Spirituality, 8), (PersonalGrowth, 8)],
                        ),
                        option(
                            "q18_flexible",
                            "Flexible with no rigid structure",
                            6,
                            &[(Creative, 7), (Mindfulness, 6)],
                        ),
                    ],
                ),
            ],
        }
    }
}
