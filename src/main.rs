use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use tribe_match::config::AppConfig;
use tribe_match::error::AppError;
use tribe_match::matching::{
    build_profile, extract_goal_weights, rank_tribes, GoalWeights, MatchResult, TribeProfile,
    UserProfile,
};
use tribe_match::quiz::{QuizAnswers, QuizCatalogue};
use tribe_match::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "tribe-match",
    about = "Score and rank tribe recommendations from personality quiz answers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidate tribes for a submitted answer set
    Recommend(RecommendArgs),
    /// Show the profile and goal weights derived from an answer set
    Profile(ProfileArgs),
    /// Summarize a quiz catalogue
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// JSON file mapping question ids to the selected option id(s)
    #[arg(long)]
    answers: PathBuf,
    /// JSON file containing the candidate tribe snapshots
    #[arg(long)]
    tribes: PathBuf,
    /// Quiz catalogue JSON (defaults to the built-in questionnaire)
    #[arg(long)]
    quiz: Option<PathBuf>,
    /// Maximum number of recommendations to show
    #[arg(long)]
    limit: Option<usize>,
    /// Emit the ranked results as JSON instead of a rendered report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// JSON file mapping question ids to the selected option id(s)
    #[arg(long)]
    answers: PathBuf,
    /// Quiz catalogue JSON (defaults to the built-in questionnaire)
    #[arg(long)]
    quiz: Option<PathBuf>,
    /// Emit the derived profile as JSON instead of a rendered report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct QuizArgs {
    /// Quiz catalogue JSON (defaults to the built-in questionnaire)
    #[arg(long)]
    quiz: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ProfileReport {
    profile: UserProfile,
    goal_weights: GoalWeights,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Recommend(args) => run_recommend(args, &config),
        Command::Profile(args) => run_profile(args),
        Command::Quiz(args) => run_quiz(args),
    }
}

fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalogue = load_catalogue(args.quiz.as_deref())?;
    let answers: QuizAnswers = load_json(&args.answers)?;
    let tribes: Vec<TribeProfile> = load_json(&args.tribes)?;

    let profile = build_profile(&answers, &catalogue);
    let goal_weights = extract_goal_weights(&answers, &catalogue);
    let limit = args.limit.unwrap_or(config.recommendations.default_limit);

    info!(
        answered = answers.len(),
        candidates = tribes.len(),
        limit,
        "ranking tribes"
    );

    let results = rank_tribes(&profile, &tribes, Some(&goal_weights), limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!(
            "{}",
            render_recommendations(&profile, tribes.len(), &results)
        );
    }
    Ok(())
}

fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let catalogue = load_catalogue(args.quiz.as_deref())?;
    let answers: QuizAnswers = load_json(&args.answers)?;

    let report = ProfileReport {
        profile: build_profile(&answers, &catalogue),
        goal_weights: extract_goal_weights(&answers, &catalogue),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_profile(&report));
    }
    Ok(())
}

fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let catalogue = load_catalogue(args.quiz.as_deref())?;

    println!(
        "{} (version {}, ~{} min)",
        catalogue.title, catalogue.version, catalogue.estimated_minutes
    );
    println!("{}", catalogue.description);
    println!();
    for question in &catalogue.questions {
        println!(
            "- {} [{}] {}, {} options: {}",
            question.id,
            question.category,
            question.kind.label(),
            question.options.len(),
            question.prompt
        );
    }
    Ok(())
}

fn load_catalogue(path: Option<&Path>) -> Result<QuizCatalogue, AppError> {
    match path {
        Some(path) => load_json(path),
        None => Ok(QuizCatalogue::standard()),
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn render_recommendations(
    profile: &UserProfile,
    candidates: usize,
    results: &[MatchResult],
) -> String {
    let mut out = String::new();

    out.push_str("Tribe recommendations\n");
    out.push_str(&format!(
        "Generated {} | primary goal {} | {} candidate(s) evaluated, showing {}\n",
        Local::now().date_naive(),
        profile.primary_goal.label(),
        candidates,
        results.len()
    ));

    if results.is_empty() {
        out.push_str("\nNo candidates to rank\n");
        return out;
    }

    for (position, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} - {} ({})\n",
            position + 1,
            result.tribe_name,
            result.match_percentage,
            result.recommendation.label()
        ));
        let breakdown = result.breakdown;
        out.push_str(&format!(
            "   goal {} / interests {} / learning {} / personality {} / engagement {}\n",
            breakdown.goal_match,
            breakdown.interest_match,
            breakdown.learning_style_match,
            breakdown.personality_match,
            breakdown.engagement_match
        ));
        for reason in &result.reasons_to_join {
            out.push_str(&format!("   - {reason}\n"));
        }
    }

    out
}

fn render_profile(report: &ProfileReport) -> String {
    let profile = &report.profile;
    let mut out = String::new();

    out.push_str("Derived profile\n");
    out.push_str(&format!(
        "- primary goal: {}\n",
        profile.primary_goal.label()
    ));
    out.push_str(&format!(
        "- interests: {}\n",
        if profile.interests.is_empty() {
            "none".to_string()
        } else {
            profile.interests.join(", ")
        }
    ));
    out.push_str(&format!(
        "- commitment {:?} / learning {:?} / motivation {:?} / experience {:?}\n",
        profile.commitment, profile.learning_style, profile.motivation, profile.experience
    ));
    out.push_str(&format!(
        "- personality: introvert {} / detail {} / planner {}\n",
        profile.personality.introvert,
        profile.personality.detail_oriented,
        profile.personality.planner
    ));

    let mut weights: Vec<_> = report.goal_weights.iter().collect();
    weights.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if weights.is_empty() {
        out.push_str("\nGoal weights: none\n");
    } else {
        out.push_str("\nGoal weights\n");
        for (goal, weight) in weights {
            out.push_str(&format!("- {}: {:.0}\n", goal.label(), weight));
        }
    }

    out
}
