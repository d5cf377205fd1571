use std::path::PathBuf;

use clap::Parser;
use linguaquiz::{
    load_bank_from_json, BankProvider, DistractorPolicy, LessonRunner, QuizBuilder, QuizError,
    SituationForm, DEFAULT_NUM_QUESTIONS, DEFAULT_NUM_RESULTS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON lesson bank to serve vocabulary from
    #[arg(short, long)]
    bank: PathBuf,

    /// Situation to practice, e.g. "ordering coffee"
    #[arg(short, long)]
    situation: Option<String>,

    /// Target language, e.g. "French"
    #[arg(short, long)]
    language: Option<String>,

    /// Number of quiz questions
    #[arg(short, long, default_value_t = DEFAULT_NUM_QUESTIONS)]
    questions: usize,

    /// Number of vocabulary entries to fetch for a new lesson
    #[arg(short, long, default_value_t = DEFAULT_NUM_RESULTS)]
    results: usize,

    /// Seed for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Allow repeated sentences among the options
    #[arg(long)]
    raw_distractors: bool,
}

async fn run(args: Args) -> Result<(), QuizError> {
    let bank = load_bank_from_json(&args.bank)?;

    let policy = if args.raw_distractors {
        DistractorPolicy::Raw
    } else {
        DistractorPolicy::Distinct
    };
    let builder = QuizBuilder::new()
        .num_questions(args.questions)
        .distractor_policy(policy);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut runner = LessonRunner::new(Box::new(BankProvider::new(bank)))
        .with_builder(builder, rng)
        .num_results(args.results);

    match (args.situation, args.language) {
        (Some(situation), Some(language)) => {
            runner.open(SituationForm::new(situation, language)).await?;
        }
        (situation, language) => {
            let form =
                SituationForm::new(situation.unwrap_or_default(), language.unwrap_or_default());
            runner.app_mut().set_form(form);
        }
    }

    runner.run().await
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error running lesson: {}", e);
        std::process::exit(1);
    }
}
