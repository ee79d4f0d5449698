use crate::commands::{run_batch, run_evaluate, BatchArgs, EvaluateArgs};
use card_evaluator::config::AppConfig;
use card_evaluator::error::AppError;
use card_evaluator::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "card-evaluator",
    about = "Evaluate credit-card applications against frequent-flyer and fraud checks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application described on the command line
    Evaluate(EvaluateArgs),
    /// Evaluate every application in a CSV file and print a batch report
    Batch(BatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Evaluate(args) => run_evaluate(&config, args, &mut stdout),
        Command::Batch(args) => run_batch(&config, args, &mut stdout),
    }
}
