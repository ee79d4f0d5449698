mod cli;
mod commands;

use card_evaluator::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
