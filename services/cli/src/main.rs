fn main() {
    if let Err(err) = card_evaluator_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
