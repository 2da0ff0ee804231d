use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pocket_dice::cli::args::Args;
use pocket_dice::services::game::Game;
use pocket_dice::services::storage::{HighScoreStore, JsonFileStore};

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the screen
    let filter = match args.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let scores = HighScoreStore::new(Box::new(JsonFileStore::new(&args.high_score_file)));
    let mut game = Game::terminal(&args.settings(), scores);
    if let Err(e) = game.run() {
        error!(error = %e, "session ended with an error");
        std::process::exit(1);
    }
}
