use clap::Parser;
use std::path::PathBuf;

use crate::services::game::Settings;

#[derive(Debug, Parser)]
#[command(name = "pocket-dice")]
#[command(about = "Single-player five-dice scoring game for the terminal")]
pub struct Args {
    /// Seed for the dice random number generator
    #[arg(short, long, env = "POCKET_DICE_SEED")]
    pub seed: Option<u64>,

    /// File holding the high score
    #[arg(
        long,
        env = "POCKET_DICE_HIGH_SCORE_FILE",
        default_value = "pocket_dice_highscore.json"
    )]
    pub high_score_file: PathBuf,

    /// Start with sound off
    #[arg(long)]
    pub mute: bool,

    /// Land rolls immediately instead of showing tumbling dice
    #[arg(long)]
    pub no_animation: bool,

    /// Log filter (e.g. "debug", "pocket_dice=trace"); falls back to RUST_LOG, then "warn"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            seed: self.seed,
            sound: !self.mute,
            animate: !self.no_animation,
        }
    }
}
