pub const NUM_DICE: usize = 5;
pub const NUM_CATEGORIES: usize = 13;
pub const NUM_TURNS: u8 = 13;
pub const ROLLS_PER_TURN: u8 = 3;

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

pub const UPPER_BONUS_THRESHOLD: u32 = 63;
pub const UPPER_BONUS: u32 = 35;
pub const YAHTZEE_BONUS: u32 = 100;

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Number of +1 steps between sorted distinct faces needed for a small straight.
pub const SMALL_STRAIGHT_STEPS: usize = 3;

/// Key under which the best final total is persisted.
pub const HIGH_SCORE_KEY: &str = "yahtzee_highscore";

/// Roll animation (display only).
pub const ROLL_ANIMATION_FRAMES: usize = 10;
pub const ROLL_ANIMATION_START_DELAY_MS: u64 = 40;
/// Each frame waits this percentage of the previous delay.
pub const ROLL_ANIMATION_DELAY_GROWTH_PCT: u64 = 115;
