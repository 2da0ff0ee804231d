//! Domain models
//!
//! Dice, hold flags, scoring categories and the score sheet. Models are pure
//! data structures with minimal logic; scoring lives in `services::scoring`.

pub mod category;
pub mod constants;
pub mod dice;
pub mod errors;
pub mod score_sheet;
