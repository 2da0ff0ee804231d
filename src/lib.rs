//! Pocket Dice Engine
//!
//! A Rust implementation of a hand-held, single-player five-dice scoring game.
//!
//! # Overview
//!
//! The player gets thirteen turns. Each turn allows up to three rolls, with
//! any dice held between rolls, and ends by writing the hand into one of
//! thirteen scoring boxes. A second Yahtzee (a "Joker") earns a 100 point
//! bonus and may force the hand into its upper box.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn state machine (pure transition function plus owner)
//! - [`models`] - Dice, categories and the score sheet
//! - [`services`] - Scoring rules, dice roller, audio, storage and the console session
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text rendering of the LCD screen
//! - [`cli`] - Command-line configuration
//!
//! # Example
//!
//! ```rust
//! use pocket_dice::{Action, GameEngine, Phase};
//!
//! let mut engine = GameEngine::new(0);
//! engine.dispatch(Action::NewGame);
//! engine.dispatch(Action::roll_dice(&[2, 2, 2, 5, 5]).unwrap());
//! engine.dispatch(Action::StartScoring);
//! assert_eq!(engine.state().phase(), Phase::Scoring);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{Action, Direction, GameEngine, GameState, Outcome, Phase, Rejection};
pub use models::category::Category;
pub use models::dice::{DieIndex, DieValue, Hand, Held};
pub use models::errors::{GameError, GameResult};
pub use models::score_sheet::ScoreSheet;
