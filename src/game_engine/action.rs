use std::fmt;

use crate::models::category::{Category, Direction};
use crate::models::dice::{DieIndex, Hand};
use crate::models::errors::GameResult;

use super::state::Phase;

/// Everything a caller can ask of the engine. Inputs are validated on
/// construction, so every `Action` value is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewGame,
    ToggleHold(DieIndex),
    /// Final values of a roll. Held positions must already carry their old faces.
    RollDice(Hand),
    StartScoring,
    SelectCategory(Direction),
    ConfirmScore,
    ToggleSound,
}

impl Action {
    pub fn toggle_hold(index: usize) -> GameResult<Self> {
        Ok(Action::ToggleHold(DieIndex::new(index)?))
    }

    pub fn roll_dice(faces: &[u8]) -> GameResult<Self> {
        Ok(Action::RollDice(Hand::try_from(faces)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::NewGame => "NEW_GAME",
            Action::ToggleHold(_) => "TOGGLE_HOLD",
            Action::RollDice(_) => "ROLL_DICE",
            Action::StartScoring => "START_SCORING",
            Action::SelectCategory(_) => "SELECT_CATEGORY",
            Action::ConfirmScore => "CONFIRM_SCORE",
            Action::ToggleSound => "TOGGLE_SOUND",
        }
    }
}

/// Why an action was ignored. Diagnostic only; ignored actions leave the
/// state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WrongPhase(Phase),
    NoRollsLeft,
    NotRolledYet,
    NoSelection,
    JokerLocked,
    NoOpenCategory,
    AlreadyScored(Category),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::WrongPhase(phase) => write!(f, "not allowed in phase {}", phase.label()),
            Rejection::NoRollsLeft => write!(f, "no rolls left this turn"),
            Rejection::NotRolledYet => write!(f, "dice have not been rolled this turn"),
            Rejection::NoSelection => write!(f, "no category selected"),
            Rejection::JokerLocked => write!(f, "joker must be played in its upper box"),
            Rejection::NoOpenCategory => write!(f, "no open category"),
            Rejection::AlreadyScored(category) => write!(f, "{} is already scored", category),
        }
    }
}
