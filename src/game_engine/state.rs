use crate::models::category::Category;
use crate::models::constants::ROLLS_PER_TURN;
use crate::models::dice::{Hand, Held};
use crate::models::score_sheet::ScoreSheet;
use crate::services::scoring;

/// Turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game started yet
    Idle,
    /// Rolling; a category has not been chosen
    Playing,
    /// Picking a category for the current hand
    Scoring,
    /// All thirteen boxes are filled
    GameOver,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Playing => "PLAYING",
            Phase::Scoring => "SCORING",
            Phase::GameOver => "GAME OVER",
        }
    }
}

/// Snapshot of a game. Produced only by the transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) hand: Hand,
    pub(crate) held: Held,
    pub(crate) rolls_left: u8,
    pub(crate) sheet: ScoreSheet,
    pub(crate) selected: Option<Category>,
    pub(crate) phase: Phase,
    pub(crate) turn: u8,
    pub(crate) high_score: u32,
    pub(crate) yahtzee_bonus: u32,
    pub(crate) sound_enabled: bool,
}

impl GameState {
    /// Power-on state: idle, empty sheet, carrying a previously stored high score.
    pub fn new(high_score: u32) -> Self {
        Self {
            hand: Hand::default(),
            held: Held::default(),
            rolls_left: ROLLS_PER_TURN,
            sheet: ScoreSheet::new(),
            selected: None,
            phase: Phase::Idle,
            turn: 1,
            high_score,
            yahtzee_bonus: 0,
            sound_enabled: true,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn held(&self) -> &Held {
        &self.held
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u8 {
        self.turn
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn yahtzee_bonus(&self) -> u32 {
        self.yahtzee_bonus
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// True once the first roll of the current turn has happened.
    pub fn has_rolled(&self) -> bool {
        self.rolls_left < ROLLS_PER_TURN
    }

    pub fn is_joker(&self) -> bool {
        scoring::is_joker(&self.hand, &self.sheet)
    }

    pub fn upper_total(&self) -> u32 {
        scoring::upper_total(&self.sheet)
    }

    pub fn has_upper_bonus(&self) -> bool {
        scoring::has_upper_bonus(&self.sheet)
    }

    pub fn total_score(&self) -> u32 {
        scoring::total_score(&self.sheet, self.yahtzee_bonus)
    }

    /// What confirming now would record. Only defined while scoring with a selection.
    pub fn preview_score(&self) -> Option<u32> {
        match (self.phase, self.selected) {
            (Phase::Scoring, Some(category)) => {
                Some(scoring::score(category, &self.hand, self.is_joker()))
            }
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
