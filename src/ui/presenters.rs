use crate::game_engine::{GameState, Phase};
use crate::io::OutputWriter;
use crate::models::category::Category;
use crate::models::constants::{NUM_TURNS, ROLLS_PER_TURN, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::models::dice::{DieIndex, Hand};

const CELL: usize = 6;

/// Transient messages drawn over the dice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub reset_confirm: bool,
    /// Set right after the sound toggle, holding the new setting.
    pub sound_notice: Option<bool>,
}

/// What to draw: the engine snapshot plus presentation-only extras.
pub struct ScreenView<'a> {
    pub state: &'a GameState,
    /// Dice shown instead of the real hand while the roll animation runs.
    pub tumbling: Option<&'a Hand>,
    pub overlays: Overlays,
}

impl<'a> ScreenView<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            state,
            tumbling: None,
            overlays: Overlays::default(),
        }
    }
}

pub struct ScreenPresenter;

impl ScreenPresenter {
    pub fn show_screen(view: &ScreenView, output: &mut dyn OutputWriter) {
        let state = view.state;
        let border = "=".repeat(CELL * 7);

        output.writeln(&border);
        Self::show_row(state, &Category::UPPER, output);
        output.writeln(&"-".repeat(CELL * 7));
        Self::show_dice_area(view, output);
        output.writeln(&"-".repeat(CELL * 7));
        Self::show_status(state, output);
        output.writeln(&"-".repeat(CELL * 7));
        Self::show_row(state, &Category::LOWER, output);
        output.writeln(&border);
        output.writeln(&format!(
            "TURN {}/{}   HIGH SCORE {}",
            state.turn(),
            NUM_TURNS,
            state.high_score()
        ));
    }

    pub fn show_help(output: &mut dyn OutputWriter) {
        output.writeln("   R       = ROLL (starts a game when idle or over)");
        output.writeln("   1-5     = HOLD / RELEASE DIE");
        output.writeln("   < OR >  = CHOOSE CATEGORY");
        output.writeln("   E       = ENTER SCORE");
        output.writeln("   N       = NEW GAME");
        output.writeln("   S       = SOUND ON/OFF");
        output.writeln("   Q       = QUIT");
    }

    pub fn show_final_score(state: &GameState, new_high_score: bool, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("FINAL SCORE {}", state.total_score()));
        if state.yahtzee_bonus() > 0 {
            output.writeln(&format!("YAHTZEE BONUS {}", state.yahtzee_bonus()));
        }
        if new_high_score {
            output.writeln("*** NEW HIGH SCORE ***");
        }
        output.writeln("");
    }

    /// Label, cursor and score lines for one section of the sheet.
    fn show_row(state: &GameState, categories: &[Category], output: &mut dyn OutputWriter) {
        let preview = state.preview_score();
        let mut labels = String::new();
        let mut cursor = String::new();
        let mut scores = String::new();

        for &category in categories {
            labels.push_str(&format!("{:^w$}", category.label(), w = CELL));
            let marker = if state.selected() == Some(category) { "^" } else { "" };
            cursor.push_str(&format!("{:^w$}", marker, w = CELL));
            let value = match (state.sheet().get(category), preview) {
                (Some(recorded), _) => recorded.to_string(),
                (None, Some(p)) if state.selected() == Some(category) => p.to_string(),
                _ => String::new(),
            };
            scores.push_str(&format!("{:^w$}", value, w = CELL));
        }

        output.writeln(labels.trim_end());
        output.writeln(cursor.trim_end());
        output.writeln(scores.trim_end());
    }

    fn show_dice_area(view: &ScreenView, output: &mut dyn OutputWriter) {
        let state = view.state;
        if let Some(on) = view.overlays.sound_notice {
            output.writeln(&format!("{:^w$}", format!("SOUND {}", if on { "ON" } else { "OFF" }), w = CELL * 7));
            output.writeln("");
            return;
        }
        if view.overlays.reset_confirm {
            output.writeln(&format!("{:^w$}", "NEW GAME?", w = CELL * 7));
            output.writeln(&format!("{:^w$}", "PRESS NEW", w = CELL * 7));
            return;
        }
        if state.phase() == Phase::GameOver {
            output.writeln(&format!("{:^w$}", "GAME OVER", w = CELL * 7));
            output.writeln("");
            return;
        }

        let hand = view.tumbling.unwrap_or(state.hand());
        let mut dice = String::new();
        let mut holds = String::new();
        for index in DieIndex::ALL {
            let die = hand.die(index);
            let held = state.held().is_held(index);
            let face = if held { format!("[{}]", die) } else { format!(" {} ", die) };
            dice.push_str(&format!("{:^w$}", face, w = CELL + 1));
            holds.push_str(&format!("{:^w$}", if held { "HOLD" } else { "" }, w = CELL + 1));
        }
        output.writeln(dice.trim_end());
        output.writeln(holds.trim_end());
    }

    fn show_status(state: &GameState, output: &mut dyn OutputWriter) {
        let rolls: String = (1..=ROLLS_PER_TURN)
            .map(|i| if i <= state.rolls_left() { '#' } else { '.' })
            .collect();
        let bonus = if state.has_upper_bonus() {
            UPPER_BONUS.to_string()
        } else {
            "--".to_string()
        };
        output.writeln(&format!(
            "ROLLS {}  UPPER {}/{}  BONUS {}  SCORE {}",
            rolls,
            state.upper_total(),
            UPPER_BONUS_THRESHOLD,
            bonus,
            state.total_score()
        ));
    }
}
