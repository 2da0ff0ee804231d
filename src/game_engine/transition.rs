//! The turn reducer.
//!
//! A total function over `(state, action)`: an action the current phase does
//! not allow yields the input state unchanged.

use crate::models::category::{Category, Direction};
use crate::models::constants::{NUM_CATEGORIES, NUM_TURNS, ROLLS_PER_TURN, YAHTZEE_BONUS, YAHTZEE_SCORE};
use crate::models::dice::{DieIndex, Hand, Held};
use crate::models::score_sheet::ScoreSheet;
use crate::services::scoring;

use super::action::{Action, Rejection};
use super::state::{GameState, Phase};

/// Applies `action` to `state`, returning the next snapshot.
pub fn transition(state: &GameState, action: &Action) -> GameState {
    try_transition(state, action).unwrap_or_else(|_| state.clone())
}

/// Like [`transition`], but reports why an action was ignored.
pub fn try_transition(state: &GameState, action: &Action) -> Result<GameState, Rejection> {
    match *action {
        Action::NewGame => Ok(new_game(state)),
        Action::ToggleHold(index) => toggle_hold(state, index),
        Action::RollDice(hand) => roll_dice(state, hand),
        Action::StartScoring => start_scoring(state),
        Action::SelectCategory(direction) => select_category(state, direction),
        Action::ConfirmScore => confirm_score(state),
        Action::ToggleSound => Ok(GameState {
            sound_enabled: !state.sound_enabled,
            ..state.clone()
        }),
    }
}

fn new_game(state: &GameState) -> GameState {
    GameState {
        phase: Phase::Playing,
        sound_enabled: state.sound_enabled,
        ..GameState::new(state.high_score)
    }
}

fn toggle_hold(state: &GameState, index: DieIndex) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Playing)?;
    if !state.has_rolled() {
        return Err(Rejection::NotRolledYet);
    }
    let mut next = state.clone();
    next.held.toggle(index);
    Ok(next)
}

fn roll_dice(state: &GameState, hand: Hand) -> Result<GameState, Rejection> {
    // Rolling again after stopping early drops back into Playing.
    if !matches!(state.phase, Phase::Playing | Phase::Scoring) {
        return Err(Rejection::WrongPhase(state.phase));
    }
    if state.rolls_left == 0 {
        return Err(Rejection::NoRollsLeft);
    }

    let mut next = state.clone();
    next.hand = hand;
    next.rolls_left -= 1;
    if next.rolls_left == 0 {
        next.phase = Phase::Scoring;
        next.selected = scoring::initial_selection(&next.hand, &next.sheet);
    } else {
        next.phase = Phase::Playing;
        next.selected = None;
    }
    Ok(next)
}

fn start_scoring(state: &GameState) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Playing)?;
    if !state.has_rolled() {
        return Err(Rejection::NotRolledYet);
    }
    let selection = scoring::initial_selection(&state.hand, &state.sheet)
        .ok_or(Rejection::NoOpenCategory)?;
    Ok(GameState {
        phase: Phase::Scoring,
        selected: Some(selection),
        ..state.clone()
    })
}

fn select_category(state: &GameState, direction: Direction) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Scoring)?;
    let current = state.selected.ok_or(Rejection::NoSelection)?;
    if scoring::forced_category(&state.hand, &state.sheet).is_some() {
        return Err(Rejection::JokerLocked);
    }
    let target = next_open(&state.sheet, current, direction).ok_or(Rejection::NoOpenCategory)?;
    Ok(GameState {
        selected: Some(target),
        ..state.clone()
    })
}

/// Walks from `from` in `direction`, wrapping, to the nearest open box.
/// Lands back on `from` when it is the only open one.
fn next_open(sheet: &ScoreSheet, from: Category, direction: Direction) -> Option<Category> {
    let mut candidate = from;
    for _ in 0..NUM_CATEGORIES {
        candidate = candidate.step(direction);
        if !sheet.is_set(candidate) {
            return Some(candidate);
        }
    }
    None
}

fn confirm_score(state: &GameState) -> Result<GameState, Rejection> {
    require_phase(state, Phase::Scoring)?;
    let category = state.selected.ok_or(Rejection::NoSelection)?;

    let joker = state.is_joker();
    let value = scoring::score(category, &state.hand, joker);

    let mut next = state.clone();
    if !next.sheet.record(category, value) {
        return Err(Rejection::AlreadyScored(category));
    }
    if joker && state.sheet.get(Category::Yahtzee) == Some(YAHTZEE_SCORE) {
        next.yahtzee_bonus += YAHTZEE_BONUS;
    }

    next.rolls_left = ROLLS_PER_TURN;
    next.held = Held::default();
    next.selected = None;

    if next.sheet.is_complete() {
        next.phase = Phase::GameOver;
        next.turn = NUM_TURNS;
        next.high_score = next.high_score.max(next.total_score());
    } else {
        next.phase = Phase::Playing;
        next.turn += 1;
    }
    Ok(next)
}

fn require_phase(state: &GameState, phase: Phase) -> Result<(), Rejection> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(Rejection::WrongPhase(state.phase))
    }
}
