//! Turn state machine
//!
//! Owns the authoritative [`GameState`] and advances it one [`Action`] at a
//! time through the pure [`transition`] function. Actions the current phase
//! does not allow are ignored; the engine logs them and hands them to an
//! optional rejection hook.

mod action;
mod state;
mod transition;

use tracing::debug;

pub use action::{Action, Rejection};
pub use state::{GameState, Phase};
pub use transition::{transition, try_transition};
pub use crate::models::category::Direction;

/// Callback invoked for every ignored action.
pub type RejectionHook = Box<dyn FnMut(&Action, &Rejection)>;

/// Result of a single dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied { from: Phase, to: Phase },
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    /// True when this dispatch finished the game.
    pub fn completed_game(&self) -> bool {
        matches!(
            self,
            Outcome::Applied { from, to: Phase::GameOver } if *from != Phase::GameOver
        )
    }
}

/// Core game engine holding the current snapshot
pub struct GameEngine {
    state: GameState,
    on_reject: Option<RejectionHook>,
}

impl GameEngine {
    /// Creates an idle engine carrying a previously stored high score.
    pub fn new(high_score: u32) -> Self {
        Self::from_state(GameState::new(high_score))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            on_reject: None,
        }
    }

    /// Returns the current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Installs a callback that sees every ignored action and the reason.
    pub fn set_rejection_hook(&mut self, hook: RejectionHook) {
        self.on_reject = Some(hook);
    }

    /// Applies one action.
    ///
    /// # Returns
    ///
    /// * `Outcome::Applied` with the phases before and after
    /// * `Outcome::Ignored` with the guard that refused the action; the state is unchanged
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match try_transition(&self.state, &action) {
            Ok(next) => {
                let from = self.state.phase();
                let to = next.phase();
                debug!(
                    action = action.name(),
                    from = from.label(),
                    to = to.label(),
                    turn = next.turn(),
                    rolls_left = next.rolls_left(),
                    "action applied"
                );
                self.state = next;
                Outcome::Applied { from, to }
            }
            Err(rejection) => {
                debug!(
                    action = action.name(),
                    phase = self.state.phase().label(),
                    reason = %rejection,
                    "action ignored"
                );
                if let Some(hook) = self.on_reject.as_mut() {
                    hook(&action, &rejection);
                }
                Outcome::Ignored(rejection)
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispatch_reports_phase_change() {
        let mut engine = GameEngine::new(0);
        let outcome = engine.dispatch(Action::NewGame);
        assert_eq!(
            outcome,
            Outcome::Applied {
                from: Phase::Idle,
                to: Phase::Playing
            }
        );
        assert!(!outcome.completed_game());
    }

    #[test]
    fn ignored_action_leaves_state_and_calls_hook() {
        let seen: Rc<RefCell<Vec<Rejection>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = GameEngine::new(0);
        engine.set_rejection_hook(Box::new(move |_, r| sink.borrow_mut().push(*r)));

        let before = engine.state().clone();
        let outcome = engine.dispatch(Action::ConfirmScore);

        assert_eq!(outcome, Outcome::Ignored(Rejection::WrongPhase(Phase::Idle)));
        assert_eq!(engine.state(), &before);
        assert_eq!(seen.borrow().as_slice(), &[Rejection::WrongPhase(Phase::Idle)]);
    }

    #[test]
    fn completed_game_only_on_entry_to_game_over() {
        let finishing = Outcome::Applied {
            from: Phase::Scoring,
            to: Phase::GameOver,
        };
        let restarting = Outcome::Applied {
            from: Phase::GameOver,
            to: Phase::GameOver,
        };
        assert!(finishing.completed_game());
        assert!(!restarting.completed_game());
        assert!(!Outcome::Ignored(Rejection::NoRollsLeft).completed_game());
    }
}
