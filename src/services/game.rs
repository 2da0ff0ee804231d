//! Console session
//!
//! Maps keyboard commands onto engine actions the way the hand-held's
//! buttons did, runs the roll animation, and feeds the audio and high score
//! collaborators. All game rules stay in the engine.

use std::thread;
use tracing::{debug, info, warn};

use crate::game_engine::{Action, Direction, GameEngine, Phase};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::constants::ROLL_ANIMATION_FRAMES;
use crate::models::errors::GameResult;
use crate::services::audio::{AudioEvent, AudioSink, TerminalBell};
use crate::services::dice::{frame_delays, DiceRoller};
use crate::services::storage::HighScoreStore;
use crate::ui::presenters::{Overlays, ScreenPresenter, ScreenView};

/// Runtime options for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dice seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub sound: bool,
    /// Show tumbling frames before each roll lands.
    pub animate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            sound: true,
            animate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Roll,
    Hold(usize),
    Select(Direction),
    Enter,
    New,
    Sound,
    Help,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Command> {
        let input = input.trim().to_ascii_lowercase();
        let command = match input.as_str() {
            "r" | "roll" => Command::Roll,
            "<" | "," | "a" | "prev" => Command::Select(Direction::Prev),
            ">" | "." | "d" | "next" => Command::Select(Direction::Next),
            "e" | "enter" => Command::Enter,
            "n" | "new" => Command::New,
            "s" | "sound" => Command::Sound,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => {
                // Buttons are labelled 1-5 on the device.
                let number: usize = other.parse().ok()?;
                Command::Hold(number.checked_sub(1)?)
            }
        };
        Some(command)
    }
}

pub struct Game {
    engine: GameEngine,
    roller: DiceRoller,
    scores: HighScoreStore,
    audio: Box<dyn AudioSink>,
    input: Box<dyn InputReader>,
    output: Box<dyn OutputWriter>,
    animate: bool,
    overlays: Overlays,
}

impl Game {
    pub fn new(
        settings: &Settings,
        scores: HighScoreStore,
        mut audio: Box<dyn AudioSink>,
        input: Box<dyn InputReader>,
        output: Box<dyn OutputWriter>,
    ) -> Self {
        let mut engine = GameEngine::new(scores.load());
        if !settings.sound {
            engine.dispatch(Action::ToggleSound);
        }
        audio.set_enabled(engine.state().sound_enabled());

        let roller = match settings.seed {
            Some(seed) => DiceRoller::new(seed),
            None => DiceRoller::from_entropy(),
        };

        Game {
            engine,
            roller,
            scores,
            audio,
            input,
            output,
            animate: settings.animate,
            overlays: Overlays::default(),
        }
    }

    /// A session on stdin/stdout with the terminal bell for sound.
    pub fn terminal(settings: &Settings, scores: HighScoreStore) -> Self {
        Self::new(
            settings,
            scores,
            Box::new(TerminalBell::new(settings.sound)),
            Box::new(TerminalIO),
            Box::new(TerminalIO),
        )
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(&mut self) -> GameResult<()> {
        self.output.writeln("*** POCKET DICE ***");
        ScreenPresenter::show_help(self.output.as_mut());
        self.render();

        loop {
            let Some(line) = self.input.read_line("COMMAND")? else {
                break;
            };
            let Some(command) = Command::parse(&line) else {
                ScreenPresenter::show_help(self.output.as_mut());
                continue;
            };
            if command == Command::Quit {
                self.output.writeln("GOODBYE.");
                break;
            }

            // Errors from a command are shown and play continues
            if let Err(e) = self.handle(command) {
                self.output.writeln(&format!("Error: {}", e));
                continue;
            }
            self.render();
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> GameResult<()> {
        debug!(?command, phase = self.engine.state().phase().label(), "command");
        self.overlays.sound_notice = None;
        if !matches!(command, Command::New | Command::Sound) {
            self.overlays.reset_confirm = false;
        }

        match command {
            Command::Roll => self.roll(),
            Command::Hold(index) => {
                let action = Action::toggle_hold(index)?;
                let state = self.engine.state();
                if state.phase() == Phase::Playing && state.has_rolled() {
                    self.audio.notify(AudioEvent::HoldToggled);
                    self.engine.dispatch(action);
                }
            }
            Command::Select(direction) => {
                let state = self.engine.state();
                let (phase, has_rolled) = (state.phase(), state.has_rolled());
                match phase {
                    Phase::Playing if has_rolled => {
                        self.audio.notify(AudioEvent::SelectionMoved);
                        self.engine.dispatch(Action::StartScoring);
                    }
                    Phase::Scoring => {
                        self.audio.notify(AudioEvent::SelectionMoved);
                        self.engine.dispatch(Action::SelectCategory(direction));
                    }
                    _ => {}
                }
            }
            Command::Enter => self.confirm(),
            Command::New => self.new_game_pressed(),
            Command::Sound => {
                self.engine.dispatch(Action::ToggleSound);
                let enabled = self.engine.state().sound_enabled();
                self.audio.set_enabled(enabled);
                self.audio.notify(AudioEvent::SoundToggled);
                self.overlays.sound_notice = Some(enabled);
            }
            Command::Help => ScreenPresenter::show_help(self.output.as_mut()),
            Command::Quit => {}
        }
        Ok(())
    }

    fn roll(&mut self) {
        let state = self.engine.state();
        let (phase, rolls_left) = (state.phase(), state.rolls_left());
        let (hand, held) = (*state.hand(), *state.held());
        match phase {
            // The ROLL button doubles as power-on.
            Phase::Idle | Phase::GameOver => self.start_new_game(),
            Phase::Playing | Phase::Scoring if rolls_left > 0 => {
                self.audio.notify(AudioEvent::RollStarted);
                if self.animate {
                    let frames = self.roller.animation_frames(&hand, &held, ROLL_ANIMATION_FRAMES);
                    for (frame, delay) in frames.iter().zip(frame_delays(frames.len())) {
                        let view = ScreenView {
                            state: self.engine.state(),
                            tumbling: Some(frame),
                            overlays: self.overlays,
                        };
                        ScreenPresenter::show_screen(&view, self.output.as_mut());
                        thread::sleep(delay);
                    }
                }
                let rolled = self.roller.roll(&hand, &held);
                self.engine.dispatch(Action::RollDice(rolled));
            }
            _ => self.output.writeln("NO ROLLS LEFT - CHOOSE A CATEGORY"),
        }
    }

    fn confirm(&mut self) {
        if self.engine.state().phase() != Phase::Scoring {
            return;
        }
        self.audio.notify(AudioEvent::CategoryConfirmed);
        let outcome = self.engine.dispatch(Action::ConfirmScore);
        if !outcome.completed_game() {
            return;
        }

        let total = self.engine.state().total_score();
        info!(total, "game complete");
        self.audio.notify(AudioEvent::GameWon);
        let new_high = match self.scores.record(total) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(error = %err, total, "could not save high score");
                false
            }
        };
        ScreenPresenter::show_final_score(self.engine.state(), new_high, self.output.as_mut());
    }

    /// NEW needs a second press while a game is in progress.
    fn new_game_pressed(&mut self) {
        let phase = self.engine.state().phase();
        if matches!(phase, Phase::Idle | Phase::GameOver) || self.overlays.reset_confirm {
            self.start_new_game();
        } else {
            self.audio.notify(AudioEvent::Alert);
            self.overlays.reset_confirm = true;
        }
    }

    fn start_new_game(&mut self) {
        self.audio.notify(AudioEvent::GameWon);
        self.engine.dispatch(Action::NewGame);
        self.overlays.reset_confirm = false;
        info!(high_score = self.engine.state().high_score(), "new game");
    }

    fn render(&mut self) {
        let view = ScreenView {
            state: self.engine.state(),
            tumbling: None,
            overlays: self.overlays,
        };
        ScreenPresenter::show_screen(&view, self.output.as_mut());
    }
}
