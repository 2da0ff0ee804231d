//! Audio collaborator
//!
//! Fire-and-forget notifications for discrete game events. Sinks keep their
//! own enable flag, mirrored from the game's sound preference.

use std::io::{self, Write};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    RollStarted,
    HoldToggled,
    SelectionMoved,
    CategoryConfirmed,
    SoundToggled,
    GameWon,
    /// Reset prompt
    Alert,
}

pub trait AudioSink {
    fn notify(&mut self, event: AudioEvent);
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// Rings the terminal bell for the events that had a cue on the hand-held.
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioSink for TerminalBell {
    fn notify(&mut self, event: AudioEvent) {
        trace!(?event, enabled = self.enabled, "audio event");
        if !self.enabled {
            return;
        }
        let bells = match event {
            AudioEvent::GameWon => 2,
            AudioEvent::SoundToggled => 0,
            _ => 1,
        };
        let mut out = io::stdout();
        for _ in 0..bells {
            // Ignore write errors; sound is best effort.
            let _ = out.write_all(b"\x07");
        }
        let _ = out.flush();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
