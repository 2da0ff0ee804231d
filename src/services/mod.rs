//! Game services
//!
//! Scoring rules plus the collaborators around the engine: dice
//! generation, audio, high score storage and the console session.

pub mod audio;
pub mod dice;
pub mod game;
pub mod scoring;
pub mod storage;
