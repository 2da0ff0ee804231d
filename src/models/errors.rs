use thiserror::Error;

/// Errors raised at the boundary of the engine.
///
/// The state machine itself never fails; these cover malformed caller input
/// and the persistence/terminal collaborators.
#[derive(Debug, Error)]
pub enum GameError {
    /// A die face outside 1..=6
    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),
    /// A hand that does not contain exactly five dice
    #[error("a hand needs exactly {expected} dice, got {actual}")]
    WrongHandSize { expected: usize, actual: usize },
    /// A hold position outside 0..5
    #[error("hold index {0} is outside 0..5")]
    InvalidHoldIndex(usize),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The key/value store contents could not be read or written
    #[error("store format error: {0}")]
    StoreFormat(#[from] serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
