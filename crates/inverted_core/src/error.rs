//! Error types for the turn loop.

use derive_more::{Display, Error};
use tracing::instrument;

/// A player failed to produce a move.
#[derive(Debug, Clone, Display, Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error surfaced by the orchestrator to its caller.
///
/// `E` is the board's rejection type.
#[derive(Debug, Clone)]
pub enum GameError<E> {
    /// The board rejected a move and the invalid-move policy gave up.
    Rejected {
        /// Name of the player whose move was rejected.
        player: String,
        /// The rejected move, rendered.
        mv: String,
        /// Consecutive rejections this turn.
        attempts: u32,
        /// Why the board rejected it.
        source: E,
    },
    /// A player could not produce a move.
    Player(PlayerError),
    /// Both seats were given the same mark.
    DuplicateMark(String),
}

impl<E> From<PlayerError> for GameError<E> {
    fn from(err: PlayerError) -> Self {
        GameError::Player(err)
    }
}

impl<E: std::fmt::Display> std::fmt::Display for GameError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Rejected {
                player,
                mv,
                attempts,
                source,
            } => write!(
                f,
                "Move {} by {} rejected after {} attempt(s): {}",
                mv, player, attempts, source
            ),
            GameError::Player(err) => write!(f, "{}", err),
            GameError::DuplicateMark(mark) => {
                write!(f, "Both seats play the same mark {}", mark)
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GameError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Rejected { source, .. } => Some(source),
            GameError::Player(err) => Some(err),
            GameError::DuplicateMark(_) => None,
        }
    }
}
