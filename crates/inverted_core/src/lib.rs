//! Inverted Core - capabilities and the generic turn loop
//!
//! The orchestrator in this crate drives a two-player, turn-based game
//! without knowing which game it is or who is playing. It sees only the
//! capability traits:
//!
//! - **[`Board`]**: creates the initial state, applies a move, reports the outcome
//! - **[`Player`]**: chooses a move for a given state and mark
//!
//! Concrete boards and players live in other crates and are handed to the
//! [`Orchestrator`] at construction time.
//!
//! # Example
//!
//! ```ignore
//! use inverted_core::{Orchestrator, Seat};
//!
//! let mut game = Orchestrator::new(board, Seat::new(x, alice), Seat::new(o, bob))?;
//! let outcome = game.run().await?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capability;
mod error;
mod orchestrator;
mod outcome;

pub use capability::{Board, Player};
pub use error::{GameError, PlayerError};
pub use orchestrator::{
    DEFAULT_MAX_ATTEMPTS, GameEvent, InvalidMovePolicy, MoveRecord, Orchestrator, Phase, Seat,
};
pub use outcome::Outcome;

/// Event type emitted by the orchestrator driving board `B`.
pub type EventOf<B> = GameEvent<<B as Board>::Mark, <B as Board>::Move>;
