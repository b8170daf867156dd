//! Capability contracts shared by the turn loop and concrete games.
//!
//! The loop depends on these traits only. Boards and players depend on
//! them too, never on the loop or on each other.

use super::{Outcome, PlayerError};
use std::fmt::{Debug, Display};

/// Board capability: the rules of a game.
///
/// A board does not hold the game state itself. It creates it, derives new
/// states from old ones, and judges them. Implementations must be
/// deterministic: the same state and move always give the same result.
pub trait Board: Send + Sync + 'static {
    /// Grid occupancy, opaque to the loop.
    type State: Clone + Debug + Send + Sync + 'static;
    /// Where a player intends to place a mark.
    type Move: Copy + Debug + Display + Send + Sync + 'static;
    /// Player identity token.
    type Mark: Copy + Eq + Debug + Display + Send + Sync + 'static;
    /// Rejection raised for an illegal move.
    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Returns the state a fresh game starts from.
    fn initial_state(&self) -> Self::State;

    /// Applies `mv` for `mark`, returning the resulting state.
    ///
    /// The input state is left untouched. Illegal moves fail with
    /// [`Board::Error`].
    fn apply(
        &self,
        state: &Self::State,
        mv: Self::Move,
        mark: Self::Mark,
    ) -> Result<Self::State, Self::Error>;

    /// Reports whether the game in `state` is over and who won.
    fn outcome(&self, state: &Self::State) -> Outcome<Self::Mark>;
}

/// Player capability: produces moves.
///
/// The loop cannot tell a human adapter from a script or an AI.
#[async_trait::async_trait]
pub trait Player<B: Board>: Send {
    /// Chooses the next move for `mark` given the current state.
    async fn choose_move(
        &mut self,
        state: &B::State,
        mark: B::Mark,
    ) -> Result<B::Move, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Called when the board rejected the last move from this player.
    fn move_rejected(&mut self, _mv: B::Move, _reason: &B::Error) {}
}
