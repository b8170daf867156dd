//! Game orchestration between two injected players on an injected board.

use super::{Board, GameError, Outcome, Player};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Rejections tolerated per turn under the default policy.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// What the loop does when the board rejects a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMovePolicy {
    /// Report the rejection to the same player and ask again, up to
    /// `max_attempts` consecutive rejections.
    Reprompt {
        /// Consecutive rejections after which the loop gives up.
        max_attempts: u32,
    },
    /// Fail on the first rejection.
    Abort,
}

impl InvalidMovePolicy {
    /// Returns true if a player with `attempts` consecutive rejections
    /// may try again.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        match self {
            InvalidMovePolicy::Reprompt { max_attempts } => attempts < *max_attempts,
            InvalidMovePolicy::Abort => false,
        }
    }
}

impl Default for InvalidMovePolicy {
    fn default() -> Self {
        InvalidMovePolicy::Reprompt {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Where the loop is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<M, Mv> {
    /// Waiting for the player holding this mark to choose a move.
    AwaitingMove(M),
    /// A move was obtained and is about to be applied.
    Applying {
        /// Mark being placed.
        mark: M,
        /// Move being applied.
        mv: Mv,
    },
    /// The move by this mark was applied; the outcome is next.
    Evaluating(M),
    /// The game is over.
    Finished(Outcome<M>),
}

/// An applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord<M, Mv> {
    /// Who moved.
    pub mark: M,
    /// Where.
    pub mv: Mv,
}

/// Messages sent from orchestrator to an observer (usually a UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent<M, Mv> {
    /// A player was asked for a move.
    TurnStarted {
        /// Name of the player to move.
        player: String,
        /// Mark that player places.
        mark: M,
    },
    /// Move was applied.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: M,
        /// The applied move.
        mv: Mv,
    },
    /// Board refused the move.
    MoveRejected {
        /// Name of the player whose move was refused.
        player: String,
        /// Mark that player holds.
        mark: M,
        /// The refused move.
        mv: Mv,
        /// Board's reason, as text.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Terminal outcome.
        outcome: Outcome<M>,
        /// Winning player's name; `None` on a draw.
        winner: Option<String>,
    },
}

/// A player capability bound to the mark it plays.
pub struct Seat<B: Board> {
    mark: B::Mark,
    player: Box<dyn Player<B>>,
}

impl<B: Board> Seat<B> {
    /// Seats `player` with `mark`.
    pub fn new(mark: B::Mark, player: impl Player<B> + 'static) -> Self {
        Self::boxed(mark, Box::new(player))
    }

    /// Seats an already boxed player.
    pub fn boxed(mark: B::Mark, player: Box<dyn Player<B>>) -> Self {
        Self { mark, player }
    }

    /// Returns the seated player's name.
    pub fn name(&self) -> &str {
        self.player.name()
    }
}

impl<B: Board> std::fmt::Debug for Seat<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat")
            .field("mark", &self.mark)
            .field("player", &self.player.name())
            .finish()
    }
}

/// Drives two seats on a board until the board reports a terminal outcome.
///
/// The orchestrator owns the state and is the only thing that replaces it.
/// Players see it by shared reference while choosing.
pub struct Orchestrator<B: Board> {
    board: B,
    state: B::State,
    seats: [Seat<B>; 2],
    turn: usize,
    phase: Phase<B::Mark, B::Move>,
    policy: InvalidMovePolicy,
    rejections: u32,
    history: Vec<MoveRecord<B::Mark, B::Move>>,
    events: Option<mpsc::UnboundedSender<GameEvent<B::Mark, B::Move>>>,
}

impl<B: Board> Orchestrator<B> {
    /// Creates an orchestrator. `first` moves first.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(board: B, first: Seat<B>, second: Seat<B>) -> Result<Self, GameError<B::Error>> {
        if first.mark == second.mark {
            return Err(GameError::DuplicateMark(first.mark.to_string()));
        }

        let state = board.initial_state();
        let mut game = Self {
            phase: Phase::AwaitingMove(first.mark),
            board,
            state,
            seats: [first, second],
            turn: 0,
            policy: InvalidMovePolicy::default(),
            rejections: 0,
            history: Vec::new(),
            events: None,
        };
        game.phase = game.opening_phase();
        info!("Orchestrator ready");
        Ok(game)
    }

    /// Sets the invalid-move policy.
    pub fn with_policy(mut self, policy: InvalidMovePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sends game events to `tx`.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<GameEvent<B::Mark, B::Move>>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Returns the current state.
    pub fn state(&self) -> &B::State {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase<B::Mark, B::Move> {
        self.phase
    }

    /// Returns the invalid-move policy.
    pub fn policy(&self) -> InvalidMovePolicy {
        self.policy
    }

    /// Returns the applied moves in order.
    pub fn history(&self) -> &[MoveRecord<B::Mark, B::Move>] {
        &self.history
    }

    /// Returns the name of the player seated with `mark`.
    pub fn seat_name(&self, mark: B::Mark) -> Option<&str> {
        self.seats
            .iter()
            .find(|seat| seat.mark == mark)
            .map(|seat| seat.name())
    }

    /// Returns the mark whose turn it is, or `None` once finished.
    pub fn to_move(&self) -> Option<B::Mark> {
        match self.phase {
            Phase::Finished(_) => None,
            _ => Some(self.seats[self.turn].mark),
        }
    }

    /// Runs the game loop until the board reports a terminal outcome.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome<B::Mark>, GameError<B::Error>> {
        info!("Starting game orchestration");

        loop {
            if let Phase::Finished(outcome) = self.step().await? {
                return Ok(outcome);
            }
        }
    }

    /// Performs one state machine transition and returns the new phase.
    ///
    /// Stepping a finished game is a no-op and never consults a player.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub async fn step(&mut self) -> Result<Phase<B::Mark, B::Move>, GameError<B::Error>> {
        let next = match self.phase {
            Phase::AwaitingMove(mark) => {
                let player = self.seats[self.turn].name().to_string();
                debug!(%player, %mark, "Waiting for move");
                self.emit(GameEvent::TurnStarted { player, mark });

                let seat = &mut self.seats[self.turn];
                let mv = seat.player.choose_move(&self.state, mark).await?;
                Phase::Applying { mark, mv }
            }
            Phase::Applying { mark, mv } => self.apply(mark, mv)?,
            Phase::Evaluating(mark) => self.evaluate(mark),
            Phase::Finished(outcome) => Phase::Finished(outcome),
        };

        self.phase = next;
        Ok(next)
    }

    /// Discards the current game and starts over from the initial state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = self.board.initial_state();
        self.history.clear();
        self.turn = 0;
        self.rejections = 0;
        self.phase = self.opening_phase();
    }

    fn opening_phase(&self) -> Phase<B::Mark, B::Move> {
        match self.board.outcome(&self.state) {
            Outcome::InProgress => Phase::AwaitingMove(self.seats[self.turn].mark),
            outcome => Phase::Finished(outcome),
        }
    }

    fn apply(
        &mut self,
        mark: B::Mark,
        mv: B::Move,
    ) -> Result<Phase<B::Mark, B::Move>, GameError<B::Error>> {
        let turn = self.turn;
        let player = self.seats[turn].name().to_string();

        match self.board.apply(&self.state, mv, mark) {
            Ok(state) => {
                self.state = state;
                self.history.push(MoveRecord { mark, mv });
                self.rejections = 0;
                debug!(%player, %mark, %mv, "Move applied");
                self.emit(GameEvent::MoveMade { player, mark, mv });
                Ok(Phase::Evaluating(mark))
            }
            Err(reason) => {
                self.rejections += 1;
                let attempts = self.rejections;
                warn!(%player, %mv, %reason, attempts, "Move rejected");

                self.seats[turn].player.move_rejected(mv, &reason);
                self.emit(GameEvent::MoveRejected {
                    player: player.clone(),
                    mark,
                    mv,
                    reason: reason.to_string(),
                });

                if self.policy.allows_retry(attempts) {
                    return Ok(Phase::AwaitingMove(mark));
                }

                // The turn stays with the same player if the caller keeps stepping.
                self.rejections = 0;
                self.phase = Phase::AwaitingMove(mark);
                Err(GameError::Rejected {
                    player,
                    mv: mv.to_string(),
                    attempts,
                    source: reason,
                })
            }
        }
    }

    fn evaluate(&mut self, mark: B::Mark) -> Phase<B::Mark, B::Move> {
        let outcome = self.board.outcome(&self.state);
        if !outcome.is_terminal() {
            self.turn = 1 - self.turn;
            debug!(previous = %mark, next = %self.seats[self.turn].mark, "Turn passes");
            return Phase::AwaitingMove(self.seats[self.turn].mark);
        }

        let winner = outcome
            .winner()
            .and_then(|mark| self.seat_name(mark))
            .map(str::to_string);
        info!(%outcome, winner = ?winner, moves = self.history.len(), "Game finished");
        self.emit(GameEvent::GameOver { outcome, winner });
        Phase::Finished(outcome)
    }

    fn emit(&mut self, event: GameEvent<B::Mark, B::Move>) {
        if let Some(tx) = &self.events
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped, no longer sending events");
            self.events = None;
        }
    }
}
