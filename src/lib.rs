//! Inverted Games - tic-tac-toe wired through injected capabilities
//!
//! The turn loop in `inverted_core` knows nothing about tic-tac-toe or
//! about who is playing. This crate supplies the concrete parts and
//! plugs them in at construction time.
//!
//! # Architecture
//!
//! - **Config**: seats and rules loaded from TOML
//! - **Players**: console human, scripted, and a simple heuristic AI
//! - **Session**: builds the orchestrator and renders its events
//!
//! # Example
//!
//! ```no_run
//! use inverted_games::{ScriptedPlayer, scripted_game};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let x = ScriptedPlayer::parse("A", "0,0 0,1 0,2")?;
//! let o = ScriptedPlayer::parse("B", "1,1 2,2")?;
//! let mut game = scripted_game(x, o)?;
//! let outcome = game.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod players;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, InvalidMoveSetting, PlayerKind, RulesConfig, SeatConfig};

// Crate-level exports - Players
pub use players::{ConsolePlayer, ScriptedPlayer, SimpleAI, parse_move};

// Crate-level exports - Session wiring
pub use session::{GameSummary, build_game, build_player, describe, play, scripted_game};
