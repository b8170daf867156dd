//! Concrete player capabilities.
//!
//! Each type here implements [`inverted_core::Player`]. The orchestrator
//! only ever sees them as `Box<dyn Player<_>>`.

mod console;
mod scripted;
mod simple_ai;

pub use console::{ConsolePlayer, parse_move};
pub use scripted::ScriptedPlayer;
pub use simple_ai::SimpleAI;
