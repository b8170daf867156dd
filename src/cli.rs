//! Command-line interface for inverted_games.

use clap::{Parser, Subcommand};
use inverted_games::PlayerKind;

/// Inverted Games - tic-tac-toe with injected board and players
#[derive(Parser, Debug)]
#[command(name = "inverted_games")]
#[command(about = "Turn-based games driven through injected capabilities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who plays X (moves first)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Who plays O
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Display name for X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O
        #[arg(long)]
        o_name: Option<String>,

        /// End the game on the first rejected move instead of asking again
        #[arg(long)]
        abort_on_invalid: bool,

        /// Rejected moves tolerated per turn before giving up
        #[arg(long)]
        max_attempts: Option<u32>,
    },

    /// Play a game between two scripted move lists
    Script {
        /// Moves for X, e.g. "0,0 0,1 0,2"
        #[arg(long)]
        x: String,

        /// Moves for O, e.g. "1,1 2,2"
        #[arg(long)]
        o: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
