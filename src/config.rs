//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use inverted_core::{DEFAULT_MAX_ATTEMPTS, InvalidMovePolicy};
use inverted_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Kind of player occupying a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// The built-in heuristic player.
    Ai,
}

/// Configuration for one seat.
///
/// Absent fields fall back to the defaults of the seat's mark, whether or
/// not the seat's table is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name; derived from kind and mark when absent.
    #[serde(default)]
    name: Option<String>,

    /// Who plays this seat; X defaults to a human, O to the AI.
    #[serde(default)]
    kind: Option<PlayerKind>,
}

/// Kind of player a seat gets when the config does not say.
fn default_kind(mark: Mark) -> PlayerKind {
    match mark {
        Mark::X => PlayerKind::Human,
        Mark::O => PlayerKind::Ai,
    }
}

/// How the loop treats a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidMoveSetting {
    /// Ask the same player again.
    #[default]
    Reprompt,
    /// End the game with an error.
    Abort,
}

/// Rule settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Reaction to a rejected move.
    #[serde(default)]
    invalid_move: InvalidMoveSetting,

    /// Consecutive rejections tolerated when re-prompting.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

#[instrument]
fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl RulesConfig {
    /// Converts the settings into the orchestrator policy.
    pub fn policy(&self) -> InvalidMovePolicy {
        match self.invalid_move {
            InvalidMoveSetting::Reprompt => InvalidMovePolicy::Reprompt {
                max_attempts: self.max_attempts,
            },
            InvalidMoveSetting::Abort => InvalidMovePolicy::Abort,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            invalid_move: InvalidMoveSetting::default(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seat for X, who moves first.
    player_x: SeatConfig,

    /// Seat for O.
    player_o: SeatConfig,

    /// Rule settings.
    rules: RulesConfig,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            x = %config.display_name(Mark::X),
            o = %config.display_name(Mark::O),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns who plays `mark`.
    pub fn kind(&self, mark: Mark) -> PlayerKind {
        self.seat(mark).kind.unwrap_or_else(|| default_kind(mark))
    }

    /// Returns the configured name for `mark`, or one derived from its kind.
    pub fn display_name(&self, mark: Mark) -> String {
        match &self.seat(mark).name {
            Some(name) => name.clone(),
            None => match self.kind(mark) {
                PlayerKind::Human => format!("Player {}", mark),
                PlayerKind::Ai => format!("Computer {}", mark),
            },
        }
    }

    /// Replaces the kind of player for `mark`.
    pub fn set_kind(&mut self, mark: Mark, kind: PlayerKind) {
        self.seat_mut(mark).kind = Some(kind);
    }

    /// Replaces the name of the player for `mark`.
    pub fn set_name(&mut self, mark: Mark, name: impl Into<String>) {
        self.seat_mut(mark).name = Some(name.into());
    }

    /// Replaces the invalid-move setting.
    pub fn set_invalid_move(&mut self, setting: InvalidMoveSetting) {
        self.rules.invalid_move = setting;
    }

    /// Replaces the re-prompt budget.
    pub fn set_max_attempts(&mut self, max_attempts: u32) {
        self.rules.max_attempts = max_attempts;
    }

    fn seat(&self, mark: Mark) -> &SeatConfig {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    fn seat_mut(&mut self, mark: Mark) -> &mut SeatConfig {
        match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
