//! Human player reading moves from a text stream.

use inverted_core::{Player, PlayerError};
use inverted_tictactoe::{Coord, Grid, InvalidMove, Mark, Position, TicTacToe};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, info, instrument};

/// Parses `row,col`, a keypad number (1-9) or a position label.
pub fn parse_move(text: &str) -> Option<Coord> {
    text.parse::<Coord>()
        .ok()
        .or_else(|| Position::from_label_or_number(text).map(Position::coord))
}

/// Human player using line-based text input.
///
/// Unreadable input is re-prompted here. Moves the board rejects are
/// reported before the next prompt.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
    notice: Option<String>,
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsolePlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a human player on the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        let name = name.into();
        info!(name = %name, "Creating console player");
        Self {
            name,
            input,
            output,
            notice: None,
        }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    async fn write(&mut self, text: &str) -> Result<(), PlayerError> {
        self.output
            .write_all(text.as_bytes())
            .await
            .map_err(|e| PlayerError::new(format!("Failed to write prompt: {}", e)))?;
        self.output
            .flush()
            .await
            .map_err(|e| PlayerError::new(format!("Failed to flush prompt: {}", e)))
    }

    async fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .map_err(|e| PlayerError::new(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(PlayerError::new("Input closed"));
        }
        Ok(line)
    }
}

#[async_trait::async_trait]
impl<R, W> Player<TicTacToe> for ConsolePlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self, grid), fields(player = %self.name))]
    async fn choose_move(&mut self, grid: &Grid, mark: Mark) -> Result<Coord, PlayerError> {
        if let Some(notice) = self.notice.take() {
            self.write(&format!("{}\n", notice)).await?;
        }

        let prompt = format!(
            "\n{}\n\n{} ({}) to move. Enter 1-9, row,col or a position name: ",
            grid.display(),
            self.name,
            mark
        );
        self.write(&prompt).await?;

        loop {
            let line = self.read_line().await?;
            match parse_move(&line) {
                Some(coord) => {
                    debug!(%coord, "Read move");
                    return Ok(coord);
                }
                None => {
                    debug!(input = %line.trim(), "Unreadable move");
                    let retry = format!("Could not read {:?}. Try again: ", line.trim());
                    self.write(&retry).await?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn move_rejected(&mut self, mv: Coord, reason: &InvalidMove) {
        self.notice = Some(format!("{} is not allowed: {}", mv, reason));
    }
}
