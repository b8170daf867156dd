//! End-to-end games through the generic orchestrator.

use inverted_core::{
    GameError, InvalidMovePolicy, Orchestrator, Outcome, Phase, Player, PlayerError, Seat,
};
use inverted_games::{ConsolePlayer, GameSummary, ScriptedPlayer, SimpleAI, scripted_game};
use inverted_tictactoe::{Coord, Grid, InvalidMove, Mark, Position, TicTacToe};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted player that counts how often it is asked for a move.
struct Counting {
    inner: ScriptedPlayer<Coord>,
    calls: Arc<AtomicUsize>,
}

impl Counting {
    fn new(name: &str, script: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let player = Self {
            inner: ScriptedPlayer::parse(name, script).unwrap(),
            calls: Arc::clone(&calls),
        };
        (player, calls)
    }
}

#[async_trait::async_trait]
impl Player<TicTacToe> for Counting {
    async fn choose_move(&mut self, grid: &Grid, mark: Mark) -> Result<Coord, PlayerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Player::<TicTacToe>::choose_move(&mut self.inner, grid, mark).await
    }

    fn name(&self) -> &str {
        Player::<TicTacToe>::name(&self.inner)
    }
}

fn alternates(game: &Orchestrator<TicTacToe>) -> bool {
    game.history()
        .windows(2)
        .all(|pair| pair[0].mark != pair[1].mark)
}

#[tokio::test]
async fn test_top_row_win_stops_after_fifth_move() {
    // A keeps a spare move that must never be requested.
    let (a, a_calls) = Counting::new("A", "0,0 0,1 0,2 2,0");
    let (b, b_calls) = Counting::new("B", "1,1 2,2 2,1");
    let mut game =
        Orchestrator::new(TicTacToe::new(), Seat::new(Mark::X, a), Seat::new(Mark::O, b)).unwrap();

    let outcome = game.run().await.unwrap();

    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert_eq!(game.history().len(), 5);
    assert_eq!(a_calls.load(Ordering::SeqCst), 3);
    assert_eq!(b_calls.load(Ordering::SeqCst), 2);
    assert_eq!(game.seat_name(Mark::X), Some("A"));

    // Stepping a finished game asks nobody for a move.
    assert_eq!(game.step().await.unwrap(), Phase::Finished(Outcome::Won(Mark::X)));
    assert_eq!(a_calls.load(Ordering::SeqCst), 3);
    assert_eq!(b_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_full_board_without_line_is_draw() {
    let x = ScriptedPlayer::parse("A", "0,0 0,2 1,0 2,1 2,2").unwrap();
    let o = ScriptedPlayer::parse("B", "1,1 0,1 1,2 2,0").unwrap();
    let mut game = scripted_game(x, o).unwrap();

    let outcome = game.run().await.unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(game.history().len(), 9);
    assert!(game.state().empty_positions().is_empty());

    let summary = GameSummary::new(&game, outcome);
    assert_eq!(summary.winner, None);
    assert_eq!(summary.outcome, "Draw");
}

#[tokio::test]
async fn test_turns_alternate_strictly() {
    let x = ScriptedPlayer::parse("A", "0,0 0,2 1,0 2,1 2,2").unwrap();
    let o = ScriptedPlayer::parse("B", "1,1 0,1 1,2 2,0").unwrap();
    let mut game = scripted_game(x, o).unwrap();

    game.run().await.unwrap();

    assert_eq!(game.history()[0].mark, Mark::X);
    assert!(alternates(&game));
}

#[tokio::test]
async fn test_rejected_move_reprompts_same_player() {
    let x = ScriptedPlayer::parse("A", "0,0 0,1 0,2").unwrap();
    // B first tries A's square, then a square off the board.
    let o = ScriptedPlayer::parse("B", "0,0 3,3 1,1 2,2").unwrap();
    let mut game = scripted_game(x, o).unwrap();

    let outcome = game.run().await.unwrap();

    assert_eq!(outcome, Outcome::Won(Mark::X));
    assert_eq!(game.history().len(), 5);
    assert!(alternates(&game));
}

#[tokio::test]
async fn test_abort_policy_surfaces_invalid_move() {
    let x = ScriptedPlayer::parse("A", "0,0 0,1").unwrap();
    let o = ScriptedPlayer::parse("B", "0,0").unwrap();
    let mut game = scripted_game(x, o)
        .unwrap()
        .with_policy(InvalidMovePolicy::Abort);

    let err = game.run().await.unwrap_err();

    match err {
        GameError::Rejected { player, source, .. } => {
            assert_eq!(player, "B");
            assert_eq!(source, InvalidMove::Occupied(Position::TopLeft));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(game.history().len(), 1);
}

#[tokio::test]
async fn test_out_of_range_surfaces_invalid_move() {
    let x = ScriptedPlayer::parse("A", "5,0").unwrap();
    let o = ScriptedPlayer::parse("B", "").unwrap();
    let mut game = scripted_game(x, o)
        .unwrap()
        .with_policy(InvalidMovePolicy::Abort);

    let err = game.run().await.unwrap_err();

    assert!(matches!(
        err,
        GameError::Rejected { source: InvalidMove::OutOfRange(_), .. }
    ));
}

#[tokio::test]
async fn test_ai_against_ai_finishes() {
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        Seat::new(Mark::X, SimpleAI::new("Left")),
        Seat::new(Mark::O, SimpleAI::new("Right")),
    )
    .unwrap();

    let outcome = game.run().await.unwrap();

    assert!(outcome.is_terminal());
    assert!(game.history().len() <= 9);
    assert!(alternates(&game));
}

#[tokio::test]
async fn test_console_player_drives_a_game() {
    let human = ConsolePlayer::new("Human", b"center\n3\n7\n".as_slice(), tokio::io::sink());
    let o = ScriptedPlayer::parse("Script", "0,0 0,1").unwrap();
    let mut game = Orchestrator::new(
        TicTacToe::new(),
        Seat::new(Mark::X, human),
        Seat::new(Mark::O, o),
    )
    .unwrap();

    let outcome = game.run().await.unwrap();

    assert_eq!(outcome, Outcome::Won(Mark::X));
    let summary = GameSummary::new(&game, outcome);
    assert_eq!(summary.winner.as_deref(), Some("Human"));
}

#[tokio::test]
async fn test_summary_serializes_moves() {
    let x = ScriptedPlayer::parse("A", "0,0 0,1 0,2").unwrap();
    let o = ScriptedPlayer::parse("B", "1,1 2,2").unwrap();
    let mut game = scripted_game(x, o).unwrap();
    let outcome = game.run().await.unwrap();

    let json = serde_json::to_value(GameSummary::new(&game, outcome)).unwrap();

    assert_eq!(json["outcome"], "X wins");
    assert_eq!(json["winner"], "A");
    assert_eq!(json["moves"].as_array().unwrap().len(), 5);
    assert_eq!(json["moves"][1]["mark"], "O");
    assert_eq!(json["moves"][1]["mv"]["row"], 1);
}
