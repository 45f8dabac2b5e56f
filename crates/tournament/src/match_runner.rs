//! Match runner for playing games between engines

use tracing::{debug, info, warn};
use ttt_core::{is_move_legal, outcome, Board, Engine, Outcome, Player};

use crate::results::{GameRecord, GameResult, MatchReport};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether engine2 moves first in every other game
    pub alternate_first: bool,
    /// Print one line per game during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_first: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective. The first mover plays X.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::new(engine1.name(), engine2.name());

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let mut game = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                let mut g = self.play_game(engine2, engine1);
                g.result = g.result.flip();
                g
            };
            game.engine1_first = engine1_first;

            debug!(game = game_num + 1, moves = ?game.moves, result = ?game.result, "game finished");

            if self.config.verbose {
                let side = if engine1_first { "X" } else { "O" };
                let outcome = match game.result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                let r = &report.result;
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    r.wins + u32::from(game.result == GameResult::Win),
                    r.losses + u32::from(game.result == GameResult::Loss),
                    r.draws + u32::from(game.result == GameResult::Draw)
                );
            }

            report.add_game(game);
        }

        info!(
            engine1 = %report.engine1,
            engine2 = %report.engine2,
            wins = report.result.wins,
            losses = report.result.losses,
            draws = report.result.draws,
            "match finished"
        );
        report
    }

    /// Play a single game, returns the record from `first`'s perspective
    fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameRecord {
        let mut board = Board::new();
        let mut moves = Vec::with_capacity(9);
        first.new_game();
        second.new_game();

        let mut to_move = Player::X;
        loop {
            if let Some(end) = outcome(&board) {
                let result = match end {
                    Outcome::Win(Player::X) => GameResult::Win,
                    Outcome::Win(Player::O) => GameResult::Loss,
                    Outcome::Draw => GameResult::Draw,
                };
                return GameRecord {
                    engine1_first: true,
                    moves,
                    result,
                    forfeit: None,
                };
            }

            let engine: &mut dyn Engine = if to_move == Player::X {
                &mut *first
            } else {
                &mut *second
            };
            let result = engine.search(&board, to_move);

            let forfeit = match result.best_move {
                Some(mv) if mv.row < 3 && mv.col < 3 && is_move_legal(&board, mv.row, mv.col) => {
                    board.apply_move(mv.row, mv.col, to_move);
                    moves.push((mv.row, mv.col));
                    None
                }
                Some(mv) => Some(format!("{} played illegal move {}", engine.name(), mv)),
                None => Some(format!("{} returned no move", engine.name())),
            };

            if let Some(reason) = forfeit {
                warn!(%reason, "game forfeited");
                let result = if to_move == Player::X {
                    GameResult::Loss
                } else {
                    GameResult::Win
                };
                return GameRecord {
                    engine1_first: true,
                    moves,
                    result,
                    forfeit: Some(reason),
                };
            }

            to_move = to_move.other();
        }
    }
}

/// Quick utility to run a single quiet match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchReport {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
