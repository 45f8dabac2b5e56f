//! Interactive human-vs-engine session over any line-based reader/writer.
//!
//! The human plays X and always moves first; the engine plays O.

use std::io::{BufRead, Write};

use anyhow::Result;
use minimax_engine::{search_root, SearchStats, SearchVariant};
use thiserror::Error;
use tracing::{debug, info};
use ttt_core::{
    coords_to_move, is_game_over, is_move_legal, is_winner, parse_coords, Board, Move, Player,
};

/// Why a line of human input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input!")]
    Malformed,
    #[error("Invalid move! Try again.")]
    OutOfRange,
    #[error("Invalid move! Try again.")]
    Occupied,
}

/// Validates a human move against the board.
pub fn parse_human_move(board: &Board, line: &str) -> Result<Move, InputError> {
    let (row, col) = parse_coords(line).ok_or(InputError::Malformed)?;
    let mv = coords_to_move(row, col).ok_or(InputError::OutOfRange)?;
    if !is_move_legal(board, mv.row, mv.col) {
        return Err(InputError::Occupied);
    }
    Ok(mv)
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Won(Player),
    Tie,
    /// Input ran out mid-game
    Abandoned,
}

enum MenuChoice {
    Play(SearchVariant),
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    show_stats: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, show_stats: bool) -> Self {
        Self {
            input,
            output,
            show_stats,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session. With a fixed variant a single game is played;
    /// otherwise the menu repeats until the player exits.
    pub fn run(&mut self, variant: Option<SearchVariant>) -> Result<()> {
        if let Some(variant) = variant {
            self.play_game(variant)?;
            return Ok(());
        }

        loop {
            match self.choose_variant()? {
                Some(MenuChoice::Play(variant)) => {
                    if self.play_game(variant)? == GameEnd::Abandoned {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Exit) | None => return Ok(()),
            }
        }
    }

    /// Reads one trimmed line, `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose_variant(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            writeln!(self.output, "Choose Opponent(AI) Version:")?;
            writeln!(self.output, "1. Simple Minimax")?;
            writeln!(self.output, "2. Optimized Minimax (Alpha-Beta Pruning)")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.read_line("Enter your choice: ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(MenuChoice::Play(SearchVariant::Plain))),
                "2" => return Ok(Some(MenuChoice::Play(SearchVariant::AlphaBeta))),
                "3" => return Ok(Some(MenuChoice::Exit)),
                _ => writeln!(self.output, "Invalid choice. Please select 1, 2, or 3.")?,
            }
        }
    }

    /// Plays one game, human as X against the engine as O.
    pub fn play_game(&mut self, variant: SearchVariant) -> Result<GameEnd> {
        let mut board = Board::new();
        let mut current = Player::X;
        write!(self.output, "{}", board)?;
        info!(variant = variant.name(), "new game");

        while !is_game_over(&board) {
            let mv = if current == Player::X {
                let Some(line) = self.read_line("Enter Your Move (row col): ")? else {
                    return Ok(GameEnd::Abandoned);
                };
                match parse_human_move(&board, &line) {
                    Ok(mv) => mv,
                    Err(err) => {
                        debug!(%line, ?err, "rejected input");
                        writeln!(self.output, "{}", err)?;
                        continue;
                    }
                }
            } else {
                let mut stats = SearchStats::new();
                let best = search_root(&board, Player::O, variant, &mut stats)?;
                writeln!(self.output, "AI's Move {},{}", best.mv.row, best.mv.col)?;
                if self.show_stats {
                    writeln!(
                        self.output,
                        "Searched {} nodes (max depth {}), score {}",
                        stats.nodes, stats.max_depth, best.score
                    )?;
                }
                best.mv
            };

            board.apply_move(mv.row, mv.col, current);
            write!(self.output, "{}", board)?;
            if is_winner(&board, current) {
                writeln!(self.output, "Player {} Wins!", current)?;
                info!(winner = %current, "game over");
                return Ok(GameEnd::Won(current));
            }
            current = current.other();
        }

        writeln!(self.output, "It's a tie!")?;
        info!("game drawn");
        Ok(GameEnd::Tie)
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
