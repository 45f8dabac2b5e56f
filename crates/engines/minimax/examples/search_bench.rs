//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine -- [iterations] [layout]
//!
//! Examples:
//!   # Default: 5 iterations over the built-in positions
//!   cargo run --release --example search_bench -p minimax_engine
//!
//!   # Single position, O to move
//!   cargo run --release --example search_bench -p minimax_engine -- 20 "X.. .O. ..X"

use minimax_engine::{minimax, minimax_pruned, SearchStats};
use std::env;
use std::time::{Duration, Instant};
use ttt_core::{Board, INFINITY};

/// Test positions as row layouts; O is to move when X has one more mark.
const TEST_POSITIONS: &[(&str, [&str; 3])] = &[
    ("Empty board", ["...", "...", "..."]),
    ("Corner opening", ["X..", "...", "..."]),
    ("Centre opening", ["...", ".X.", "..."]),
    ("Opposite corners", ["X..", ".O.", "..X"]),
    ("Edge fork setup", [".X.", "X..", "..O"]),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let iterations: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    // If a layout is provided, use single position mode
    if let Some(layout) = args.get(2) {
        let rows: Vec<&str> = layout.split_whitespace().collect();
        if rows.len() != 3 {
            eprintln!("layout must be three rows, e.g. \"X.. .O. ..X\"");
            std::process::exit(2);
        }
        run_position("Custom", Board::from_rows([rows[0], rows[1], rows[2]]), iterations);
    } else {
        println!("=== Minimax Benchmark Suite ===");
        println!("Iterations: {iterations}");
        println!();
        for (name, rows) in TEST_POSITIONS {
            run_position(name, Board::from_rows(*rows), iterations);
        }
    }
}

fn run_position(name: &str, board: Board, iterations: u32) {
    let maximizing = board.side_to_move() == ttt_core::Player::O;

    let (plain_stats, plain_time) = time(iterations, |stats| {
        let mut b = board;
        minimax(&mut b, 0, maximizing, stats)
    });
    let (pruned_stats, pruned_time) = time(iterations, |stats| {
        let mut b = board;
        minimax_pruned(&mut b, 0, maximizing, -INFINITY, INFINITY, stats)
    });

    let ratio = if plain_stats.nodes > 0 {
        pruned_stats.nodes as f64 / plain_stats.nodes as f64 * 100.0
    } else {
        0.0
    };

    println!("{name:.<30}");
    println!("  plain     {:>10} nodes in {plain_time:>10.3?}", plain_stats.nodes);
    println!(
        "  alphabeta {:>10} nodes in {pruned_time:>10.3?} ({ratio:.1}% of plain)",
        pruned_stats.nodes
    );
}

/// Runs `search` `iterations` times, returning the last run's stats and the mean time.
fn time<F>(iterations: u32, mut search: F) -> (SearchStats, Duration)
where
    F: FnMut(&mut SearchStats) -> i32,
{
    let iterations = iterations.max(1);
    let mut stats = SearchStats::new();
    let start = Instant::now();
    for _ in 0..iterations {
        stats = SearchStats::new();
        let _ = search(&mut stats);
    }
    (stats, start.elapsed() / iterations)
}
