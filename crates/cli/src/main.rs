//! Tic-tac-toe CLI
//!
//! Play against the perfect-play engine, or pit engines against each other.

mod config;
mod play;

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use minimax_engine::{MinimaxEngine, SearchVariant};
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;
use ttt_core::Engine;

use config::{CliConfig, DEFAULT_CONFIG_PATH};
use play::Session;

fn print_usage() {
    println!("Tic-tac-toe with exhaustive minimax");
    println!();
    println!("Usage:");
    println!("  tictactoe [--config FILE] play [--variant V] [--stats]");
    println!("  tictactoe [--config FILE] match <engine1> <engine2> [--games N] [--out FILE]");
    println!("  tictactoe help");
    println!();
    println!("Variants / engines:");
    println!("  plain         - Exhaustive minimax");
    println!("  alphabeta     - Minimax with alpha-beta pruning");
    println!("  random[:SEED] - Uniformly random moves (match only)");
    println!();
    println!("Examples:");
    println!("  tictactoe play --variant alphabeta --stats");
    println!("  tictactoe match alphabeta random:7 --games 100 --out match.json");
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "random" | "rand" => match parts.get(1) {
            Some(seed) => {
                let seed = seed
                    .parse()
                    .with_context(|| format!("invalid random seed: {}", seed))?;
                Ok(Box::new(RandomEngine::seeded(seed)))
            }
            None => Ok(Box::new(RandomEngine::new())),
        },
        other => match SearchVariant::parse(other) {
            Some(variant) => Ok(Box::new(MinimaxEngine::new(variant))),
            None => bail!("unknown engine: {}", spec),
        },
    }
}

fn parse_variant(value: Option<&String>) -> Result<SearchVariant> {
    let Some(value) = value else {
        bail!("--variant requires a value");
    };
    SearchVariant::parse(value).with_context(|| format!("unknown variant: {}", value))
}

fn run_play(args: &[String], config: &CliConfig) -> Result<()> {
    let mut variant = config.variant;
    let mut show_stats = config.show_stats;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" | "-v" => {
                variant = Some(parse_variant(args.get(i + 1))?);
                i += 1;
            }
            "--stats" | "-s" => show_stats = true,
            other => bail!("unknown play option: {}", other),
        }
        i += 1;
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), show_stats);
    session.run(variant)
}

fn run_match(args: &[String], config: &CliConfig) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut num_games = config.match_games;
    let mut out: Option<PathBuf> = config.results_path.clone();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                let value = args.get(i + 1).context("--games requires a value")?;
                num_games = value
                    .parse()
                    .with_context(|| format!("invalid game count: {}", value))?;
                i += 1;
            }
            "--out" | "-o" => {
                let value = args.get(i + 1).context("--out requires a path")?;
                out = Some(PathBuf::from(value));
                i += 1;
            }
            other => bail!("unknown match option: {}", other),
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}", num_games);
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(MatchConfig {
        num_games,
        verbose: true,
        ..Default::default()
    });
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    report.print_report();

    if let Some(path) = out {
        report
            .save(&path)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if args.first().map(String::as_str) == Some("--config") {
        let Some(path) = args.get(1) else {
            bail!("--config requires a path");
        };
        config_path = PathBuf::from(path);
        args.drain(..2);
    }

    let config = CliConfig::load(&config_path)?;
    init_tracing(&config.log_filter);

    match args.first().map(String::as_str) {
        None | Some("play") => run_play(args.get(1..).unwrap_or(&[]), &config),
        Some("match") => run_match(&args[1..], &config),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}
