//! Optional TOML configuration for the `tictactoe` binary.
//!
//! ```toml
//! variant = "alphabeta"   # or "plain"; omit to choose from the menu
//! show_stats = true
//! log_filter = "info"
//! match_games = 100
//! results_path = "match.json"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use minimax_engine::SearchVariant;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Search used by the AI; `None` shows the menu
    pub variant: Option<SearchVariant>,
    /// Print node counts after each AI move
    pub show_stats: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Games per `match` run
    pub match_games: u32,
    /// Where `match` writes its JSON report
    pub results_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            variant: None,
            show_stats: false,
            log_filter: "warn".to_string(),
            match_games: 10,
            results_path: None,
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Loads `path`, or the defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}
