use thiserror::Error;

/// Failures of the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The board is already won or full, so there is nothing to choose.
    #[error("no legal move: the game is already over")]
    NoLegalMove,
}
