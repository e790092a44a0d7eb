use thiserror::Error;

use super::Phase;

/// Every way a command against the board can be refused.
/// A refused command never changes grid, seeds, scores or phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("cell ({x}, {y}) is not owned by the active player")]
    NotOwnedByActivePlayer { x: usize, y: usize },

    #[error("no seeds remaining")]
    NoSeedsRemaining,

    #[error("pattern needs {needed} seeds but only {remaining} remain")]
    NotEnoughSeeds { needed: u32, remaining: u32 },

    #[error("operation not allowed during {phase:?}")]
    InvalidPhaseForOperation { phase: Phase },
}
