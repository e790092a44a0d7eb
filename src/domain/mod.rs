mod cell;
mod error;
mod grid;
mod patterns;
mod phase;
mod score;
mod seeds;
pub mod step;

pub use cell::{CellState, NeighborCounts, Player};
pub use error::GameError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use phase::{Phase, PhaseMachine};
pub use score::{ScoreLedger, Winner};
pub use seeds::SeedController;
pub use step::{ChangedCell, StepReport};
