// Domain layer - Board, step rule, seeds, phases, scoring
pub mod domain;

// Application layer - Session and the drivers around it
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, GameError, Grid, Pattern, Phase, Player, Winner, presets};
pub use application::{AutoRun, Camera, Config, PlayerState, Session};
