use clap::Parser;

/// Session and frontend settings, fixed for the lifetime of the window
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "duel_of_life", about = "Two-player Conway's Game of Life")]
pub struct Config {
    /// Board width in cells
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 50)]
    pub height: usize,

    /// Seeds each player may place during setup
    #[arg(long, default_value_t = 20)]
    pub seeds: u32,

    /// Seconds between generations while running
    #[arg(long, default_value_t = 0.15)]
    pub interval: f32,

    /// Cell size in pixels at zoom 1.0
    #[arg(long, default_value_t = 8.0)]
    pub cell_size: f32,

    /// Duration of the birth/death color fade in seconds
    #[arg(long, default_value_t = 0.12)]
    pub anim: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["duel_of_life"])
    }
}
