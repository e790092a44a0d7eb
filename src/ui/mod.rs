mod button;
mod dropdown;

pub use button::{Button, ButtonAction};
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};
use crate::application::Session;
use crate::domain::Pattern;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const STAMP_Y: f32 = 250.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Stamp choices: a single seed followed by every pattern with its cost
pub fn stamp_items(patterns: &[Pattern]) -> Vec<String> {
    std::iter::once("Single seed".to_string())
        .chain(patterns.iter().map(|p| format!("{} ({})", p.name, p.seed_cost())))
        .collect()
}

/// Panel buttons, enabled according to what the current phase allows
pub fn create_buttons(session: &Session) -> Vec<Button> {
    let px = panel_x();
    let phase = session.phase();
    let specs = [
        ("Play/Pause", ButtonAction::PlayPause, phase.is_simulating()),
        ("Step", ButtonAction::Step, phase.is_simulating()),
        ("End Setup", ButtonAction::EndSetup, phase.is_setup()),
        ("Scatter", ButtonAction::Scatter, phase.is_setup()),
        ("Reset", ButtonAction::Reset, true),
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(i, (text, action, enabled))| {
            let y = 310.0 + i as f32 * (BUTTON_HEIGHT + 8.0);
            let mut button = Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, text, action);
            button.enabled = enabled;
            button
        })
        .collect()
}
