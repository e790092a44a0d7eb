mod transitions;

pub use transitions::Transitions;

use macroquad::prelude::*;
use crate::application::{AutoRun, Camera, Session};
use crate::domain::{CellState, Pattern, Phase, Player, Winner};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x};

const BACKGROUND: Color = Color::new(0.05, 0.05, 0.05, 1.0);
const P1_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const P2_COLOR: Color = Color::new(1.0, 0.85, 0.2, 1.0);

fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => BACKGROUND,
        CellState::P1 => P1_COLOR,
        CellState::P2 => P2_COLOR,
    }
}

pub fn player_color(player: Player) -> Color {
    state_color(player.cell())
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        1.0,
    )
}

/// Draw the board, fading cells that changed in the latest step
pub fn draw_grid(session: &Session, fades: &Transitions, camera: &Camera, cell_size: f32) {
    let grid = session.grid();
    let (grid_width, grid_height) = grid.dimensions();
    let size = cell_size * camera.zoom;
    let (area_width, area_height) = (grid_area_width(), grid_area_height());

    // Board backdrop
    let (origin_x, origin_y) = camera.grid_to_screen(0, 0, cell_size);
    draw_rectangle(
        origin_x,
        origin_y,
        grid_width as f32 * size,
        grid_height as f32 * size,
        BACKGROUND,
    );

    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = size >= 6.0;

    for (x, y, state) in grid.iter_cells() {
        let (screen_x, screen_y) = camera.grid_to_screen(x, y, cell_size);

        // Skip if outside viewport
        if screen_x + size < 0.0
            || screen_x > area_width
            || screen_y + size < 0.0
            || screen_y > area_height
        {
            continue;
        }

        let color = match fades.progress(x, y) {
            Some(t) => {
                let from = grid.previous(x, y).map(state_color).unwrap_or(BACKGROUND);
                lerp_color(from, state_color(state), t)
            }
            None if state.is_alive() => state_color(state),
            None => {
                if draw_grid_lines {
                    draw_rectangle_lines(screen_x, screen_y, size, size, 1.0, grid_line_color);
                }
                continue;
            }
        };
        draw_rectangle(screen_x, screen_y, size, size, color);
    }
}

/// Semi-transparent preview of a pattern stamp under the cursor
pub fn draw_pattern_preview(
    pattern: &Pattern,
    player: Player,
    camera: &Camera,
    cell: (usize, usize),
    cell_size: f32,
) {
    let size = cell_size * camera.zoom;
    let base = player_color(player);
    let fill = Color::new(base.r, base.g, base.b, 0.45);
    let outline = Color::new(base.r, base.g, base.b, 0.8);

    for (gx, gy) in pattern.cells_at(cell.0, cell.1).flatten() {
        let (screen_x, screen_y) = camera.grid_to_screen(gx, gy, cell_size);
        draw_rectangle(screen_x, screen_y, size, size, fill);
        draw_rectangle_lines(screen_x, screen_y, size, size, 1.5, outline);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::SetupP1 => P1_COLOR,
        Phase::SetupP2 => P2_COLOR,
        Phase::Running => Color::from_rgba(0, 255, 0, 255),
        Phase::Paused => Color::from_rgba(255, 165, 0, 255),
        Phase::Finished => Color::from_rgba(255, 80, 80, 255),
    }
}

/// Draw the side panel: phase, per-player scores and seeds, speed, buttons
pub fn draw_hud(
    session: &Session,
    auto_run: &AutoRun,
    buttons: &[Button],
    stamp: &Dropdown,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let phase = session.phase();

    draw_text_label("Phase:", px, 20.0, 16.0, WHITE);
    draw_text_label(phase.label(), px, 40.0, 20.0, phase_color(phase));

    for (i, player) in Player::ALL.into_iter().enumerate() {
        let state = session.player_state(player);
        let y = 70.0 + i as f32 * 45.0;
        draw_text_label(
            &format!("{player:?}  score: {}", state.cumulative_score),
            px,
            y,
            16.0,
            player_color(player),
        );
        draw_text_label(
            &format!("left: {}   +{}", state.remaining_seeds, state.per_step_score),
            px,
            y + 16.0,
            14.0,
            GRAY,
        );
    }

    let (gw, gh) = session.grid().dimensions();
    let labels = [
        (format!("Generation: {}", session.generation()), 170.0),
        (format!("Alive: {}", session.grid().count_alive()), 185.0),
        (format!("Grid: {gw}x{gh}"), 200.0),
        (format!("Speed: {:.1} gen/s", auto_run.steps_per_second()), 215.0),
    ];
    labels.iter().for_each(|(text, y)| {
        draw_text_label(text, px, *y, 13.0, Color::from_rgba(180, 180, 180, 255));
    });

    let controls = [
        "Controls:",
        "LMB: Seed / stamp",
        "RMB, E: Retract",
        "Enter: End setup",
        "R: Scatter seeds",
        "Space: Play/Pause",
        "S: Step  C: Reset",
        "Up/Down: Speed",
        "Wheel: Zoom  H: Fit",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text_label(text, px, 560.0 + i as f32 * 13.0, size, color);
    });

    // Dropdown last so its open list covers everything
    stamp.draw(mouse_pos);
}

/// Banner announcing the winner once the game is finished
pub fn draw_result(session: &Session) {
    let Some(winner) = session.winner() else {
        return;
    };
    let p1 = session.player_state(Player::P1).cumulative_score;
    let p2 = session.player_state(Player::P2).cumulative_score;
    let text = match winner {
        Winner::Player(Player::P1) => format!("P1 wins!  {p1} : {p2}"),
        Winner::Player(Player::P2) => format!("P2 wins!  {p2} : {p1}"),
        Winner::Draw => format!("Draw!  {p1} : {p2}"),
    };

    let (w, h) = (grid_area_width(), grid_area_height());
    draw_rectangle(w / 2.0 - 160.0, h / 2.0 - 50.0, 320.0, 100.0, Color::new(0.0, 0.0, 0.0, 0.8));
    draw_rectangle_lines(w / 2.0 - 160.0, h / 2.0 - 50.0, 320.0, 100.0, 2.0, WHITE);

    let measure = measure_text(&text, None, 32, 1.0);
    draw_text(&text, (w - measure.width) / 2.0, h / 2.0, 32.0, WHITE);
    let hint = "Press C or Reset";
    let measure = measure_text(hint, None, 16, 1.0);
    draw_text(hint, (w - measure.width) / 2.0, h / 2.0 + 30.0, 16.0, GRAY);
}
