use macroquad::prelude::*;
use tracing::debug;

use crate::application::{AutoRun, Camera, Session};
use crate::domain::{GameError, Pattern, Player};
use crate::ui::{Button, ButtonAction, Dropdown};

/// Speed change per Up/Down key press, on the normalized [0, 1] scale
const SPEED_STEP: f32 = 0.1;

/// Log a refused command. Refusals are normal during play (pressing Space
/// while seeding, clicking an occupied cell) and change nothing.
fn report<T>(command: &str, result: Result<T, GameError>) {
    if let Err(err) = result {
        debug!(command, %err, "command refused");
    }
}

fn active_player(session: &Session) -> Result<Player, GameError> {
    session
        .active_player()
        .ok_or(GameError::InvalidPhaseForOperation { phase: session.phase() })
}

fn scatter_active(session: &mut Session) -> Result<(), GameError> {
    let player = active_player(session)?;
    session.scatter_seeds(player, &mut ::rand::rng()).map(|_| ())
}

/// Top-left corner that centers `pattern` on the hovered cell
pub fn stamp_origin(pattern: &Pattern, cell: (usize, usize)) -> (usize, usize) {
    (
        cell.0.saturating_sub(pattern.width / 2),
        cell.1.saturating_sub(pattern.height / 2),
    )
}

/// Handle zoom with mouse wheel, anchored at the cursor
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_at(1.1, mouse_pos);
    } else if wheel < 0.0 {
        camera.zoom_at(1.0 / 1.1, mouse_pos);
    }
}

/// Middle-button drag panning
#[derive(Default)]
pub struct PanDrag {
    last: Option<(f32, f32)>,
}

impl PanDrag {
    pub fn update(&mut self, camera: &mut Camera, mouse_pos: (f32, f32)) {
        if !is_mouse_button_down(MouseButton::Middle) {
            self.last = None;
            return;
        }
        if let Some(last) = self.last {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        self.last = Some(mouse_pos);
    }
}

/// Seeding with the mouse during setup: left click places a seed or the
/// selected pattern, right click retracts a seed.
pub fn handle_setup_mouse(
    session: &mut Session,
    hovered: Option<(usize, usize)>,
    stamp: Option<&Pattern>,
) {
    let (Some(player), Some((x, y))) = (session.active_player(), hovered) else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        match stamp {
            Some(pattern) => {
                let (ox, oy) = stamp_origin(pattern, (x, y));
                report("place_pattern", session.place_pattern(player, pattern, ox, oy));
            }
            None => report("place_seed", session.place_seed(player, x, y)),
        }
    }
    if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::E) {
        report("retract_seed", session.retract_seed(player, x, y));
    }
}

/// Game keys
pub fn process_keyboard_input(
    session: &mut Session,
    auto_run: &mut AutoRun,
    stamp: &mut Dropdown,
) {
    type KeyAction = (KeyCode, &'static str, fn(&mut Session) -> Result<(), GameError>);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, "toggle_run_pause", |s| s.toggle_run_pause().map(|_| ())),
        (KeyCode::S, "step_once", |s| s.step_once().map(|_| ())),
        (KeyCode::Enter, "advance_phase", |s| s.advance_phase_manually().map(|_| ())),
        (KeyCode::R, "scatter_seeds", scatter_active),
        (KeyCode::C, "restart", |s| {
            s.restart();
            Ok(())
        }),
    ];

    for (key, name, action) in actions {
        if is_key_pressed(key) {
            report(name, action(session));
        }
    }

    if is_key_pressed(KeyCode::Up) {
        auto_run.adjust_speed(SPEED_STEP);
    }
    if is_key_pressed(KeyCode::Down) {
        auto_run.adjust_speed(-SPEED_STEP);
    }
    if is_key_pressed(KeyCode::Tab) {
        stamp.cycle();
    }
}

/// Reset camera to fit the board with 'H' (home)
pub fn handle_camera_keys(
    camera: &mut Camera,
    grid_dims: (usize, usize),
    viewport: (f32, f32),
    cell_size: f32,
) {
    if is_key_pressed(KeyCode::H) {
        camera.fit(grid_dims, viewport, cell_size);
    }
}

/// Process panel button clicks
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    for button in buttons.iter().filter(|btn| btn.is_clicked(mouse_pos)) {
        match button.action {
            ButtonAction::PlayPause => report("toggle_run_pause", session.toggle_run_pause()),
            ButtonAction::Step => report("step_once", session.step_once()),
            ButtonAction::EndSetup => report("advance_phase", session.advance_phase_manually()),
            ButtonAction::Scatter => report("scatter_seeds", scatter_active(session)),
            ButtonAction::Reset => session.restart(),
        }
    }
}
