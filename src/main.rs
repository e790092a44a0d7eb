use clap::Parser;
use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::filter::EnvFilter;

use duel_of_life::{
    AutoRun, Camera, Config, Session, presets,
    rendering::{self, Transitions},
    input::{self, PanDrag},
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Duel of Life".to_owned(),
        window_width: 1000,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    let mut session = match Session::new(config.width, config.height, config.seeds) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "invalid board configuration");
            return;
        }
    };
    let mut auto_run = AutoRun::new(config.interval);
    let mut camera = Camera::new();
    let mut pan = PanDrag::default();
    let mut fades = Transitions::new(session.grid().dimensions(), config.anim);

    let patterns = presets::all_patterns();
    let mut stamp = Dropdown::new(
        ui::panel_x(),
        ui::STAMP_Y,
        ui::PANEL_WIDTH,
        "Stamp (Tab)",
        ui::stamp_items(&patterns),
    );

    let mut fitted_viewport = (0.0, 0.0);
    let mut last_generation = session.generation();

    loop {
        let mouse_pos = mouse_position();
        let viewport = (ui::grid_area_width(), ui::grid_area_height());
        let grid_dims = session.grid().dimensions();

        // Refit whenever the window size changes
        if viewport != fitted_viewport {
            camera.fit(grid_dims, viewport, config.cell_size);
            fitted_viewport = viewport;
        }
        stamp.set_position(ui::panel_x(), ui::STAMP_Y);
        let buttons = ui::create_buttons(&session);

        // Index 0 is the single-seed brush
        let stamp_captured = stamp.captures(mouse_pos);
        stamp.update(mouse_pos);
        let selected = stamp.selected().checked_sub(1).and_then(|i| patterns.get(i));

        let hovered = (mouse_pos.0 < viewport.0)
            .then(|| camera.screen_to_cell(mouse_pos, config.cell_size, grid_dims))
            .flatten();

        if !stamp_captured {
            input::process_button_clicks(&mut session, &buttons, mouse_pos);
            input::handle_setup_mouse(&mut session, hovered, selected);
        }
        input::handle_zoom(&mut camera, mouse_pos);
        pan.update(&mut camera, mouse_pos);
        input::process_keyboard_input(&mut session, &mut auto_run, &mut stamp);
        input::handle_camera_keys(&mut camera, grid_dims, viewport, config.cell_size);

        let delta_time = get_frame_time();
        if let Err(err) = auto_run.tick(&mut session, delta_time) {
            error!(%err, "auto-run step refused");
        }

        fades.tick(delta_time);
        let generation = session.generation();
        if generation != last_generation {
            if generation == 0 {
                fades.clear(session.grid().dimensions());
            } else {
                fades.start(session.changed_cells());
            }
            last_generation = generation;
        }

        clear_background(BLACK);
        rendering::draw_grid(&session, &fades, &camera, config.cell_size);
        let preview = (session.active_player(), selected, hovered);
        if let (Some(player), Some(pattern), Some(cell)) = preview {
            let origin = input::stamp_origin(pattern, cell);
            rendering::draw_pattern_preview(pattern, player, &camera, origin, config.cell_size);
        }
        rendering::draw_hud(&session, &auto_run, &buttons, &stamp, mouse_pos);
        rendering::draw_result(&session);

        next_frame().await;
    }
}
