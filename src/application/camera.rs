pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;

/// Camera manages viewport placement and zoom for the board
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = one cell is `cell_size` pixels
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    /// Center the whole board in the viewport at the largest zoom that fits
    pub fn fit(
        &mut self,
        grid_dims: (usize, usize),
        viewport: (f32, f32),
        cell_size: f32,
    ) {
        let (w, h) = (grid_dims.0 as f32 * cell_size, grid_dims.1 as f32 * cell_size);
        self.zoom = (viewport.0 / w).min(viewport.1 / h).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset_x = (viewport.0 - w * self.zoom) / 2.0;
        self.offset_y = (viewport.1 - h * self.zoom) / 2.0;
    }

    /// Zoom by `factor` keeping the screen point `anchor` fixed
    pub fn zoom_at(&mut self, factor: f32, anchor: (f32, f32)) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.offset_x = anchor.0 - (anchor.0 - self.offset_x) * ratio;
        self.offset_y = anchor.1 - (anchor.1 - self.offset_y) * ratio;
        self.zoom = new_zoom;
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to a cell of a `grid_dims` board.
    /// `None` when the point is off the board.
    pub fn screen_to_cell(
        &self,
        screen: (f32, f32),
        cell_size: f32,
        grid_dims: (usize, usize),
    ) -> Option<(usize, usize)> {
        let scale = cell_size * self.zoom;
        let fx = ((screen.0 - self.offset_x) / scale).floor();
        let fy = ((screen.1 - self.offset_y) / scale).floor();
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        let (x, y) = (fx as usize, fy as usize);
        (x < grid_dims.0 && y < grid_dims.1).then_some((x, y))
    }

    /// Convert grid coordinates to screen coordinates
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize, cell_size: f32) -> (f32, f32) {
        let screen_x = grid_x as f32 * cell_size * self.zoom + self.offset_x;
        let screen_y = grid_y as f32 * cell_size * self.zoom + self.offset_y;
        (screen_x, screen_y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_board() {
        let mut camera = Camera::new();
        camera.fit((10, 5), (200.0, 200.0), 10.0);
        assert_eq!(camera.zoom, 2.0);
        assert_eq!((camera.offset_x, camera.offset_y), (0.0, 50.0));
    }

    #[test]
    fn test_screen_to_cell_round_trip() {
        let mut camera = Camera::new();
        camera.fit((10, 5), (200.0, 200.0), 10.0);
        let (sx, sy) = camera.grid_to_screen(3, 4, 10.0);
        assert_eq!(camera.screen_to_cell((sx + 1.0, sy + 1.0), 10.0, (10, 5)), Some((3, 4)));
    }

    #[test]
    fn test_off_board_is_none() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_cell((-1.0, 5.0), 10.0, (4, 4)), None);
        assert_eq!(camera.screen_to_cell((45.0, 5.0), 10.0, (4, 4)), None);
        assert_eq!(camera.screen_to_cell((35.0, 5.0), 10.0, (4, 4)), Some((3, 0)));
    }

    #[test]
    fn test_zoom_is_clamped_and_anchored() {
        let mut camera = Camera::new();
        camera.zoom_at(2.0, (100.0, 100.0));
        assert_eq!(camera.zoom, 2.0);
        assert_eq!((camera.offset_x, camera.offset_y), (-100.0, -100.0));

        camera.zoom_at(100.0, (0.0, 0.0));
        assert_eq!(camera.zoom, MAX_ZOOM);
        camera.zoom_at(0.0001, (0.0, 0.0));
        assert_eq!(camera.zoom, MIN_ZOOM);
    }
}
