use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 26.0;
const FONT_SIZE: f32 = 15.0;

/// Truncate `text` with an ellipsis so it fits in `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    if measure_text(text, None, FONT_SIZE as u16, 1.0).width <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty()
        && measure_text(&format!("{truncated}..."), None, FONT_SIZE as u16, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select the next item, wrapping around
    pub fn cycle(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the pointer is over the dropdown or its open menu.
    /// Clicks there belong to the dropdown, not the board.
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.row_hovered(mouse_pos, 0)
            || (self.is_open
                && (1..=self.items.len()).any(|row| self.row_hovered(mouse_pos, row)))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.row_hovered(mouse_pos, 0) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);

        let text = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&text, self.x + 5.0, self.y + 18.0, FONT_SIZE, WHITE);
        let arrow = if self.is_open { "^" } else { "v" };
        draw_text(arrow, self.x + self.width - 15.0, self.y + 18.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.row_y(i + 1);
            let item_color = if self.row_hovered(mouse_pos, i + 1) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, item_color);
            let text = fit_text(item, self.width - 10.0);
            draw_text(&text, self.x + 5.0, item_y + 18.0, FONT_SIZE, WHITE);
        }
        draw_rectangle_lines(self.x, self.row_y(1), self.width, menu_height, 2.0, WHITE);
    }

    /// Handle a click. Returns true if the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        if self.row_hovered(mouse_pos, 0) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        match (1..=self.items.len()).find(|&row| self.row_hovered(mouse_pos, row)) {
            Some(row) if row - 1 != self.selected => {
                self.selected = row - 1;
                true
            }
            _ => false,
        }
    }

    /// Row 0 is the main button, rows 1.. are menu items
    fn row_y(&self, row: usize) -> f32 {
        self.y + row as f32 * ITEM_HEIGHT
    }

    fn row_hovered(&self, mouse_pos: (f32, f32), row: usize) -> bool {
        let top = self.row_y(row);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= top
            && mouse_pos.1 <= top + ITEM_HEIGHT
    }
}
