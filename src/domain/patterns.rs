/// A named seed shape that a player can stamp in one move.
/// Each cell of the pattern costs one seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    cells: Vec<(usize, usize)>, // Relative, row-major, no duplicates
}

impl Pattern {
    /// Create a new pattern from seeded cell coordinates.
    /// Repeated coordinates collapse into one cell.
    pub fn new(
        name: &'static str,
        description: &'static str,
        mut cells: Vec<(usize, usize)>,
    ) -> Self {
        cells.sort_unstable_by_key(|&(x, y)| (y, x));
        cells.dedup();
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Seeds this pattern costs
    pub fn seed_cost(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Absolute cell positions when the pattern's top-left corner is at `(x, y)`.
    /// `None` for a cell whose coordinates overflow `usize`.
    pub fn cells_at(
        &self,
        x: usize,
        y: usize,
    ) -> impl Iterator<Item = Option<(usize, usize)>> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
    }
}

/// Small patterns that fit a typical seed budget
pub mod presets {
    use super::*;

    /// Glider - moves diagonally, leaves the board on a fixed grid
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - long-lived methuselah, scores many births
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Acorn - small methuselah
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            glider(),
            toad(),
            beacon(),
            r_pentomino(),
            acorn(),
            lwss(),
        ]
    }
}
