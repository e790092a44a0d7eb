use super::{CellState, GameError, NeighborCounts};

/// Grid manages the two-player cellular automaton board.
///
/// Holds a `current` buffer readable by everyone and a `next` scratch buffer
/// written only while a step is in progress. Advancing a generation swaps
/// the two instead of copying. `previous` keeps the pre-step state of every
/// cell the latest step changed, for transition rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<CellState>,
    next: Vec<CellState>,
    previous: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let mut grid = Self {
            width: 0,
            height: 0,
            current: Vec::new(),
            next: Vec::new(),
            previous: Vec::new(),
        };
        grid.reset(width, height)?;
        Ok(grid)
    }

    /// Reallocate (or clear) all buffers to `width`x`height` empty cells.
    /// Leaves the grid untouched on error.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<(), GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimension { width, height });
        }
        let len = width * height;
        for buffer in [&mut self.current, &mut self.next, &mut self.previous] {
            buffer.clear();
            buffer.resize(len, CellState::Empty);
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        for buffer in [&mut self.current, &mut self.next, &mut self.previous] {
            buffer.fill(CellState::Empty);
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if x < self.width && y < self.height {
            Ok(self.get_index(x, y))
        } else {
            Err(GameError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Current state of a cell
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GameError> {
        self.checked_index(x, y).map(|idx| self.current[idx])
    }

    /// State the cell had before the latest step changed it
    pub fn previous(&self, x: usize, y: usize) -> Result<CellState, GameError> {
        self.checked_index(x, y).map(|idx| self.previous[idx])
    }

    /// Direct write into the current buffer (seed placement only)
    pub fn set_current(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GameError> {
        let idx = self.checked_index(x, y)?;
        self.current[idx] = state;
        self.previous[idx] = state;
        Ok(())
    }

    /// Exchange the roles of `current` and `next`
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Number of live cells in the current buffer
    pub fn count_alive(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Owner-split count of the live Moore neighbors of `(x, y)`.
    /// Neighbors outside the grid do not contribute.
    pub fn neighbor_counts(&self, x: usize, y: usize) -> NeighborCounts {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| nx != x || ny != y)
            .fold(NeighborCounts::default(), |mut counts, (nx, ny)| {
                match self.current[self.get_index(nx, ny)] {
                    CellState::P1 => counts.p1 += 1,
                    CellState::P2 => counts.p2 += 1,
                    CellState::Empty => {}
                }
                counts
            })
    }

    /// Iterate over all cells of the current buffer with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.current
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    pub(crate) fn current_cells(&self) -> &[CellState] {
        &self.current
    }

    /// Lend out the scratch buffer so it can be filled while `current`
    /// is read through `&self`. Must be handed back via [`Grid::install_next`].
    pub(crate) fn take_next(&mut self) -> Vec<CellState> {
        std::mem::take(&mut self.next)
    }

    /// Return a filled scratch buffer and make it the current generation
    pub(crate) fn install_next(&mut self, next: Vec<CellState>) {
        assert_eq!(next.len(), self.current.len(), "scratch buffer size mismatch");
        self.next = next;
        self.swap();
    }

    pub(crate) fn record_previous(&mut self, idx: usize, state: CellState) {
        self.previous[idx] = state;
    }
}
