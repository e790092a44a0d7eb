use rand::Rng;
use rand::seq::SliceRandom;

use super::{CellState, GameError, Grid, Pattern, Player};

/// Seed placement rules and per-player seed budgets.
///
/// Only legality and accounting live here. Whether the player may act at
/// all (the phase check) is decided by the caller before any method runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedController {
    seeds_per_player: u32,
    remaining: [u32; 2],
}

impl SeedController {
    pub fn new(seeds_per_player: u32) -> Self {
        Self {
            seeds_per_player,
            remaining: [seeds_per_player; 2],
        }
    }

    /// Restore both budgets, optionally with a new quota
    pub fn reset(&mut self, seeds_per_player: u32) {
        *self = Self::new(seeds_per_player);
    }

    pub const fn seeds_per_player(&self) -> u32 {
        self.seeds_per_player
    }

    pub const fn remaining(&self, player: Player) -> u32 {
        self.remaining[player.index()]
    }

    /// Seed one cell for `player`. Returns the seeds left afterwards.
    pub fn place_seed(
        &mut self,
        grid: &mut Grid,
        player: Player,
        x: usize,
        y: usize,
    ) -> Result<u32, GameError> {
        if self.remaining(player) == 0 {
            return Err(GameError::NoSeedsRemaining);
        }
        if grid.get(x, y)?.is_alive() {
            return Err(GameError::CellOccupied { x, y });
        }
        grid.set_current(x, y, player.cell())?;
        Ok(self.take_one(player))
    }

    /// Remove one of `player`'s own seeds. Returns the seeds left afterwards.
    pub fn retract_seed(
        &mut self,
        grid: &mut Grid,
        player: Player,
        x: usize,
        y: usize,
    ) -> Result<u32, GameError> {
        if grid.get(x, y)? != player.cell() {
            return Err(GameError::NotOwnedByActivePlayer { x, y });
        }
        grid.set_current(x, y, CellState::Empty)?;

        let slot = &mut self.remaining[player.index()];
        assert!(
            *slot < self.seeds_per_player,
            "retraction would exceed the seed quota of {player:?}"
        );
        *slot += 1;
        Ok(*slot)
    }

    /// Stamp `pattern` with its top-left corner at `(x, y)`.
    /// Either every cell is seeded or none is.
    pub fn place_pattern(
        &mut self,
        grid: &mut Grid,
        player: Player,
        pattern: &Pattern,
        x: usize,
        y: usize,
    ) -> Result<u32, GameError> {
        let remaining = self.remaining(player);
        if remaining == 0 {
            return Err(GameError::NoSeedsRemaining);
        }
        if pattern.seed_cost() > remaining {
            return Err(GameError::NotEnoughSeeds {
                needed: pattern.seed_cost(),
                remaining,
            });
        }
        let (width, height) = grid.dimensions();
        let mut cells = Vec::with_capacity(pattern.cells().len());
        for cell in pattern.cells_at(x, y) {
            let (cx, cy) = cell.ok_or(GameError::OutOfBounds { x, y, width, height })?;
            if grid.get(cx, cy)?.is_alive() {
                return Err(GameError::CellOccupied { x: cx, y: cy });
            }
            cells.push((cx, cy));
        }

        for (cx, cy) in cells {
            grid.set_current(cx, cy, player.cell())?;
            self.take_one(player);
        }
        Ok(self.remaining(player))
    }

    /// Spend all of `player`'s remaining seeds on random empty cells.
    /// Places fewer when the grid runs out of empty cells.
    /// Returns how many seeds were placed.
    pub fn scatter_seeds<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        player: Player,
        rng: &mut R,
    ) -> Result<u32, GameError> {
        let remaining = self.remaining(player);
        if remaining == 0 {
            return Err(GameError::NoSeedsRemaining);
        }

        let mut empty: Vec<(usize, usize)> = grid
            .iter_cells()
            .filter(|(_, _, cell)| !cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        empty.shuffle(rng);

        let mut placed = 0;
        for &(x, y) in empty.iter().take(remaining as usize) {
            self.place_seed(grid, player, x, y)?;
            placed += 1;
        }
        Ok(placed)
    }

    fn take_one(&mut self, player: Player) -> u32 {
        let slot = &mut self.remaining[player.index()];
        assert!(*slot > 0, "seed placed with an empty budget for {player:?}");
        *slot -= 1;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(seeds: u32) -> (SeedController, Grid) {
        (SeedController::new(seeds), Grid::new(6, 6).unwrap())
    }

    #[test]
    fn test_place_decrements_budget() {
        let (mut seeds, mut grid) = setup(2);
        assert_eq!(seeds.place_seed(&mut grid, Player::P1, 1, 1), Ok(1));
        assert_eq!(grid.get(1, 1), Ok(CellState::P1));
        assert_eq!(seeds.remaining(Player::P1), 1);
        assert_eq!(seeds.remaining(Player::P2), 2);
    }

    #[test]
    fn test_place_errors_leave_state_untouched() {
        let (mut seeds, mut grid) = setup(1);
        seeds.place_seed(&mut grid, Player::P2, 0, 0).unwrap();

        assert_eq!(
            seeds.place_seed(&mut grid, Player::P1, 0, 0),
            Err(GameError::CellOccupied { x: 0, y: 0 })
        );
        assert!(matches!(
            seeds.place_seed(&mut grid, Player::P1, 6, 0),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(
            seeds.place_seed(&mut grid, Player::P2, 1, 1),
            Err(GameError::NoSeedsRemaining)
        );
        assert_eq!(seeds.remaining(Player::P1), 1);
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_place_then_retract_round_trip() {
        let (mut seeds, mut grid) = setup(3);
        let before = seeds.clone();
        seeds.place_seed(&mut grid, Player::P1, 4, 2).unwrap();
        assert_eq!(seeds.retract_seed(&mut grid, Player::P1, 4, 2), Ok(3));
        assert_eq!(seeds, before);
        assert_eq!(grid.get(4, 2), Ok(CellState::Empty));
    }

    #[test]
    fn test_cannot_retract_foreign_or_empty_cell() {
        let (mut seeds, mut grid) = setup(3);
        seeds.place_seed(&mut grid, Player::P2, 2, 2).unwrap();

        assert_eq!(
            seeds.retract_seed(&mut grid, Player::P1, 2, 2),
            Err(GameError::NotOwnedByActivePlayer { x: 2, y: 2 })
        );
        assert_eq!(
            seeds.retract_seed(&mut grid, Player::P1, 3, 3),
            Err(GameError::NotOwnedByActivePlayer { x: 3, y: 3 })
        );
        assert_eq!(grid.get(2, 2), Ok(CellState::P2));
        assert_eq!(seeds.remaining(Player::P1), 3);
    }

    #[test]
    fn test_pattern_is_all_or_nothing() {
        let (mut seeds, mut grid) = setup(10);
        seeds.place_seed(&mut grid, Player::P2, 3, 3).unwrap();

        // Block at (2, 2) would cover (3, 3)
        assert_eq!(
            seeds.place_pattern(&mut grid, Player::P1, &presets::block(), 2, 2),
            Err(GameError::CellOccupied { x: 3, y: 3 })
        );
        // Block at (5, 5) would spill off the 6x6 board
        assert!(matches!(
            seeds.place_pattern(&mut grid, Player::P1, &presets::block(), 5, 5),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(grid.count_alive(), 1);
        assert_eq!(seeds.remaining(Player::P1), 10);

        assert_eq!(seeds.place_pattern(&mut grid, Player::P1, &presets::block(), 0, 0), Ok(6));
        assert_eq!(grid.count_alive(), 5);
    }

    #[test]
    fn test_pattern_needs_enough_seeds() {
        let (mut seeds, mut grid) = setup(4);
        assert_eq!(
            seeds.place_pattern(&mut grid, Player::P1, &presets::glider(), 0, 0),
            Err(GameError::NotEnoughSeeds { needed: 5, remaining: 4 })
        );
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_pattern_origin_far_off_board() {
        let (mut seeds, mut grid) = setup(10);
        for pattern in [presets::glider(), presets::block()] {
            assert!(matches!(
                seeds.place_pattern(&mut grid, Player::P1, &pattern, usize::MAX, 0),
                Err(GameError::OutOfBounds { .. })
            ));
            assert!(matches!(
                seeds.place_pattern(&mut grid, Player::P1, &pattern, 0, usize::MAX),
                Err(GameError::OutOfBounds { .. })
            ));
        }
        assert_eq!(grid.count_alive(), 0);
        assert_eq!(seeds.remaining(Player::P1), 10);
    }

    #[test]
    fn test_repeated_pattern_cell_costs_one_seed() {
        let (mut seeds, mut grid) = setup(4);
        let pattern = Pattern::new("Twice", "", vec![(0, 0), (0, 0)]);
        assert_eq!(seeds.place_pattern(&mut grid, Player::P1, &pattern, 1, 1), Ok(3));
        assert_eq!(grid.count_alive(), 1);

        // Retracting the only placed cell restores the full budget
        assert_eq!(seeds.retract_seed(&mut grid, Player::P1, 1, 1), Ok(4));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_scatter_spends_whole_budget() {
        let (mut seeds, mut grid) = setup(7);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(seeds.scatter_seeds(&mut grid, Player::P2, &mut rng), Ok(7));
        assert_eq!(seeds.remaining(Player::P2), 0);
        assert_eq!(grid.count_alive(), 7);
        assert!(grid.iter_cells().all(|(_, _, c)| c != CellState::P1));
        assert_eq!(
            seeds.scatter_seeds(&mut grid, Player::P2, &mut rng),
            Err(GameError::NoSeedsRemaining)
        );
    }

    #[test]
    fn test_scatter_is_reproducible() {
        let (mut a, mut grid_a) = setup(5);
        let (mut b, mut grid_b) = setup(5);
        a.scatter_seeds(&mut grid_a, Player::P1, &mut StdRng::seed_from_u64(7)).unwrap();
        b.scatter_seeds(&mut grid_b, Player::P1, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_scatter_stops_when_board_is_full() {
        let mut seeds = SeedController::new(10);
        let mut grid = Grid::new(2, 2).unwrap();
        let placed = seeds
            .scatter_seeds(&mut grid, Player::P1, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(placed, 4);
        assert_eq!(seeds.remaining(Player::P1), 6);
    }
}
