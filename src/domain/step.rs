//! Generation step for the two-player automaton.
//!
//! Both engines read only the frozen `current` buffer and write the whole
//! `next` buffer, then share a single commit pass that tallies births,
//! collects changed cells and swaps. The serial and parallel variants are
//! therefore interchangeable and produce identical reports.

use super::{CellState, Grid, Player};
use rayon::prelude::*;

/// A cell whose state differs between two consecutive generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChangedCell {
    pub x: usize,
    pub y: usize,
    pub old: CellState,
    pub new: CellState,
}

/// Outcome of one generation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StepReport {
    pub p1_births: u32,
    pub p2_births: u32,
    pub changed: Vec<ChangedCell>,
}

impl StepReport {
    pub const fn births(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.p1_births,
            Player::P2 => self.p2_births,
        }
    }
}

/// Advance the grid by one generation (serial)
pub fn step(grid: &mut Grid) -> StepReport {
    let mut next = grid.take_next();
    let frozen: &Grid = grid;
    next.iter_mut()
        .enumerate()
        .for_each(|(idx, slot)| *slot = evolve_at(frozen, idx));
    commit(grid, next)
}

/// Advance the grid by one generation, evolving rows in parallel with rayon.
/// Produces exactly the same grid and report as [`step`].
pub fn step_parallel(grid: &mut Grid) -> StepReport {
    let mut next = grid.take_next();
    let frozen: &Grid = grid;
    let width = frozen.dimensions().0;
    next.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            row.iter_mut()
                .enumerate()
                .for_each(|(x, slot)| *slot = evolve_at(frozen, y * width + x));
        });
    commit(grid, next)
}

fn evolve_at(grid: &Grid, idx: usize) -> CellState {
    let width = grid.dimensions().0;
    let (x, y) = (idx % width, idx / width);
    grid.current_cells()[idx].evolve(grid.neighbor_counts(x, y))
}

fn commit(grid: &mut Grid, next: Vec<CellState>) -> StepReport {
    let width = grid.dimensions().0;
    let mut report = StepReport::default();

    for (idx, (&old, &new)) in grid.current_cells().iter().zip(&next).enumerate() {
        if old == new {
            continue;
        }
        if !old.is_alive() {
            match new {
                CellState::P1 => report.p1_births += 1,
                CellState::P2 => report.p2_births += 1,
                CellState::Empty => {}
            }
        }
        report.changed.push(ChangedCell {
            x: idx % width,
            y: idx / width,
            old,
            new,
        });
    }

    for change in &report.changed {
        grid.record_previous(change.y * width + change.x, change.old);
    }
    grid.install_next(next);
    report
}
