/// The two competing species. Each live cell carries one of these tags.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// Slot in per-player arrays
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Tag written into a cell owned by this player
    pub const fn cell(self) -> CellState {
        match self {
            Player::P1 => CellState::P1,
            Player::P2 => CellState::P2,
        }
    }
}

/// Live-neighbor tally of a cell, split by owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NeighborCounts {
    pub p1: u8,
    pub p2: u8,
}

impl NeighborCounts {
    pub const fn total(self) -> u8 {
        self.p1 + self.p2
    }
}

/// CellState is the fundamental unit of the two-player board.
/// A cell is either empty or alive and owned by one player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CellState {
    #[default]
    Empty,
    P1,
    P2,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        !matches!(self, CellState::Empty)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::P1 => Some(Player::P1),
            CellState::P2 => Some(Player::P2),
        }
    }

    /// Pure function computing the next state under B3/S23 with ownership:
    /// 1. A live cell with 2-3 live neighbors survives and keeps its owner
    /// 2. An empty cell with exactly 3 live neighbors is born to the strict
    ///    majority owner among them; a tie leaves it empty
    /// 3. All other cases result in an empty cell
    ///
    /// With exactly 3 neighbors a tie cannot occur, the tie arm only
    /// matters if the birth threshold ever becomes even.
    pub const fn evolve(self, neighbors: NeighborCounts) -> Self {
        match (self, neighbors.total()) {
            (CellState::Empty, 3) => {
                if neighbors.p1 > neighbors.p2 {
                    CellState::P1
                } else if neighbors.p2 > neighbors.p1 {
                    CellState::P2
                } else {
                    CellState::Empty
                }
            }
            (CellState::Empty, _) => CellState::Empty,
            (alive, 2 | 3) => alive,
            _ => CellState::Empty,
        }
    }
}
