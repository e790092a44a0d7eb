use super::Player;

/// Result of a finished game
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Winner {
    Player(Player),
    Draw,
}

/// Birth-based scoring. Every cell born to a player's species is one point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    totals: [u32; 2],
    last_step: [u32; 2],
    generation: u64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the births of one completed generation
    pub fn accumulate(&mut self, p1_births: u32, p2_births: u32) {
        self.last_step = [p1_births, p2_births];
        self.totals[0] += p1_births;
        self.totals[1] += p2_births;
        self.generation += 1;
    }

    pub const fn total(&self, player: Player) -> u32 {
        self.totals[player.index()]
    }

    /// Births in the most recent generation only
    pub const fn per_step(&self, player: Player) -> u32 {
        self.last_step[player.index()]
    }

    /// Completed generations since the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Compare cumulative totals
    pub fn winner(&self) -> Winner {
        let [p1, p2] = self.totals;
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Winner::Player(Player::P1),
            std::cmp::Ordering::Less => Winner::Player(Player::P2),
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
