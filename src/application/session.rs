use rand::Rng;
use tracing::{debug, info};

use crate::domain::{
    step, CellState, ChangedCell, GameError, Grid, Pattern, Phase, PhaseMachine, Player,
    ScoreLedger, SeedController, Winner,
};

/// Read-only view of one player's standing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub remaining_seeds: u32,
    pub cumulative_score: u32,
    pub per_step_score: u32,
}

/// Session owns the whole simulation: board, seed budgets, phase and scores.
///
/// Every mutation goes through one of the command methods below. Each
/// command validates before it touches anything, so an `Err` leaves the
/// session exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
    seeds: SeedController,
    phase: PhaseMachine,
    scores: ScoreLedger,
    changed: Vec<ChangedCell>,
}

impl Session {
    /// Start a session in SetupP1 with an empty `width`x`height` board
    pub fn new(width: usize, height: usize, seeds_per_player: u32) -> Result<Self, GameError> {
        let session = Self {
            grid: Grid::new(width, height)?,
            seeds: SeedController::new(seeds_per_player),
            phase: PhaseMachine::new(),
            scores: ScoreLedger::new(),
            changed: Vec::new(),
        };
        info!(width, height, seeds_per_player, "session created");
        Ok(session)
    }

    // ---- queries ----

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_cell(&self, x: usize, y: usize) -> Result<CellState, GameError> {
        self.grid.get(x, y)
    }

    pub fn phase(&self) -> Phase {
        self.phase.phase()
    }

    /// Player whose setup phase is active
    pub fn active_player(&self) -> Option<Player> {
        self.phase().setup_player()
    }

    pub fn player_state(&self, player: Player) -> PlayerState {
        PlayerState {
            remaining_seeds: self.seeds.remaining(player),
            cumulative_score: self.scores.total(player),
            per_step_score: self.scores.per_step(player),
        }
    }

    /// Cells changed by the most recent step
    pub fn changed_cells(&self) -> &[ChangedCell] {
        &self.changed
    }

    /// Available once the game is finished
    pub fn winner(&self) -> Option<Winner> {
        (self.phase() == Phase::Finished).then(|| self.scores.winner())
    }

    pub fn generation(&self) -> u64 {
        self.scores.generation()
    }

    pub fn seeds_per_player(&self) -> u32 {
        self.seeds.seeds_per_player()
    }

    pub fn should_auto_advance(&self) -> bool {
        self.phase.should_auto_advance()
    }

    // ---- setup commands ----

    pub fn place_seed(&mut self, player: Player, x: usize, y: usize) -> Result<(), GameError> {
        self.phase.require_setup_player(player)?;
        let left = self.seeds.place_seed(&mut self.grid, player, x, y)?;
        debug!(?player, x, y, left, "seed placed");
        self.after_placement(player, left);
        Ok(())
    }

    pub fn retract_seed(&mut self, player: Player, x: usize, y: usize) -> Result<(), GameError> {
        self.phase.require_setup_player(player)?;
        let left = self.seeds.retract_seed(&mut self.grid, player, x, y)?;
        debug!(?player, x, y, left, "seed retracted");
        Ok(())
    }

    /// Stamp a whole pattern of seeds; all-or-nothing
    pub fn place_pattern(
        &mut self,
        player: Player,
        pattern: &Pattern,
        x: usize,
        y: usize,
    ) -> Result<(), GameError> {
        self.phase.require_setup_player(player)?;
        let left = self.seeds.place_pattern(&mut self.grid, player, pattern, x, y)?;
        debug!(?player, pattern = pattern.name, x, y, left, "pattern placed");
        self.after_placement(player, left);
        Ok(())
    }

    /// Spend the rest of `player`'s seeds on random empty cells
    pub fn scatter_seeds<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<u32, GameError> {
        self.phase.require_setup_player(player)?;
        let placed = self.seeds.scatter_seeds(&mut self.grid, player, rng)?;
        let left = self.seeds.remaining(player);
        debug!(?player, placed, left, "seeds scattered");
        self.after_placement(player, left);
        Ok(placed)
    }

    /// Leave the current setup phase, forfeiting unused seeds
    pub fn advance_phase_manually(&mut self) -> Result<Phase, GameError> {
        let phase = self.phase.advance()?;
        info!(?phase, "setup advanced manually");
        Ok(phase)
    }

    fn after_placement(&mut self, player: Player, left: u32) {
        if left == 0 {
            if let Some(phase) = self.phase.seeds_exhausted(player) {
                info!(?player, ?phase, "seeds exhausted, setup advanced");
            }
        }
    }

    // ---- simulation commands ----

    pub fn toggle_run_pause(&mut self) -> Result<Phase, GameError> {
        let phase = self.phase.toggle_run_pause()?;
        info!(?phase, "run state toggled");
        Ok(phase)
    }

    /// Advance exactly one generation: step, score, end check.
    /// Returns the phase afterwards.
    pub fn step_once(&mut self) -> Result<Phase, GameError> {
        self.phase.require_simulating()?;

        let report = step::step(&mut self.grid);
        self.scores.accumulate(report.p1_births, report.p2_births);
        self.changed = report.changed;

        let alive = self.grid.count_alive();
        debug!(
            generation = self.generation(),
            p1_births = report.p1_births,
            p2_births = report.p2_births,
            alive,
            "generation advanced"
        );

        if self.phase.check_end(alive) {
            info!(
                winner = ?self.scores.winner(),
                p1 = self.scores.total(Player::P1),
                p2 = self.scores.total(Player::P2),
                generation = self.generation(),
                "game finished"
            );
        }
        Ok(self.phase())
    }

    // ---- lifecycle ----

    /// Back to SetupP1 with a fresh board of the given size and seed quota
    pub fn reset(
        &mut self,
        width: usize,
        height: usize,
        seeds_per_player: u32,
    ) -> Result<(), GameError> {
        self.grid.reset(width, height)?;
        self.reset_game(seeds_per_player);
        info!(width, height, seeds_per_player, "session reset");
        Ok(())
    }

    /// Reset keeping the current dimensions and seed quota
    pub fn restart(&mut self) {
        self.grid.clear();
        self.reset_game(self.seeds.seeds_per_player());
        info!("session restarted");
    }

    fn reset_game(&mut self, seeds_per_player: u32) {
        self.seeds.reset(seeds_per_player);
        self.phase.reset();
        self.scores.reset();
        self.changed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(phase: Phase) -> GameError {
        GameError::InvalidPhaseForOperation { phase }
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(8, 6, 3).unwrap();
        assert_eq!(session.phase(), Phase::SetupP1);
        assert_eq!(session.active_player(), Some(Player::P1));
        assert_eq!(session.grid().dimensions(), (8, 6));
        assert_eq!(
            session.player_state(Player::P2),
            PlayerState { remaining_seeds: 3, cumulative_score: 0, per_step_score: 0 }
        );
        assert_eq!(session.winner(), None);
        assert!(Session::new(0, 6, 3).is_err());
    }

    #[test]
    fn test_one_seed_each_reaches_running() {
        let mut session = Session::new(5, 5, 1).unwrap();
        session.place_seed(Player::P1, 0, 0).unwrap();
        assert_eq!(session.phase(), Phase::SetupP2);
        session.place_seed(Player::P2, 4, 4).unwrap();
        assert_eq!(session.phase(), Phase::Running);
        assert!(session.should_auto_advance());
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let mut session = Session::new(5, 5, 2).unwrap();
        assert_eq!(session.place_seed(Player::P2, 1, 1), Err(invalid(Phase::SetupP1)));
        session.place_seed(Player::P1, 1, 1).unwrap();
        session.advance_phase_manually().unwrap();

        // P1's seeds are frozen once its phase is over
        assert_eq!(session.retract_seed(Player::P1, 1, 1), Err(invalid(Phase::SetupP2)));
        assert_eq!(
            session.retract_seed(Player::P2, 1, 1),
            Err(GameError::NotOwnedByActivePlayer { x: 1, y: 1 })
        );
        assert_eq!(session.current_cell(1, 1), Ok(CellState::P1));
    }

    #[test]
    fn test_place_retract_round_trip() {
        let mut session = Session::new(5, 5, 2).unwrap();
        let before = session.clone();
        session.place_seed(Player::P1, 2, 3).unwrap();
        session.retract_seed(Player::P1, 2, 3).unwrap();
        assert_eq!(session, before);
    }

    #[test]
    fn test_manual_advance_forfeits_seeds() {
        let mut session = Session::new(5, 5, 4).unwrap();
        assert_eq!(session.advance_phase_manually(), Ok(Phase::SetupP2));
        assert_eq!(session.advance_phase_manually(), Ok(Phase::Running));
        assert_eq!(session.advance_phase_manually(), Err(invalid(Phase::Running)));
        assert_eq!(session.place_seed(Player::P2, 0, 0), Err(invalid(Phase::Running)));
    }

    #[test]
    fn test_step_rejected_during_setup() {
        let mut session = Session::new(5, 5, 1).unwrap();
        assert_eq!(session.step_once(), Err(invalid(Phase::SetupP1)));
        assert_eq!(session.toggle_run_pause(), Err(invalid(Phase::SetupP1)));
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_pause_preserves_grid_and_allows_manual_step() {
        let mut session = Session::new(5, 5, 4).unwrap();
        session.place_pattern(Player::P1, &crate::domain::presets::block(), 1, 1).unwrap();
        session.advance_phase_manually().unwrap();

        let board = session.grid().clone();
        assert_eq!(session.toggle_run_pause(), Ok(Phase::Paused));
        assert_eq!(session.grid(), &board);
        assert!(!session.should_auto_advance());

        assert_eq!(session.step_once(), Ok(Phase::Paused));
        assert_eq!(session.generation(), 1);
        assert_eq!(session.toggle_run_pause(), Ok(Phase::Running));
    }

    #[test]
    fn test_step_on_empty_board_finishes_in_draw() {
        let mut session = Session::new(5, 5, 3).unwrap();
        session.advance_phase_manually().unwrap();
        session.advance_phase_manually().unwrap();

        assert_eq!(session.step_once(), Ok(Phase::Finished));
        assert_eq!(session.winner(), Some(Winner::Draw));
        assert_eq!(session.step_once(), Err(invalid(Phase::Finished)));
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_per_step_score_is_transient() {
        let mut session = Session::new(5, 5, 3).unwrap();
        // L tromino, grows into a block with a single birth
        session.place_seed(Player::P1, 1, 1).unwrap();
        session.place_seed(Player::P1, 2, 1).unwrap();
        session.place_seed(Player::P1, 1, 2).unwrap();
        session.advance_phase_manually().unwrap();

        session.step_once().unwrap();
        assert_eq!(session.player_state(Player::P1).per_step_score, 1);
        assert_eq!(session.changed_cells().len(), 1);

        session.step_once().unwrap();
        let state = session.player_state(Player::P1);
        assert_eq!((state.per_step_score, state.cumulative_score), (0, 1));
        assert!(session.changed_cells().is_empty());
    }

    #[test]
    fn test_reset_restores_setup() {
        let mut session = Session::new(5, 5, 1).unwrap();
        session.place_seed(Player::P1, 0, 0).unwrap();
        session.place_seed(Player::P2, 4, 4).unwrap();
        session.step_once().unwrap();
        assert_eq!(session.phase(), Phase::Finished);

        session.reset(7, 3, 2).unwrap();
        assert_eq!(session.phase(), Phase::SetupP1);
        assert_eq!(session.grid().dimensions(), (7, 3));
        assert_eq!(session.grid().count_alive(), 0);
        assert_eq!(session.player_state(Player::P1).remaining_seeds, 2);
        assert_eq!(session.generation(), 0);
        assert!(session.changed_cells().is_empty());

        // Invalid reset leaves the session as it was
        let before = session.clone();
        assert!(session.reset(0, 0, 5).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_restart_keeps_configuration() {
        let mut session = Session::new(6, 4, 5).unwrap();
        session.place_seed(Player::P1, 0, 0).unwrap();
        session.restart();
        assert_eq!(session, Session::new(6, 4, 5).unwrap());
    }
}
