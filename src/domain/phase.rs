use super::{GameError, Player};

/// Game progress. Exactly one phase is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Phase {
    #[default]
    SetupP1,
    SetupP2,
    Running,
    Paused,
    Finished,
}

impl Phase {
    /// Player placing seeds in this phase, if any
    pub const fn setup_player(self) -> Option<Player> {
        match self {
            Phase::SetupP1 => Some(Player::P1),
            Phase::SetupP2 => Some(Player::P2),
            _ => None,
        }
    }

    pub const fn is_setup(self) -> bool {
        self.setup_player().is_some()
    }

    /// Phases in which a generation may be advanced
    pub const fn is_simulating(self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::SetupP1 => "Setup P1",
            Phase::SetupP2 => "Setup P2",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
            Phase::Finished => "Finished",
        }
    }
}

/// Authoritative phase state machine.
///
/// ```text
/// SetupP1 --(P1 out of seeds | advance)--> SetupP2
/// SetupP2 --(P2 out of seeds | advance)--> Running
/// Running <--(toggle)--> Paused
/// Running/Paused --(step empties the grid)--> Finished
/// any --(reset)--> SetupP1
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseMachine {
    phase: Phase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an external timer should drive generations right now
    pub const fn should_auto_advance(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    /// Fails unless `player` is the one currently placing seeds
    pub fn require_setup_player(&self, player: Player) -> Result<(), GameError> {
        match self.phase.setup_player() {
            Some(active) if active == player => Ok(()),
            _ => Err(self.invalid()),
        }
    }

    /// Fails unless a generation may be advanced
    pub fn require_simulating(&self) -> Result<(), GameError> {
        if self.phase.is_simulating() {
            Ok(())
        } else {
            Err(self.invalid())
        }
    }

    /// Manual advance out of a setup phase, forfeiting unused seeds
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        self.phase = match self.phase {
            Phase::SetupP1 => Phase::SetupP2,
            Phase::SetupP2 => Phase::Running,
            _ => return Err(self.invalid()),
        };
        Ok(self.phase)
    }

    /// Automatic advance when `player` has placed their last seed.
    /// Returns the new phase if a transition happened.
    pub fn seeds_exhausted(&mut self, player: Player) -> Option<Phase> {
        if self.phase.setup_player() == Some(player) {
            self.advance().ok()
        } else {
            None
        }
    }

    /// Running <-> Paused
    pub fn toggle_run_pause(&mut self) -> Result<Phase, GameError> {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return Err(self.invalid()),
        };
        Ok(self.phase)
    }

    /// End-of-step check. Moves to Finished once nothing is alive.
    pub fn check_end(&mut self, alive: usize) -> bool {
        assert!(self.phase.is_simulating(), "end check outside simulation: {:?}", self.phase);
        if alive == 0 {
            self.phase = Phase::Finished;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::SetupP1;
    }

    fn invalid(&self) -> GameError {
        GameError::InvalidPhaseForOperation { phase: self.phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> PhaseMachine {
        let mut machine = PhaseMachine::new();
        machine.advance().unwrap();
        machine.advance().unwrap();
        machine
    }

    #[test]
    fn test_initial_phase_is_setup_p1() {
        let machine = PhaseMachine::new();
        assert_eq!(machine.phase(), Phase::SetupP1);
        assert!(!machine.should_auto_advance());
    }

    #[test]
    fn test_manual_advance_through_setup() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.advance(), Ok(Phase::SetupP2));
        assert_eq!(machine.advance(), Ok(Phase::Running));
        assert_eq!(
            machine.advance(),
            Err(GameError::InvalidPhaseForOperation { phase: Phase::Running })
        );
        assert_eq!(machine.phase(), Phase::Running);
    }

    #[test]
    fn test_seeds_exhausted_only_for_active_player() {
        let mut machine = PhaseMachine::new();
        assert_eq!(machine.seeds_exhausted(Player::P2), None);
        assert_eq!(machine.seeds_exhausted(Player::P1), Some(Phase::SetupP2));
        assert_eq!(machine.seeds_exhausted(Player::P2), Some(Phase::Running));
        assert_eq!(machine.seeds_exhausted(Player::P2), None);
    }

    #[test]
    fn test_toggle_run_pause() {
        let mut machine = running();
        assert!(machine.should_auto_advance());
        assert_eq!(machine.toggle_run_pause(), Ok(Phase::Paused));
        assert!(!machine.should_auto_advance());
        assert!(machine.require_simulating().is_ok());
        assert_eq!(machine.toggle_run_pause(), Ok(Phase::Running));
    }

    #[test]
    fn test_toggle_rejected_during_setup() {
        let mut machine = PhaseMachine::new();
        assert!(machine.toggle_run_pause().is_err());
        assert_eq!(machine.phase(), Phase::SetupP1);
    }

    #[test]
    fn test_check_end() {
        let mut machine = running();
        assert!(!machine.check_end(3));
        assert_eq!(machine.phase(), Phase::Running);
        assert!(machine.check_end(0));
        assert_eq!(machine.phase(), Phase::Finished);
        assert!(machine.require_simulating().is_err());
        assert!(machine.toggle_run_pause().is_err());

        machine.reset();
        assert_eq!(machine.phase(), Phase::SetupP1);
    }

    #[test]
    fn test_require_setup_player() {
        let machine = PhaseMachine::new();
        assert!(machine.require_setup_player(Player::P1).is_ok());
        assert!(machine.require_setup_player(Player::P2).is_err());
        assert!(running().require_setup_player(Player::P1).is_err());
    }
}
