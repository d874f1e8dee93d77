//! Game State Machine
//!
//! Two states: the round is running, or it is frozen on the game-over
//! overlay waiting for a restart. The machine is independent of the
//! windowing and event libraries; the shell only feeds it actions.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Active,
    Paused,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Collide,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
}

/// Game Finite State Machine
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Active,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Active, GameAction::Collide) => Some(FsmState::Paused),
            (FsmState::Paused, GameAction::Restart) => Some(FsmState::Active),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == FsmState::Active
    }

    pub fn is_paused(&self) -> bool {
        self.state == FsmState::Paused
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
