//! Player actions and the action history.
//!
//! A turn offers at most two choices at a time; which ones depends on the
//! phase. `TurnEngine::legal_actions` lists them and `TurnEngine::apply`
//! dispatches an action to its transition.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// An action the current player can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Accept the dare shown.
    DoDare,
    /// Refuse the dare shown: lose a point and take a dodge.
    Dodge,
    /// Report whether an accepted dare was completed.
    ResolveDare { completed: bool },
    /// Finish the dodge shown.
    CompleteDodge,
}

impl GameAction {
    /// Does this action cost the player a point?
    #[must_use]
    pub fn is_penalty(self) -> bool {
        matches!(self, GameAction::Dodge | GameAction::ResolveDare { completed: false })
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameAction::DoDare => f.write_str("DoDare"),
            GameAction::Dodge => f.write_str("Dodge"),
            GameAction::ResolveDare { completed } => {
                write!(f, "ResolveDare(completed={})", completed)
            }
            GameAction::CompleteDodge => f.write_str("CompleteDodge"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging. Records are appended by the engine and
/// never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: GameAction,

    /// Round in which the action was taken.
    pub round: u32,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: GameAction, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_actions() {
        assert!(GameAction::Dodge.is_penalty());
        assert!(GameAction::ResolveDare { completed: false }.is_penalty());
        assert!(!GameAction::ResolveDare { completed: true }.is_penalty());
        assert!(!GameAction::DoDare.is_penalty());
        assert!(!GameAction::CompleteDodge.is_penalty());
    }

    #[test]
    fn test_display() {
        assert_eq!(GameAction::DoDare.to_string(), "DoDare");
        assert_eq!(
            GameAction::ResolveDare { completed: false }.to_string(),
            "ResolveDare(completed=false)"
        );
    }

    #[test]
    fn test_action_record_serde() {
        let record = ActionRecord::new(PlayerId::new("a"), GameAction::Dodge, 2, 5);
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
