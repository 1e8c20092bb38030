//! Engine and catalog error types.
//!
//! Only caller mistakes surface as errors. Content problems (empty pools,
//! dangling ids) are absorbed by the engine and never reach this module.

use thiserror::Error;

use super::action::GameAction;
use super::player::PlayerId;
use super::state::GamePhase;

/// Errors returned by `TurnEngine` operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A transition was called in a phase that does not offer it.
    ///
    /// The input state is left untouched.
    #[error("{action} is not legal in phase {phase}")]
    IllegalTransition {
        action: GameAction,
        phase: GamePhase,
    },

    /// `start_first_turn` was called on a game that already started.
    #[error("first turn can only be started from SETUP, game is in {phase}")]
    AlreadyStarted { phase: GamePhase },

    /// Settings that would leave the engine unable to run a game.
    #[error("invalid game settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

/// Reasons `GameSettings::validate` rejects a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("number of rounds must be at least 1")]
    ZeroRounds,

    /// Scores start at the round count, so it must fit in a score.
    #[error("{rounds} rounds exceeds the maximum of {max}")]
    TooManyRounds { rounds: u32, max: u32 },

    #[error("player id {} is used more than once", .0.as_str())]
    DuplicatePlayer(PlayerId),
}

/// Errors returned while loading or saving a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A card was listed under the wrong type (e.g. a DODGE in the dare list).
    #[error("card {id} is a {found} but was listed with the {expected} cards")]
    MisplacedCard {
        id: String,
        expected: crate::cards::CardType,
        found: crate::cards::CardType,
    },
}
