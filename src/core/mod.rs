//! Core engine types: players, settings, state, actions, RNG, errors.
//!
//! Everything a game snapshot is made of lives here. The rules that move
//! a snapshot forward live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, GameAction};
pub use config::{DifficultyFilter, GameSettings, MAX_ROUNDS};
pub use error::{CatalogError, EngineError, SettingsError};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState};
