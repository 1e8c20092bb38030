//! # dare-or-dodge
//!
//! Turn/state engine for a pass-the-phone party game: each player in turn
//! faces a Dare, and may attempt it or Dodge it for a one point penalty
//! and a substitute challenge.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every action takes a `GameState` and returns a
//!    new one. Older snapshots stay valid for replay and debugging.
//!
//! 2. **Explicit content store**: The catalog of cards, presets, and
//!    patterns is passed to the engine, never reached through a global.
//!
//! 3. **Content problems are not errors**: An empty pool shows a
//!    placeholder card and a dangling pattern reference falls back to a
//!    random draw. Only caller mistakes (wrong phase, bad settings) fail.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cheap state clones via `im`.
//!
//! - **Seeded RNG**: Each state carries its own ChaCha8 RNG, so a game
//!   created with a fixed seed replays identically.
//!
//! ## Modules
//!
//! - `core`: Players, settings, state, actions, RNG, errors
//! - `cards`: Cards, presets, patterns, the content store and catalog
//! - `rules`: Card selection, pattern cursors, and the turn state machine

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, CatalogError, DifficultyFilter, EngineError, GameAction, GamePhase,
    GameRng, GameRngState, GameSettings, GameState, Player, PlayerId, SettingsError,
};

pub use crate::cards::{
    Card, CardId, CardPattern, CardType, Catalog, ContentStore, Difficulty, DifficultyPreset,
    FallbackMode, PatternId, PatternStep, PresetId,
};

pub use crate::rules::{CardSelector, GameResult, StepCursor, TurnEngine};
