//! Turn rules: card selection, pattern cursors, and the state machine.
//!
//! `TurnEngine` is the entry point. It delegates card picks to
//! `CardSelector` and scripted-step bookkeeping to the `cursor` module,
//! and never interprets anything the content store does not hand it.

pub mod cursor;
pub mod engine;
pub mod selector;

pub use cursor::{CursorResolution, StepCursor};
pub use engine::{GameResult, TurnEngine, PENALTY};
pub use selector::CardSelector;
