//! Card content: definitions, presets, patterns, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: A dare or dodge with a difficulty rating
//! - `DifficultyPreset`: Named set of allowed dare difficulties
//! - `CardPattern`: Scripted dare sequence assigned to a player
//! - `ContentStore`: Read interface the engine draws from
//! - `Catalog`: In-memory `ContentStore` with admin write operations
//!
//! ## Dangling References
//!
//! Patterns refer to cards by id. Removing a card never rewrites the
//! patterns that mention it; the engine falls back to a random draw.

pub mod catalog;
pub mod definition;
pub mod migration;
pub mod pattern;
pub mod preset;
pub mod seed;
pub mod store;

pub use catalog::Catalog;
pub use definition::{Card, CardId, CardType, Difficulty, NO_CARDS_ID, NO_CARDS_TEXT};
pub use migration::CatalogDocument;
pub use pattern::{CardPattern, FallbackMode, PatternId, PatternStep};
pub use preset::{DifficultyPreset, PresetId};
pub use store::ContentStore;
