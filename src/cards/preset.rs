//! Difficulty presets - named sets of allowed dare difficulties.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::Difficulty;

/// Unique identifier for a difficulty preset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(pub String);

impl PresetId {
    /// Create a new preset ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Preset({})", self.0)
    }
}

impl From<&str> for PresetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PresetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A reusable restriction on which dare difficulties may be drawn.
///
/// Snapshotted into the game state at creation, so editing the catalog
/// mid-game has no effect on a running game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyPreset {
    pub id: PresetId,
    pub name: String,
    /// At most three entries, so this never spills to the heap.
    pub allowed_difficulties: SmallVec<[Difficulty; 3]>,
}

impl DifficultyPreset {
    /// Create a new preset. Duplicate difficulties are dropped.
    #[must_use]
    pub fn new(
        id: impl Into<PresetId>,
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = Difficulty>,
    ) -> Self {
        let mut allowed_difficulties: SmallVec<[Difficulty; 3]> = SmallVec::new();
        for difficulty in allowed {
            if !allowed_difficulties.contains(&difficulty) {
                allowed_difficulties.push(difficulty);
            }
        }

        Self {
            id: id.into(),
            name: name.into(),
            allowed_difficulties,
        }
    }

    /// Does this preset allow the given difficulty?
    #[must_use]
    pub fn allows(&self, difficulty: Difficulty) -> bool {
        self.allowed_difficulties.contains(&difficulty)
    }

    /// The allowed set, or `None` if the preset allows nothing.
    ///
    /// An empty preset places no restriction on draws.
    #[must_use]
    pub fn restriction(&self) -> Option<&[Difficulty]> {
        if self.allowed_difficulties.is_empty() {
            None
        } else {
            Some(self.allowed_difficulties.as_slice())
        }
    }
}
