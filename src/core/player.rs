//! Player identification and per-player score.
//!
//! ## PlayerId
//!
//! Opaque string id chosen by the setup screen. Turn order is the order
//! of the player list, not anything encoded in the id.
//!
//! ## Player
//!
//! A seat at the table: id, display name, and running score.

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
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

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A player in the game.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::core::{Player, PlayerId};
///
/// let alice = Player::new("a", "Alice", 0);
/// assert_eq!(alice.id, PlayerId::new("a"));
/// assert_eq!(alice.score, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    /// Starts at the round count and drops by one per dodge or failed dare.
    pub score: i32,

    /// Seat number as entered at setup. Informational only.
    pub turn_index: usize,
}

impl Player {
    /// Create a new player with a zero score.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, turn_index: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            turn_index,
        }
    }

    /// Copy of this player with a different score.
    #[must_use]
    pub fn with_score(&self, score: i32) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }
}
