//! Card definitions - the text a player is challenged with.
//!
//! A `Card` is immutable once drawn into a turn. The content store is the
//! only thing that edits the catalog; the engine just reads and clones.

use serde::{Deserialize, Serialize};

/// Id of the card returned when no card matches a draw.
pub const NO_CARDS_ID: &str = "fallback";

/// Text of the card returned when no card matches a draw.
pub const NO_CARDS_TEXT: &str = "No cards available! Please check admin settings.";

/// Unique identifier for a card.
///
/// Ids are only unique within a card type: a dare and a dodge may share one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The two kinds of challenge card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    /// The primary challenge a player may accept or dodge.
    Dare,
    /// The substitute challenge drawn after a dodge or a failed dare.
    Dodge,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Dare => f.write_str("DARE"),
            CardType::Dodge => f.write_str("DODGE"),
        }
    }
}

/// Difficulty rating of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("EASY"),
            Difficulty::Medium => f.write_str("MEDIUM"),
            Difficulty::Hard => f.write_str("HARD"),
        }
    }
}

fn default_active() -> bool {
    true
}

/// A single dare or dodge card.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::cards::{Card, CardType, Difficulty};
///
/// let card = Card::dare("d1", "Sing the chorus of a pop song loudly.", Difficulty::Easy);
/// assert_eq!(card.card_type, CardType::Dare);
/// assert!(card.active);
///
/// let retired = card.clone().inactive();
/// assert!(!retired.active);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    #[serde(rename = "type")]
    pub card_type: CardType,

    pub text: String,

    pub difficulty: Difficulty,

    /// Inactive cards are skipped by random draws but can still be scripted.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Card {
    /// Create a new active card.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        card_type: CardType,
        text: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            card_type,
            text: text.into(),
            difficulty,
            active: true,
        }
    }

    /// Create a new active dare card.
    #[must_use]
    pub fn dare(id: impl Into<CardId>, text: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(id, CardType::Dare, text, difficulty)
    }

    /// Create a new active dodge card.
    #[must_use]
    pub fn dodge(id: impl Into<CardId>, text: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(id, CardType::Dodge, text, difficulty)
    }

    /// Mark the card inactive (builder pattern).
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// The placeholder shown when a draw finds nothing to show.
    ///
    /// Always `EASY` so the game can carry on.
    #[must_use]
    pub fn no_cards_available(card_type: CardType) -> Self {
        Self::new(NO_CARDS_ID, card_type, NO_CARDS_TEXT, Difficulty::Easy)
    }

    /// Is this the "no cards available" placeholder?
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.as_str() == NO_CARDS_ID && self.text == NO_CARDS_TEXT
    }
}
