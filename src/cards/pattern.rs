//! Card patterns - scripted dare sequences assigned to a player.
//!
//! A pattern overrides random dare draws for the player it is assigned
//! to. Each step names a dare and, optionally, the dodge to hand out if
//! that dare is dodged or failed. What happens after the last step is
//! governed by the pattern's `FallbackMode`.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Unique identifier for a card pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub String);

impl PatternId {
    /// Create a new pattern ID.
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

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({})", self.0)
    }
}

impl From<&str> for PatternId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PatternId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Policy applied once a player has used every step of their pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Revert to random draws for the rest of the game.
    #[default]
    Random,
    /// Start again from the first step.
    Loop,
    /// Revert to random draws for the rest of the game.
    Stop,
}

impl FallbackMode {
    /// Does this mode restart the pattern when it runs out?
    #[must_use]
    pub fn restarts(self) -> bool {
        matches!(self, FallbackMode::Loop)
    }
}

/// One scripted turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStep {
    pub id: String,

    pub dare_card_id: CardId,

    /// If absent, a dodge is drawn at random when one is needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dodge_card_id: Option<CardId>,
}

impl PatternStep {
    /// Create a step with a scripted dare and no scripted dodge.
    #[must_use]
    pub fn new(id: impl Into<String>, dare: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            dare_card_id: dare.into(),
            dodge_card_id: None,
        }
    }

    /// Pair a scripted dodge with this step (builder pattern).
    #[must_use]
    pub fn with_dodge(mut self, dodge: impl Into<CardId>) -> Self {
        self.dodge_card_id = Some(dodge.into());
        self
    }
}

/// A named, ordered sequence of scripted steps.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::cards::{CardPattern, FallbackMode, PatternStep};
///
/// let pattern = CardPattern::new("warmup", "Warm Up")
///     .with_step(PatternStep::new("s1", "d1"))
///     .with_step(PatternStep::new("s2", "d2").with_dodge("do4"))
///     .with_fallback(FallbackMode::Loop);
///
/// assert_eq!(pattern.len(), 2);
/// assert!(pattern.fallback_mode.restarts());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPattern {
    pub id: PatternId,
    pub name: String,
    pub steps: Vec<PatternStep>,
    pub fallback_mode: FallbackMode,
}

impl CardPattern {
    /// Create an empty pattern with the `random` fallback.
    #[must_use]
    pub fn new(id: impl Into<PatternId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            steps: Vec::new(),
            fallback_mode: FallbackMode::default(),
        }
    }

    /// Append a step (builder pattern).
    #[must_use]
    pub fn with_step(mut self, step: PatternStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the fallback mode (builder pattern).
    #[must_use]
    pub fn with_fallback(mut self, mode: FallbackMode) -> Self {
        self.fallback_mode = mode;
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Does the pattern have no steps?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by position.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&PatternStep> {
        self.steps.get(index)
    }
}
