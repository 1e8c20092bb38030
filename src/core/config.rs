//! Game settings chosen at setup.
//!
//! Callers provide a `GameSettings` when creating a game:
//! - Players in turn order and the number of rounds
//! - A fallback difficulty filter and an optional difficulty preset
//! - Pattern assignments for players who get scripted dares
//! - An optional RNG seed for reproducible games
//!
//! Settings are frozen into the game state and never change afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::SettingsError;
use super::player::{Player, PlayerId};
use crate::cards::{Difficulty, PatternId, PresetId};

/// Largest round count a game accepts. Scores start at the round count.
pub const MAX_ROUNDS: u32 = i32::MAX as u32;

/// Difficulty filter for dare draws: one difficulty, or anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifficultyFilter {
    #[default]
    Any,
    #[serde(untagged)]
    Only(Difficulty),
}

impl DifficultyFilter {
    /// The single difficulty this filter selects, if any.
    #[must_use]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            DifficultyFilter::Any => None,
            DifficultyFilter::Only(d) => Some(d),
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        DifficultyFilter::Only(difficulty)
    }
}

impl std::fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyFilter::Any => f.write_str("ANY"),
            DifficultyFilter::Only(d) => write!(f, "{}", d),
        }
    }
}

/// Complete settings for one game.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::core::{GameSettings, Player, PlayerId};
/// use dare_or_dodge::cards::Difficulty;
///
/// let settings = GameSettings::new(
///     vec![Player::new("a", "Alice", 0), Player::new("b", "Bob", 1)],
///     5,
/// )
/// .with_difficulty(Difficulty::Medium)
/// .with_preset("p3")
/// .with_pattern("a", "warmup")
/// .with_seed(7);
///
/// assert_eq!(settings.number_of_rounds, 5);
/// assert!(settings.pattern_for(&PlayerId::new("a")).is_some());
/// assert!(settings.pattern_for(&PlayerId::new("b")).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Players in turn order.
    pub players: Vec<Player>,

    /// Rounds to play. Every player takes one turn per round.
    pub number_of_rounds: u32,

    /// Used when the preset matches no active dares.
    #[serde(default)]
    pub difficulty_filter: DifficultyFilter,

    /// Preset restricting dare difficulties for the whole game.
    #[serde(default)]
    pub difficulty_preset_id: Option<PresetId>,

    /// Scripted pattern per player. Normalized at game creation so every
    /// player has an entry.
    #[serde(default)]
    pub player_pattern_assignments: BTreeMap<PlayerId, Option<PatternId>>,

    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameSettings {
    /// Create settings with no filters, no patterns, and an entropy seed.
    #[must_use]
    pub fn new(players: Vec<Player>, number_of_rounds: u32) -> Self {
        Self {
            players,
            number_of_rounds,
            difficulty_filter: DifficultyFilter::Any,
            difficulty_preset_id: None,
            player_pattern_assignments: BTreeMap::new(),
            seed: None,
        }
    }

    /// Restrict dare draws to one difficulty when no preset applies.
    #[must_use]
    pub fn with_difficulty(mut self, filter: impl Into<DifficultyFilter>) -> Self {
        self.difficulty_filter = filter.into();
        self
    }

    /// Use a difficulty preset.
    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<PresetId>) -> Self {
        self.difficulty_preset_id = Some(preset.into());
        self
    }

    /// Assign a pattern to a player.
    #[must_use]
    pub fn with_pattern(
        mut self,
        player: impl Into<PlayerId>,
        pattern: impl Into<PatternId>,
    ) -> Self {
        self.player_pattern_assignments
            .insert(player.into(), Some(pattern.into()));
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pattern assigned to a player, if any.
    #[must_use]
    pub fn pattern_for(&self, player: &PlayerId) -> Option<&PatternId> {
        self.player_pattern_assignments
            .get(player)
            .and_then(Option::as_ref)
    }

    /// Copy with an explicit assignment entry (default `None`) for every player.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut settings = self.clone();
        for player in &self.players {
            settings
                .player_pattern_assignments
                .entry(player.id.clone())
                .or_insert(None);
        }
        settings
    }

    /// Check the settings can drive a game.
    ///
    /// Only conditions the engine itself cannot survive are rejected.
    /// Requiring at least two players is left to the setup screen.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.players.is_empty() {
            return Err(SettingsError::NoPlayers);
        }
        if self.number_of_rounds == 0 {
            return Err(SettingsError::ZeroRounds);
        }
        if self.number_of_rounds > MAX_ROUNDS {
            return Err(SettingsError::TooManyRounds {
                rounds: self.number_of_rounds,
                max: MAX_ROUNDS,
            });
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.id == player.id) {
                return Err(SettingsError::DuplicatePlayer(player.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_players() -> Vec<Player> {
        vec![Player::new("a", "Alice", 0), Player::new("b", "Bob", 1)]
    }

    #[test]
    fn test_difficulty_filter_serde() {
        assert_eq!(serde_json::to_string(&DifficultyFilter::Any).unwrap(), "\"ANY\"");
        assert_eq!(
            serde_json::to_string(&DifficultyFilter::Only(Difficulty::Hard)).unwrap(),
            "\"HARD\""
        );

        let parsed: DifficultyFilter = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, DifficultyFilter::Only(Difficulty::Medium));
        let parsed: DifficultyFilter = serde_json::from_str("\"ANY\"").unwrap();
        assert_eq!(parsed, DifficultyFilter::Any);
    }

    #[test]
    fn test_normalized_fills_every_player() {
        let settings = GameSettings::new(two_players(), 3).with_pattern("b", "pat");
        let normalized = settings.normalized();

        assert_eq!(normalized.player_pattern_assignments.len(), 2);
        assert_eq!(normalized.player_pattern_assignments[&PlayerId::new("a")], None);
        assert_eq!(normalized.pattern_for(&PlayerId::new("b")), Some(&PatternId::new("pat")));

        // Input untouched
        assert_eq!(settings.player_pattern_assignments.len(), 1);
    }

    #[test]
    fn test_validate() {
        assert_eq!(GameSettings::new(two_players(), 3).validate(), Ok(()));
        let solo = vec![Player::new("solo", "Solo", 0)];
        assert_eq!(GameSettings::new(solo, 1).validate(), Ok(()));
        assert_eq!(
            GameSettings::new(Vec::new(), 3).validate(),
            Err(SettingsError::NoPlayers)
        );
        assert_eq!(
            GameSettings::new(two_players(), 0).validate(),
            Err(SettingsError::ZeroRounds)
        );

        let dupes = vec![Player::new("a", "A", 0), Player::new("a", "Also A", 1)];
        assert_eq!(
            GameSettings::new(dupes, 2).validate(),
            Err(SettingsError::DuplicatePlayer(PlayerId::new("a")))
        );
    }

    #[test]
    fn test_round_count_must_fit_a_score() {
        assert_eq!(GameSettings::new(two_players(), MAX_ROUNDS).validate(), Ok(()));
        assert_eq!(
            GameSettings::new(two_players(), MAX_ROUNDS + 1).validate(),
            Err(SettingsError::TooManyRounds {
                rounds: MAX_ROUNDS + 1,
                max: MAX_ROUNDS,
            })
        );
    }

    #[test]
    fn test_settings_json_defaults() {
        let json = r#"{
            "players": [ { "id": "a", "name": "Alice", "score": 0, "turnIndex": 0 } ],
            "numberOfRounds": 4
        }"#;
        let settings: GameSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.difficulty_filter, DifficultyFilter::Any);
        assert!(settings.difficulty_preset_id.is_none());
        assert!(settings.seed.is_none());
    }
}
