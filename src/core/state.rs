//! Game state: one immutable snapshot per point in the game.
//!
//! ## GamePhase
//!
//! Where the current turn is, and therefore which actions are legal.
//!
//! ## GameState
//!
//! Complete game state:
//! - Players and scores, round, whose turn it is
//! - The card on screen and whether it came from a pattern
//! - Frozen settings and difficulty preset
//! - Pattern cursors per scripted player
//! - Action history and the RNG
//!
//! Transitions never modify a state in place. The engine clones the input
//! (cheap: `im` collections share structure) and edits the clone, so a
//! caller can keep older snapshots around for replay or debugging.

use std::sync::Arc;

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameSettings;
use super::player::{Player, PlayerId};
use super::rng::{GameRng, GameRngState};
use crate::cards::{Card, CardId, DifficultyPreset};
use crate::rules::{GameResult, StepCursor};

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Created, first dare not yet drawn.
    Setup,
    /// A dare is shown; the player may do it or dodge it.
    TurnDareShown,
    /// The player accepted; waiting to hear whether they completed it.
    TurnDareResolution,
    /// A dodge is shown; completing it ends the turn.
    TurnDodgeShown,
    /// All rounds played. Terminal.
    GameOver,
}

impl GamePhase {
    /// Is a card expected to be on screen in this phase?
    #[must_use]
    pub fn shows_card(self) -> bool {
        !matches!(self, GamePhase::Setup | GamePhase::GameOver)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Setup => "SETUP",
            GamePhase::TurnDareShown => "TURN_DARE_SHOWN",
            GamePhase::TurnDareResolution => "TURN_DARE_RESOLUTION",
            GamePhase::TurnDodgeShown => "TURN_DODGE_SHOWN",
            GamePhase::GameOver => "GAME_OVER",
        };
        f.write_str(name)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) players: Vector<Player>,
    pub(crate) settings: Arc<GameSettings>,
    pub(crate) current_round: u32,
    /// `None` once the game is over.
    pub(crate) current_player_index: Option<usize>,
    pub(crate) current_card: Option<Card>,
    pub(crate) phase: GamePhase,
    pub(crate) scripted_dare_id: Option<CardId>,
    pub(crate) scripted_dodge_id: Option<CardId>,
    pub(crate) active_preset: Option<DifficultyPreset>,
    /// Only players with a pattern assignment have an entry.
    pub(crate) pattern_cursors: ImHashMap<PlayerId, StepCursor>,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Build the SETUP state. Settings must already be validated and normalized.
    pub(crate) fn new(
        settings: GameSettings,
        active_preset: Option<DifficultyPreset>,
        rng: GameRng,
    ) -> Self {
        // `validate` caps the round count at `MAX_ROUNDS`, which fits an i32.
        let starting_score = i32::try_from(settings.number_of_rounds).unwrap_or(i32::MAX);
        let players = settings
            .players
            .iter()
            .map(|p| p.with_score(starting_score))
            .collect();
        let pattern_cursors = settings
            .player_pattern_assignments
            .iter()
            .filter(|(_, pattern)| pattern.is_some())
            .map(|(player, _)| (player.clone(), StepCursor::START))
            .collect();

        Self {
            players,
            settings: Arc::new(settings),
            current_round: 1,
            current_player_index: Some(0),
            current_card: None,
            phase: GamePhase::Setup,
            scripted_dare_id: None,
            scripted_dodge_id: None,
            active_preset,
            pattern_cursors,
            history: Vector::new(),
            rng,
        }
    }

    // === Players ===

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Index of the player whose turn it is. `None` once the game is over.
    #[must_use]
    pub fn current_player_index(&self) -> Option<usize> {
        self.current_player_index
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_index.and_then(|i| self.players.get(i))
    }

    // === Progression ===

    /// Settings the game was created with, normalized.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Is the game over?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    // === Cards ===

    /// The card on screen.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    /// Id of the scripted dare, if the current turn's dare came from a pattern.
    #[must_use]
    pub fn scripted_dare_id(&self) -> Option<&CardId> {
        self.scripted_dare_id.as_ref()
    }

    /// Id of the scripted dodge paired with the current turn's dare.
    #[must_use]
    pub fn scripted_dodge_id(&self) -> Option<&CardId> {
        self.scripted_dodge_id.as_ref()
    }

    /// Preset frozen at game creation.
    #[must_use]
    pub fn active_preset(&self) -> Option<&DifficultyPreset> {
        self.active_preset.as_ref()
    }

    /// Pattern cursor for a player. `None` if they have no pattern.
    #[must_use]
    pub fn pattern_cursor(&self, player: &PlayerId) -> Option<StepCursor> {
        self.pattern_cursors.get(player).copied()
    }

    // === History ===

    /// Every action taken so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    /// RNG position, for reproducing the rest of the game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Results ===

    /// Players sorted by score, highest first. Ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by(|a, b| b.score.cmp(&a.score));
        players
    }

    /// Winner(s) of a finished game. `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let top = self.players.iter().map(|p| p.score).max()?;
        let mut winners: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.score == top)
            .map(|p| p.id.clone())
            .collect();

        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }

    // === Mutation (engine only, on a fresh clone) ===

    /// Add `delta` to the current player's score.
    pub(crate) fn modify_current_score(&mut self, delta: i32) {
        if let Some(i) = self.current_player_index {
            if let Some(player) = self.players.get_mut(i) {
                player.score += delta;
            }
        }
    }

    /// Append to the action history.
    pub(crate) fn record_action(&mut self, player: PlayerId, action: crate::core::GameAction) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(player, action, self.current_round, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameAction, Player};

    fn settings() -> GameSettings {
        GameSettings::new(
            vec![
                Player::new("a", "Alice", 0),
                Player::new("b", "Bob", 1),
                Player::new("c", "Cleo", 2),
            ],
            4,
        )
        .with_pattern("b", "pat")
        .normalized()
    }

    fn new_state() -> GameState {
        GameState::new(settings(), None, GameRng::new(1))
    }

    #[test]
    fn test_new_state() {
        let state = new_state();

        assert_eq!(state.phase(), GamePhase::Setup);
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.current_player_index(), Some(0));
        assert!(state.current_card().is_none());
        assert!(state.players().all(|p| p.score == 4));
    }

    #[test]
    fn test_cursors_only_for_assigned_players() {
        let state = new_state();

        assert_eq!(state.pattern_cursor(&PlayerId::new("b")), Some(StepCursor::START));
        assert_eq!(state.pattern_cursor(&PlayerId::new("a")), None);
    }

    #[test]
    fn test_modify_score_on_clone() {
        let original = new_state();
        let mut next = original.clone();
        next.modify_current_score(-1);

        assert_eq!(next.player(&PlayerId::new("a")).unwrap().score, 3);
        assert_eq!(original.player(&PlayerId::new("a")).unwrap().score, 4);
    }

    #[test]
    fn test_standings_and_result() {
        let mut state = new_state();
        state.players[0].score = 1;
        state.players[1].score = 3;
        state.players[2].score = 3;

        let order: Vec<_> = state.standings().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);

        assert!(state.result().is_none());

        state.phase = GamePhase::GameOver;
        let result = state.result().unwrap();
        assert_eq!(
            result,
            GameResult::Winners(vec![PlayerId::new("b"), PlayerId::new("c")])
        );

        state.players[2].score = 0;
        assert_eq!(state.result(), Some(GameResult::Winner(PlayerId::new("b"))));
    }

    #[test]
    fn test_record_action_sequence() {
        let mut state = new_state();
        state.record_action(PlayerId::new("a"), GameAction::DoDare);
        state.record_action(PlayerId::new("a"), GameAction::ResolveDare { completed: true });

        let seqs: Vec<_> = state.history().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::TurnDodgeShown.to_string(), "TURN_DODGE_SHOWN");
        assert!(GamePhase::TurnDareShown.shows_card());
        assert!(!GamePhase::GameOver.shows_card());
    }
}
