//! Turn state machine.
//!
//! `TurnEngine` owns the rules of a turn:
//! - Which actions are legal in each phase
//! - How an action changes scores, cards, and pattern cursors
//! - When the turn passes and when the game ends
//!
//! Every operation takes a `&GameState` and returns a new one. The input
//! is never modified, including on error.

use tracing::{debug, trace, warn};

use super::cursor::{self, StepCursor};
use super::selector::CardSelector;
use crate::cards::{Card, CardId, CardType, ContentStore, DifficultyPreset};
use crate::core::{
    EngineError, GameAction, GamePhase, GameRng, GameSettings, GameState, PlayerId,
};

/// Points lost for dodging or failing a dare.
pub const PENALTY: i32 = 1;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Several players share the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.contains(player),
        }
    }
}

/// The turn state machine, bound to a content store.
///
/// The store is only read. It is passed in rather than owned so a host
/// can keep editing its catalog between games.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::cards::Catalog;
/// use dare_or_dodge::core::{GamePhase, GameSettings, Player};
/// use dare_or_dodge::rules::TurnEngine;
///
/// let catalog = Catalog::seeded();
/// let engine = TurnEngine::new(&catalog);
///
/// let settings = GameSettings::new(
///     vec![Player::new("a", "Alice", 0), Player::new("b", "Bob", 1)],
///     1,
/// )
/// .with_seed(3);
///
/// let state = engine.create_initial_game_state(settings)?;
/// let state = engine.start_first_turn(&state)?;
/// assert_eq!(state.phase(), GamePhase::TurnDareShown);
///
/// let state = engine.player_chooses_dodge(&state)?;
/// let state = engine.complete_dodge(&state)?;
/// let state = engine.player_chooses_do_dare(&state)?;
/// let state = engine.resolve_dare_result(&state, true)?;
///
/// assert!(state.is_game_over());
/// assert_eq!(state.standings()[0].name, "Bob");
/// # Ok::<(), dare_or_dodge::core::EngineError>(())
/// ```
pub struct TurnEngine<'s, S: ContentStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ContentStore + ?Sized> TurnEngine<'s, S> {
    /// Create an engine reading from `store`.
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    fn selector(&self) -> CardSelector<'s, S> {
        CardSelector::new(self.store)
    }

    // === Setup ===

    /// Build the SETUP state for a new game.
    ///
    /// Every player starts with a score equal to the number of rounds.
    /// The difficulty preset is looked up once and frozen into the state;
    /// an unknown preset id means no preset.
    pub fn create_initial_game_state(
        &self,
        settings: GameSettings,
    ) -> Result<GameState, EngineError> {
        settings.validate()?;
        let settings = settings.normalized();

        let preset: Option<DifficultyPreset> = match &settings.difficulty_preset_id {
            Some(id) => {
                let preset = self.store.preset_by_id(id);
                if preset.is_none() {
                    warn!(preset = %id, "Difficulty preset not found, playing without one");
                }
                preset
            }
            None => None,
        };

        let rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        debug!(
            players = settings.players.len(),
            rounds = settings.number_of_rounds,
            seed = rng.seed(),
            "Created game"
        );

        Ok(GameState::new(settings, preset, rng))
    }

    /// Draw the first dare for the first player.
    ///
    /// Only valid once, straight after `create_initial_game_state`.
    pub fn start_first_turn(&self, state: &GameState) -> Result<GameState, EngineError> {
        if state.phase != GamePhase::Setup {
            return Err(EngineError::AlreadyStarted { phase: state.phase });
        }

        let mut next = state.clone();
        self.draw_dare_for_current_player(&mut next);
        Ok(next)
    }

    // === Player Actions ===

    /// Accept the dare shown. Score and card are unchanged.
    pub fn player_chooses_do_dare(&self, state: &GameState) -> Result<GameState, EngineError> {
        let mut next = self.begin(state, GameAction::DoDare, GamePhase::TurnDareShown)?;
        next.phase = GamePhase::TurnDareResolution;
        Ok(next)
    }

    /// Refuse the dare shown: lose a point and draw a dodge.
    pub fn player_chooses_dodge(&self, state: &GameState) -> Result<GameState, EngineError> {
        let mut next = self.begin(state, GameAction::Dodge, GamePhase::TurnDareShown)?;
        self.take_penalty_dodge(&mut next);
        Ok(next)
    }

    /// Report the outcome of an accepted dare.
    ///
    /// A completed dare ends the turn. A failed one costs a point and
    /// forces a dodge, exactly like choosing to dodge.
    pub fn resolve_dare_result(
        &self,
        state: &GameState,
        completed: bool,
    ) -> Result<GameState, EngineError> {
        let mut next = self.begin(
            state,
            GameAction::ResolveDare { completed },
            GamePhase::TurnDareResolution,
        )?;

        if completed {
            self.advance_turn(&mut next);
        } else {
            self.take_penalty_dodge(&mut next);
        }
        Ok(next)
    }

    /// Finish the dodge shown. Dodges always count as done.
    pub fn complete_dodge(&self, state: &GameState) -> Result<GameState, EngineError> {
        let mut next = self.begin(state, GameAction::CompleteDodge, GamePhase::TurnDodgeShown)?;
        self.advance_turn(&mut next);
        Ok(next)
    }

    // === Dispatch ===

    /// Apply any player action.
    pub fn apply(&self, state: &GameState, action: GameAction) -> Result<GameState, EngineError> {
        match action {
            GameAction::DoDare => self.player_chooses_do_dare(state),
            GameAction::Dodge => self.player_chooses_dodge(state),
            GameAction::ResolveDare { completed } => self.resolve_dare_result(state, completed),
            GameAction::CompleteDodge => self.complete_dodge(state),
        }
    }

    /// Actions the current player may take.
    ///
    /// Empty in SETUP (call `start_first_turn`) and GAME_OVER.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<GameAction> {
        match state.phase {
            GamePhase::TurnDareShown => vec![GameAction::DoDare, GameAction::Dodge],
            GamePhase::TurnDareResolution => vec![
                GameAction::ResolveDare { completed: true },
                GameAction::ResolveDare { completed: false },
            ],
            GamePhase::TurnDodgeShown => vec![GameAction::CompleteDodge],
            GamePhase::Setup | GamePhase::GameOver => vec![],
        }
    }

    // === Internals ===

    /// Check the phase, clone the state, and record the action.
    fn begin(
        &self,
        state: &GameState,
        action: GameAction,
        required: GamePhase,
    ) -> Result<GameState, EngineError> {
        if state.phase != required {
            return Err(EngineError::IllegalTransition {
                action,
                phase: state.phase,
            });
        }

        let mut next = state.clone();
        if let Some(player) = next.current_player().map(|p| p.id.clone()) {
            trace!(player = %player, action = %action, round = next.current_round, "Action");
            next.record_action(player, action);
        }
        Ok(next)
    }

    fn take_penalty_dodge(&self, state: &mut GameState) {
        state.modify_current_score(-PENALTY);
        self.draw_dodge_for_current_player(state);
    }

    /// Show the scripted dodge for this turn if there is one, else a random one.
    fn draw_dodge_for_current_player(&self, state: &mut GameState) {
        let selector = self.selector();

        let scripted = state
            .scripted_dodge_id
            .as_ref()
            .and_then(|id| selector.select_scripted_card(CardType::Dodge, id));

        let card = match scripted {
            Some(card) => card,
            None => selector.select_random_card(
                &mut state.rng,
                CardType::Dodge,
                state.settings.difficulty_filter,
                None,
            ),
        };

        state.current_card = Some(card);
        state.phase = GamePhase::TurnDodgeShown;
    }

    /// Show a dare for the current player, from their pattern if possible.
    fn draw_dare_for_current_player(&self, state: &mut GameState) {
        let Some(player) = state.current_player().map(|p| p.id.clone()) else {
            return;
        };

        let scripted = self.scripted_dare(state, &player);

        let (card, dare_id, dodge_id) = match scripted {
            Some((card, dodge_id)) => {
                let dare_id = card.id.clone();
                (card, Some(dare_id), dodge_id)
            }
            None => {
                let card = self.selector().select_random_card(
                    &mut state.rng,
                    CardType::Dare,
                    state.settings.difficulty_filter,
                    state.active_preset.as_ref().and_then(DifficultyPreset::restriction),
                );
                (card, None, None)
            }
        };

        state.current_card = Some(card);
        state.scripted_dare_id = dare_id;
        state.scripted_dodge_id = dodge_id;
        state.phase = GamePhase::TurnDareShown;
    }

    /// Resolve the player's pattern for this turn.
    ///
    /// Stores the resolved cursor (the loop reset or exhaustion) and returns
    /// the scripted dare with its paired dodge id, or `None` for a random draw.
    fn scripted_dare(
        &self,
        state: &mut GameState,
        player: &PlayerId,
    ) -> Option<(Card, Option<CardId>)> {
        let pattern_id = state.settings.pattern_for(player)?.clone();

        let Some(pattern) = self.store.pattern_by_id(&pattern_id) else {
            warn!(
                player = %player,
                pattern = %pattern_id,
                "Assigned pattern not found, drawing randomly"
            );
            return None;
        };

        let current = state
            .pattern_cursors
            .get(player)
            .copied()
            .unwrap_or(StepCursor::START);
        let resolved = cursor::resolve(current, &pattern);

        if resolved.cursor != current {
            debug!(
                player = %player,
                pattern = %pattern_id,
                fallback = ?pattern.fallback_mode,
                cursor = ?resolved.cursor,
                "Pattern ran out, applied fallback"
            );
            state.pattern_cursors.insert(player.clone(), resolved.cursor);
        }

        let step = resolved.step?;
        let card = self
            .selector()
            .select_scripted_card(CardType::Dare, &step.dare_card_id)?;
        Some((card, step.dodge_card_id.clone()))
    }

    /// End the current turn and either start the next one or end the game.
    fn advance_turn(&self, state: &mut GameState) {
        if let Some(player) = state.current_player().map(|p| p.id.clone()) {
            let scripted = state.scripted_dare_id.is_some();
            if scripted && state.settings.pattern_for(&player).is_some() {
                let current = state
                    .pattern_cursors
                    .get(&player)
                    .copied()
                    .unwrap_or(StepCursor::START);
                if let StepCursor::At(_) = current {
                    state.pattern_cursors.insert(player, current.advanced());
                }
            }
        }

        let player_count = state.players.len();
        let current_index = state.current_player_index.unwrap_or(0);
        let next_index = (current_index + 1) % player_count;
        let next_round = if next_index == 0 {
            state.current_round + 1
        } else {
            state.current_round
        };

        state.current_card = None;
        state.scripted_dare_id = None;
        state.scripted_dodge_id = None;

        if next_round > state.settings.number_of_rounds {
            debug!(rounds = state.settings.number_of_rounds, "Game over");
            state.current_player_index = None;
            state.phase = GamePhase::GameOver;
            return;
        }

        state.current_player_index = Some(next_index);
        state.current_round = next_round;
        debug!(round = next_round, player_index = next_index, "Turn advanced");

        self.draw_dare_for_current_player(state);
    }
}
