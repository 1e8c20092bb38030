//! The read interface the engine needs from whatever holds the catalog.

use super::definition::{Card, CardId, CardType};
use super::pattern::{CardPattern, PatternId};
use super::preset::{DifficultyPreset, PresetId};

/// Read access to dares, dodges, presets, and patterns.
///
/// The engine takes a store by reference on every call and never writes
/// through it. Implementations must return the same answer for repeated
/// queries with no write in between.
///
/// ## Implementation Notes
///
/// - `active_cards`: only cards with `active == true`, in catalog order
/// - `card_by_id`: must find inactive cards too, since patterns may script them
/// - All lookups return `None` for unknown ids rather than failing
pub trait ContentStore {
    /// Active cards of the given type, in catalog order.
    fn active_cards(&self, card_type: CardType) -> Vec<Card>;

    /// Look up a card by type and id, active or not.
    fn card_by_id(&self, card_type: CardType, id: &CardId) -> Option<Card>;

    /// Look up a difficulty preset.
    fn preset_by_id(&self, id: &PresetId) -> Option<DifficultyPreset>;

    /// Look up a card pattern.
    fn pattern_by_id(&self, id: &PatternId) -> Option<CardPattern>;

    // === Convenience Methods ===

    /// Active dare cards.
    fn active_dares(&self) -> Vec<Card> {
        self.active_cards(CardType::Dare)
    }

    /// Active dodge cards.
    fn active_dodges(&self) -> Vec<Card> {
        self.active_cards(CardType::Dodge)
    }
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn active_cards(&self, card_type: CardType) -> Vec<Card> {
        (**self).active_cards(card_type)
    }

    fn card_by_id(&self, card_type: CardType, id: &CardId) -> Option<Card> {
        (**self).card_by_id(card_type, id)
    }

    fn preset_by_id(&self, id: &PresetId) -> Option<DifficultyPreset> {
        (**self).preset_by_id(id)
    }

    fn pattern_by_id(&self, id: &PatternId) -> Option<CardPattern> {
        (**self).pattern_by_id(id)
    }
}
