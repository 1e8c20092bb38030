//! Card selection: scripted lookups and filtered random draws.
//!
//! Random dare draws narrow the active pool step by step, and each step
//! only kicks in when the previous one left nothing:
//!
//! 1. the preset's allowed difficulties, if the preset allows any
//! 2. the single-difficulty filter, if it is not `ANY`
//! 3. the whole active pool
//!
//! Dodges ignore difficulty entirely. An empty pool yields the
//! "no cards available" placeholder instead of failing.

use tracing::warn;

use crate::cards::{Card, CardId, CardType, ContentStore, Difficulty};
use crate::core::{DifficultyFilter, GameRng};

/// Picks cards from a content store.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::cards::{CardType, Catalog, Difficulty};
/// use dare_or_dodge::core::{DifficultyFilter, GameRng};
/// use dare_or_dodge::rules::CardSelector;
///
/// let catalog = Catalog::seeded();
/// let selector = CardSelector::new(&catalog);
/// let mut rng = GameRng::new(1);
///
/// let card = selector.select_random_card(
///     &mut rng,
///     CardType::Dare,
///     DifficultyFilter::Any,
///     Some(&[Difficulty::Easy]),
/// );
/// assert_eq!(card.difficulty, Difficulty::Easy);
/// ```
pub struct CardSelector<'s, S: ContentStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ContentStore + ?Sized> CardSelector<'s, S> {
    /// Create a selector over a store.
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Draw a random active card of the given type.
    ///
    /// `filter` and `allowed` only apply to dares.
    pub fn select_random_card(
        &self,
        rng: &mut GameRng,
        card_type: CardType,
        filter: DifficultyFilter,
        allowed: Option<&[Difficulty]>,
    ) -> Card {
        let pool = self.store.active_cards(card_type);

        let candidates: Vec<&Card> = match card_type {
            CardType::Dare => narrow_dares(&pool, filter, allowed),
            CardType::Dodge => pool.iter().collect(),
        };

        match rng.choose(&candidates) {
            Some(card) => (*card).clone(),
            None => {
                warn!(card_type = %card_type, "No active cards to draw, showing placeholder");
                Card::no_cards_available(card_type)
            }
        }
    }

    /// Look up a scripted card by id.
    ///
    /// Inactive cards are still returned. A missing card yields `None` so
    /// the caller can fall back to a random draw.
    pub fn select_scripted_card(&self, card_type: CardType, id: &CardId) -> Option<Card> {
        let card = self.store.card_by_id(card_type, id);
        if card.is_none() {
            warn!(card_type = %card_type, card = %id, "Scripted card no longer exists");
        }
        card
    }
}

fn narrow_dares<'a>(
    pool: &'a [Card],
    filter: DifficultyFilter,
    allowed: Option<&[Difficulty]>,
) -> Vec<&'a Card> {
    let mut candidates: Vec<&Card> = match allowed {
        Some(allowed) if !allowed.is_empty() => pool
            .iter()
            .filter(|c| allowed.contains(&c.difficulty))
            .collect(),
        _ => pool.iter().collect(),
    };

    if candidates.is_empty() {
        if let Some(difficulty) = filter.difficulty() {
            candidates = pool.iter().filter(|c| c.difficulty == difficulty).collect();
        }
    }

    if candidates.is_empty() {
        candidates = pool.iter().collect();
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.upsert_card(Card::dare("e1", "easy one", Difficulty::Easy));
        catalog.upsert_card(Card::dare("e2", "easy two", Difficulty::Easy));
        catalog.upsert_card(Card::dare("m1", "medium", Difficulty::Medium));
        catalog.upsert_card(Card::dare("h1", "hard (retired)", Difficulty::Hard).inactive());
        catalog.upsert_card(Card::dodge("x1", "hard dodge", Difficulty::Hard));
        catalog
    }

    #[test]
    fn test_preset_filter_applies() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(5);

        for _ in 0..50 {
            let card = selector.select_random_card(
                &mut rng,
                CardType::Dare,
                DifficultyFilter::Any,
                Some(&[Difficulty::Medium]),
            );
            assert_eq!(card.id, CardId::new("m1"));
        }
    }

    #[test]
    fn test_empty_preset_match_falls_back_to_filter() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(5);

        // Only HARD card is inactive, so the preset matches nothing.
        for _ in 0..50 {
            let card = selector.select_random_card(
                &mut rng,
                CardType::Dare,
                DifficultyFilter::Only(Difficulty::Easy),
                Some(&[Difficulty::Hard]),
            );
            assert_eq!(card.difficulty, Difficulty::Easy);
        }
    }

    #[test]
    fn test_fall_back_to_unfiltered_pool() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(5);

        let card = selector.select_random_card(
            &mut rng,
            CardType::Dare,
            DifficultyFilter::Only(Difficulty::Hard),
            Some(&[Difficulty::Hard]),
        );
        assert!(!card.is_placeholder());
        assert!(card.active);
    }

    #[test]
    fn test_inactive_cards_never_drawn() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(11);

        for _ in 0..100 {
            let card =
                selector.select_random_card(&mut rng, CardType::Dare, DifficultyFilter::Any, None);
            assert_ne!(card.id, CardId::new("h1"));
        }
    }

    #[test]
    fn test_dodges_ignore_difficulty() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(5);

        let card = selector.select_random_card(
            &mut rng,
            CardType::Dodge,
            DifficultyFilter::Only(Difficulty::Easy),
            Some(&[Difficulty::Easy]),
        );
        assert_eq!(card.id, CardId::new("x1"));
    }

    #[test]
    fn test_empty_pool_yields_placeholder() {
        let catalog = Catalog::new();
        let selector = CardSelector::new(&catalog);
        let mut rng = GameRng::new(5);

        let card =
            selector.select_random_card(&mut rng, CardType::Dodge, DifficultyFilter::Any, None);
        assert!(card.is_placeholder());
        assert_eq!(card.card_type, CardType::Dodge);
        assert_eq!(card.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_scripted_lookup() {
        let catalog = catalog();
        let selector = CardSelector::new(&catalog);

        let retired = selector.select_scripted_card(CardType::Dare, &CardId::new("h1"));
        assert!(retired.is_some_and(|c| !c.active));

        assert!(selector
            .select_scripted_card(CardType::Dare, &CardId::new("gone"))
            .is_none());
        assert!(selector
            .select_scripted_card(CardType::Dodge, &CardId::new("e1"))
            .is_none());
    }
}
