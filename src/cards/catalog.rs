//! In-memory catalog of dares, dodges, presets, and patterns.
//!
//! The `Catalog` is the default `ContentStore`. It keeps every list in
//! insertion order (draws and admin listings depend on it) and an
//! `FxHashMap` index per card type for id lookups.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{Card, CardId, CardType};
use super::migration::{migrate_document, CatalogDocument, CURRENT_VERSION};
use super::pattern::{CardPattern, PatternId};
use super::preset::{DifficultyPreset, PresetId};
use super::seed;
use super::store::ContentStore;
use crate::core::CatalogError;

/// Ordered cards of one type with an id index.
#[derive(Clone, Debug, Default)]
struct CardList {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardList {
    fn from_cards(cards: Vec<Card>) -> Self {
        let mut list = Self::default();
        for card in cards {
            list.upsert(card);
        }
        list
    }

    fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.cards[i]),
            None => None,
        }
    }

    /// Replace in place, or append. Returns true if a card was replaced.
    fn upsert(&mut self, card: Card) -> bool {
        if let Some(&i) = self.index.get(&card.id) {
            self.cards[i] = card;
            true
        } else {
            self.index.insert(card.id.clone(), self.cards.len());
            self.cards.push(card);
            false
        }
    }

    fn remove(&mut self, id: &CardId) -> Option<Card> {
        let pos = self.index.remove(id)?;
        let card = self.cards.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(card)
    }
}

/// In-memory content store with the write operations of the admin surface.
///
/// ## Example
///
/// ```
/// use dare_or_dodge::cards::{Card, CardId, CardType, Catalog, ContentStore, Difficulty};
///
/// let mut catalog = Catalog::new();
/// catalog.upsert_card(Card::dare("d1", "Hold your breath for 20 seconds.", Difficulty::Easy));
/// catalog.upsert_card(Card::dodge("do1", "Do 20 jumping jacks.", Difficulty::Easy));
///
/// assert_eq!(catalog.active_dares().len(), 1);
///
/// catalog.set_card_active(CardType::Dare, &CardId::new("d1"), false);
/// assert!(catalog.active_dares().is_empty());
///
/// // Still reachable by id, so patterns can script it.
/// assert!(catalog.card_by_id(CardType::Dare, &CardId::new("d1")).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    dares: CardList,
    dodges: CardList,
    presets: Vec<DifficultyPreset>,
    patterns: Vec<CardPattern>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in starter content.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_document(CatalogDocument {
            version: CURRENT_VERSION,
            dares: seed::dares(),
            dodges: seed::dodges(),
            presets: seed::presets(),
            patterns: Vec::new(),
        })
    }

    /// Build a catalog from a canonical document.
    #[must_use]
    pub fn from_document(doc: CatalogDocument) -> Self {
        Self {
            dares: CardList::from_cards(doc.dares),
            dodges: CardList::from_cards(doc.dodges),
            presets: doc.presets,
            patterns: doc.patterns,
        }
    }

    /// Load a catalog from JSON, migrating older document versions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc = migrate_document(json)?;
        debug!(
            dares = doc.dares.len(),
            dodges = doc.dodges.len(),
            presets = doc.presets.len(),
            patterns = doc.patterns.len(),
            "Loaded catalog"
        );
        Ok(Self::from_document(doc))
    }

    /// Snapshot the catalog as a canonical document.
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: CURRENT_VERSION,
            dares: self.dares.cards.clone(),
            dodges: self.dodges.cards.clone(),
            presets: self.presets.clone(),
            patterns: self.patterns.clone(),
        }
    }

    /// Serialize the catalog as a current-version JSON document.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    fn list(&self, card_type: CardType) -> &CardList {
        match card_type {
            CardType::Dare => &self.dares,
            CardType::Dodge => &self.dodges,
        }
    }

    fn list_mut(&mut self, card_type: CardType) -> &mut CardList {
        match card_type {
            CardType::Dare => &mut self.dares,
            CardType::Dodge => &mut self.dodges,
        }
    }

    // === Cards ===

    /// All dare cards, active or not.
    #[must_use]
    pub fn dares(&self) -> &[Card] {
        &self.dares.cards
    }

    /// All dodge cards, active or not.
    #[must_use]
    pub fn dodges(&self) -> &[Card] {
        &self.dodges.cards
    }

    /// Add a card, or replace the card of the same type with the same id.
    ///
    /// Returns true if an existing card was replaced.
    pub fn upsert_card(&mut self, card: Card) -> bool {
        self.list_mut(card.card_type).upsert(card)
    }

    /// Toggle whether a card takes part in random draws.
    ///
    /// Returns false if no such card exists.
    pub fn set_card_active(&mut self, card_type: CardType, id: &CardId, active: bool) -> bool {
        match self.list_mut(card_type).get_mut(id) {
            Some(card) => {
                card.active = active;
                true
            }
            None => false,
        }
    }

    /// Remove a card.
    ///
    /// Patterns that reference it are left alone; the engine treats the
    /// reference as dangling and draws randomly instead.
    pub fn remove_card(&mut self, card_type: CardType, id: &CardId) -> Option<Card> {
        self.list_mut(card_type).remove(id)
    }

    // === Presets ===

    /// All presets.
    #[must_use]
    pub fn presets(&self) -> &[DifficultyPreset] {
        &self.presets
    }

    /// Add a preset, or replace the one with the same id.
    pub fn upsert_preset(&mut self, preset: DifficultyPreset) -> bool {
        match self.presets.iter_mut().find(|p| p.id == preset.id) {
            Some(existing) => {
                *existing = preset;
                true
            }
            None => {
                self.presets.push(preset);
                false
            }
        }
    }

    /// Remove a preset.
    pub fn remove_preset(&mut self, id: &PresetId) -> Option<DifficultyPreset> {
        let pos = self.presets.iter().position(|p| &p.id == id)?;
        Some(self.presets.remove(pos))
    }

    // === Patterns ===

    /// All patterns.
    #[must_use]
    pub fn patterns(&self) -> &[CardPattern] {
        &self.patterns
    }

    /// Add a pattern, or replace the one with the same id.
    pub fn upsert_pattern(&mut self, pattern: CardPattern) -> bool {
        match self.patterns.iter_mut().find(|p| p.id == pattern.id) {
            Some(existing) => {
                *existing = pattern;
                true
            }
            None => {
                self.patterns.push(pattern);
                false
            }
        }
    }

    /// Remove a pattern.
    pub fn remove_pattern(&mut self, id: &PatternId) -> Option<CardPattern> {
        let pos = self.patterns.iter().position(|p| &p.id == id)?;
        Some(self.patterns.remove(pos))
    }
}

impl ContentStore for Catalog {
    fn active_cards(&self, card_type: CardType) -> Vec<Card> {
        self.list(card_type)
            .cards
            .iter()
            .filter(|c| c.active)
            .cloned()
            .collect()
    }

    fn card_by_id(&self, card_type: CardType, id: &CardId) -> Option<Card> {
        self.list(card_type).get(id).cloned()
    }

    fn preset_by_id(&self, id: &PresetId) -> Option<DifficultyPreset> {
        self.presets.iter().find(|p| &p.id == id).cloned()
    }

    fn pattern_by_id(&self, id: &PatternId) -> Option<CardPattern> {
        self.patterns.iter().find(|p| &p.id == id).cloned()
    }
}
