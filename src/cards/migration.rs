//! Versioned catalog migration.
//!
//! Catalog documents carry a `version` field. Version 1 (or no version at
//! all) is the legacy layout, where patterns may be stored in older shapes:
//!
//! - steps as plain dare-id strings instead of step objects
//! - a `playerSequences` object of step arrays instead of `steps`
//! - the fallback policy under `fallback` or `mode` instead of `fallbackMode`
//! - missing ids and names
//!
//! Migration runs once, when a document is loaded. Everything past this
//! module only ever sees canonical `CardPattern` values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::definition::{Card, CardId, CardType};
use super::pattern::{CardPattern, FallbackMode, PatternId, PatternStep};
use super::preset::DifficultyPreset;
use crate::core::CatalogError;

/// Version written by `Catalog::to_json`.
pub const CURRENT_VERSION: u32 = 2;

/// Version assumed for documents without a `version` field.
pub const LEGACY_VERSION: u32 = 1;

fn legacy_version() -> u32 {
    LEGACY_VERSION
}

/// A catalog document in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    pub dares: Vec<Card>,
    pub dodges: Vec<Card>,
    pub presets: Vec<DifficultyPreset>,
    pub patterns: Vec<CardPattern>,
}

/// A catalog document as found on disk, before pattern migration.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default = "legacy_version")]
    version: u32,
    #[serde(default)]
    dares: Vec<Card>,
    #[serde(default)]
    dodges: Vec<Card>,
    #[serde(default)]
    presets: Vec<DifficultyPreset>,
    #[serde(default)]
    patterns: Vec<Value>,
}

/// Parse a catalog document of any supported version into canonical form.
///
/// ```
/// use dare_or_dodge::cards::migration::{migrate_document, CURRENT_VERSION};
///
/// let legacy = r#"{
///     "patterns": [ { "id": "p", "name": "Old", "steps": ["d1", "d2"], "mode": "loop" } ]
/// }"#;
/// let doc = migrate_document(legacy).unwrap();
///
/// assert_eq!(doc.version, CURRENT_VERSION);
/// assert_eq!(doc.patterns[0].steps.len(), 2);
/// ```
pub fn migrate_document(json: &str) -> Result<CatalogDocument, CatalogError> {
    let raw: RawDocument = serde_json::from_str(json)?;

    if raw.version > CURRENT_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            found: raw.version,
            supported: CURRENT_VERSION,
        });
    }

    check_card_types(&raw.dares, CardType::Dare)?;
    check_card_types(&raw.dodges, CardType::Dodge)?;

    let patterns = if raw.version == CURRENT_VERSION {
        raw.patterns
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<CardPattern>, _>>()?
    } else {
        debug!(version = raw.version, count = raw.patterns.len(), "Migrating legacy patterns");
        raw.patterns
            .iter()
            .enumerate()
            .map(|(index, value)| normalize_legacy_pattern(value, index))
            .collect()
    };

    Ok(CatalogDocument {
        version: CURRENT_VERSION,
        dares: raw.dares,
        dodges: raw.dodges,
        presets: raw.presets,
        patterns,
    })
}

fn check_card_types(cards: &[Card], expected: CardType) -> Result<(), CatalogError> {
    match cards.iter().find(|c| c.card_type != expected) {
        Some(card) => Err(CatalogError::MisplacedCard {
            id: card.id.0.clone(),
            expected,
            found: card.card_type,
        }),
        None => Ok(()),
    }
}

/// Convert one legacy pattern value into a canonical `CardPattern`.
///
/// `index` is the pattern's position in its document and is only used to
/// name patterns that were stored without an id.
#[must_use]
pub fn normalize_legacy_pattern(raw: &Value, index: usize) -> CardPattern {
    let Some(obj) = raw.as_object() else {
        return CardPattern::new(format!("pattern-{index}"), "Untitled Pattern");
    };

    let id = non_empty_str(obj, "id")
        .map(PatternId::new)
        .unwrap_or_else(|| PatternId::new(format!("pattern-{index}")));
    let name = non_empty_str(obj, "name").unwrap_or("Pattern").to_string();

    let fallback_mode = ["fallbackMode", "fallback", "mode"]
        .iter()
        .find_map(|key| obj.get(*key).filter(|v| !v.is_null()))
        .and_then(Value::as_str)
        .map(parse_fallback)
        .unwrap_or_default();

    // Each raw step is paired with the index used to name it when it has no id.
    let raw_steps: Vec<(usize, &Value)> =
        if let Some(steps) = obj.get("steps").and_then(Value::as_array) {
            steps.iter().enumerate().collect()
        } else if let Some(sequences) = obj.get("playerSequences").and_then(Value::as_object) {
            // Sequences join in document order. The naming index is the
            // number of steps already collected plus the position in the
            // sequence.
            let mut collected = Vec::new();
            for sequence in sequences.values().filter_map(Value::as_array) {
                for (i, step) in sequence.iter().enumerate() {
                    collected.push((collected.len() + i, step));
                }
            }
            collected
        } else {
            Vec::new()
        };

    let steps = raw_steps
        .into_iter()
        .filter_map(|(i, step)| normalize_legacy_step(step, i, &id))
        .collect();

    CardPattern {
        id,
        name,
        steps,
        fallback_mode,
    }
}

fn normalize_legacy_step(raw: &Value, index: usize, pattern: &PatternId) -> Option<PatternStep> {
    match raw {
        Value::String(dare) => Some(PatternStep::new(
            format!("legacy-step-{index}-{dare}"),
            CardId::new(dare.as_str()),
        )),
        Value::Object(obj) => {
            let Some(dare) = non_empty_str(obj, "dareCardId") else {
                warn!(pattern = %pattern, step = index, "Dropping pattern step without a dare");
                return None;
            };
            let id = non_empty_str(obj, "id")
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}-step-{index}", pattern.as_str()));

            let mut step = PatternStep::new(id, CardId::new(dare));
            if let Some(dodge) = non_empty_str(obj, "dodgeCardId") {
                step = step.with_dodge(CardId::new(dodge));
            }
            Some(step)
        }
        _ => {
            warn!(pattern = %pattern, step = index, "Dropping unreadable pattern step");
            None
        }
    }
}

fn parse_fallback(raw: &str) -> FallbackMode {
    match raw {
        "loop" => FallbackMode::Loop,
        "stop" => FallbackMode::Stop,
        _ => FallbackMode::Random,
    }
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
