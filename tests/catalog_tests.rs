//! Catalog loading, migration, and admin-edit integration tests.

use dare_or_dodge::cards::migration::CURRENT_VERSION;
use dare_or_dodge::cards::{
    CardId, CardPattern, CardType, Catalog, ContentStore, FallbackMode, PatternId,
    PatternStep,
};
use dare_or_dodge::core::{CatalogError, GameSettings, Player};
use dare_or_dodge::rules::TurnEngine;

const LEGACY: &str = r#"{
    "dares": [
        { "id": "d1", "type": "DARE", "text": "Sing", "difficulty": "EASY" },
        { "id": "d2", "type": "DARE", "text": "Dance", "difficulty": "HARD", "active": false }
    ],
    "dodges": [
        { "id": "do1", "type": "DODGE", "text": "Pushups", "difficulty": "EASY" }
    ],
    "presets": [
        { "id": "p1", "name": "Easy", "allowedDifficulties": ["EASY"] }
    ],
    "patterns": [
        { "id": "warmup", "name": "Warm Up", "steps": ["d2", "d1"], "fallback": "loop" },
        {
            "playerSequences": {
                "a": [ { "dareCardId": "d1", "dodgeCardId": "do1" }, { "dodgeCardId": "do1" } ]
            }
        }
    ]
}"#;

/// Test that a legacy document loads into canonical patterns.
#[test]
fn test_legacy_document_migrates() {
    let catalog = Catalog::from_json(LEGACY).unwrap();

    let warmup = catalog.pattern_by_id(&PatternId::new("warmup")).unwrap();
    assert_eq!(warmup.fallback_mode, FallbackMode::Loop);
    assert_eq!(warmup.steps[0].id, "legacy-step-0-d2");
    assert_eq!(warmup.steps[0].dare_card_id, CardId::new("d2"));
    assert!(warmup.steps[0].dodge_card_id.is_none());

    let unnamed = catalog.pattern_by_id(&PatternId::new("pattern-1")).unwrap();
    assert_eq!(unnamed.name, "Pattern");
    assert_eq!(unnamed.fallback_mode, FallbackMode::Random);
    // The step without a dare is dropped.
    assert_eq!(unnamed.steps.len(), 1);
    assert_eq!(unnamed.steps[0].id, "pattern-1-step-0");
    assert_eq!(unnamed.steps[0].dodge_card_id, Some(CardId::new("do1")));
}

/// Test that legacy player sequences keep the order they were written in.
#[test]
fn test_legacy_sequences_keep_document_order() {
    let json = r#"{
        "patterns": [
            { "id": "seq", "playerSequences": { "zed": ["d9", "d1"], "amy": ["d5"] } }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();

    let pattern = catalog.pattern_by_id(&PatternId::new("seq")).unwrap();
    let dares: Vec<&str> = pattern.steps.iter().map(|s| s.dare_card_id.as_str()).collect();
    assert_eq!(dares, vec!["d9", "d1", "d5"]);

    // Order survives a save and reload.
    let reloaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.pattern_by_id(&PatternId::new("seq")), Some(pattern));
}

/// Test that saving and reloading a migrated catalog changes nothing.
#[test]
fn test_reload_is_idempotent() {
    let first = Catalog::from_json(LEGACY).unwrap();
    let json = first.to_json().unwrap();
    let second = Catalog::from_json(&json).unwrap();

    assert_eq!(second.to_document(), first.to_document());
    assert_eq!(second.to_json().unwrap(), json);
    assert_eq!(first.to_document().version, CURRENT_VERSION);
}

/// Test that documents from a newer version are rejected.
#[test]
fn test_future_version_rejected() {
    let err = Catalog::from_json(r#"{ "version": 3 }"#).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::UnsupportedVersion { found: 3, supported: 2 }
    ));
}

/// Test that a dodge filed under dares is rejected.
#[test]
fn test_misplaced_card_rejected() {
    let json = r#"{
        "version": 2,
        "dares": [ { "id": "x", "type": "DODGE", "text": "t", "difficulty": "EASY" } ]
    }"#;

    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::MisplacedCard { expected: CardType::Dare, .. }));
}

/// Test that malformed JSON surfaces as a JSON error.
#[test]
fn test_malformed_json() {
    assert!(matches!(Catalog::from_json("{ nope"), Err(CatalogError::Json(_))));
}

/// Test that a migrated pattern drives a game.
#[test]
fn test_migrated_pattern_plays() {
    let catalog = Catalog::from_json(LEGACY).unwrap();
    let engine = TurnEngine::new(&catalog);
    let settings = GameSettings::new(vec![Player::new("a", "Ann", 0)], 3)
        .with_pattern("a", "warmup")
        .with_seed(1);

    let mut state = engine
        .start_first_turn(&engine.create_initial_game_state(settings).unwrap())
        .unwrap();

    let mut shown = Vec::new();
    while !state.is_game_over() {
        shown.push(state.current_card().unwrap().id.clone());
        let dared = engine.player_chooses_do_dare(&state).unwrap();
        state = engine.resolve_dare_result(&dared, true).unwrap();
    }

    assert_eq!(shown, vec![CardId::new("d2"), CardId::new("d1"), CardId::new("d2")]);
}

/// Test that admin edits between games show up in the next game.
#[test]
fn test_edits_apply_to_next_game() {
    let mut catalog = Catalog::seeded();
    for card in catalog.dares().to_vec() {
        catalog.set_card_active(CardType::Dare, &card.id, false);
    }
    catalog.set_card_active(CardType::Dare, &CardId::new("d3"), true);
    catalog.upsert_pattern(
        CardPattern::new("one", "One").with_step(PatternStep::new("s", "d1")),
    );

    let engine = TurnEngine::new(&catalog);
    let settings = GameSettings::new(
        vec![Player::new("a", "Ann", 0), Player::new("b", "Ben", 1)],
        2,
    )
    .with_pattern("a", "one")
    .with_seed(2);
    let state = engine
        .start_first_turn(&engine.create_initial_game_state(settings).unwrap())
        .unwrap();

    // Scripted inactive card for Ann, then the only active dare for Ben.
    assert_eq!(state.current_card().unwrap().id, CardId::new("d1"));
    let state = engine.player_chooses_do_dare(&state).unwrap();
    let state = engine.resolve_dare_result(&state, true).unwrap();
    assert_eq!(state.current_card().unwrap().id, CardId::new("d3"));
    assert_eq!(catalog.active_dares().len(), 1);
}
