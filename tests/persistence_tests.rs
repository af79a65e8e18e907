//! Persistence integration tests: codec, save stores and sessions.

use std::fs;

use critter_quest::codec::{self, CombatantRecord, MalformedRecord};
use critter_quest::core::{Action, Combatant, StatTemplate};
use critter_quest::encounter::FixedOpponent;
use critter_quest::persistence::{JsonFileStore, MemoryStore, SaveStore};
use critter_quest::session::{Session, SessionError};

fn veteran() -> Combatant {
    let mut c = StatTemplate::STARTER.spawn("Caterpie");
    c.gain_xp(37);
    c.take_damage(11);
    c
}

// =============================================================================
// Codec
// =============================================================================

/// Test that decode(encode(c)) reproduces every attribute.
#[test]
fn test_round_trip_every_attribute() {
    let c = veteran();
    let restored = codec::decode(&codec::encode(&c)).unwrap();

    assert_eq!(restored.name(), c.name());
    assert_eq!(restored.level(), c.level());
    assert_eq!(restored.hp(), c.hp());
    assert_eq!(restored.max_hp(), c.max_hp());
    assert_eq!(restored.atk(), c.atk());
    assert_eq!(restored.defense(), c.defense());
    assert_eq!(restored.xp(), c.xp());
    assert_eq!(restored, c);
}

/// Test that a record without hp is malformed.
#[test]
fn test_missing_hp_is_malformed() {
    let mut record = codec::encode(&veteran());
    record.hp = None;

    assert_eq!(
        codec::decode(&record),
        Err(MalformedRecord::MissingField("hp"))
    );
}

/// Test the JSON document against a hand-written save.
#[test]
fn test_reads_hand_written_save() {
    let json = r#"{"name": "Buggy", "level": 12, "hp": 40, "atk": 21, "defense": 11, "xp": 3, "max_hp": 55}"#;

    let c = codec::decode(&codec::from_json(json).unwrap()).unwrap();

    assert_eq!(c.name(), "Buggy");
    assert_eq!(c.level(), 12);
    assert_eq!(c.hp(), 40);
    assert_eq!(c.max_hp(), 55);
    assert_eq!(c.atk(), 21);
    assert_eq!(c.defense(), 11);
    assert_eq!(c.xp(), 3);
}

/// Test that unicode names survive the round trip byte for byte.
#[test]
fn test_unicode_name() {
    let c = Combatant::new("キャタピー 🐛", 5, 20, 7, 4);
    let json = codec::to_json(&codec::encode(&c)).unwrap();
    let restored = codec::decode(&codec::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.name(), "キャタピー 🐛");
}

// =============================================================================
// File Store
// =============================================================================

/// Test that saving twice keeps only the latest record.
#[test]
fn test_file_store_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("save_data.json"));

    store.save(&codec::encode(&StatTemplate::STARTER.spawn("First"))).unwrap();
    store.save(&codec::encode(&veteran())).unwrap();

    let loaded = codec::decode(&store.load().unwrap().unwrap()).unwrap();
    assert_eq!(loaded, veteran());
}

/// Test that a save file missing a field fails to resume.
#[test]
fn test_file_missing_field_fails_resume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save_data.json");
    fs::write(
        &path,
        r#"{"name":"Caterpie","level":5,"atk":7,"defense":4,"xp":0,"max_hp":20}"#,
    )
    .unwrap();

    let err = Session::resume(JsonFileStore::new(&path), FixedOpponent::new("Pidgey", 1))
        .unwrap_err();

    assert!(err.is_malformed());
    assert!(matches!(
        err,
        SessionError::Malformed(MalformedRecord::MissingField("hp"))
    ));
}

// =============================================================================
// Sessions
// =============================================================================

/// Test a full cycle: new game, battle, save, resume from disk.
#[test]
fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save_data.json");

    let mut session = Session::new_game(
        "Bug",
        JsonFileStore::new(&path),
        FixedOpponent::new("Rattata", 3),
    );
    {
        let mut encounter = session.start_encounter();
        while !encounter.is_over() {
            encounter.submit_action(Action::Attack).unwrap();
        }
    }
    session.save().unwrap();
    let expected = session.player().clone();
    drop(session);

    let resumed = Session::resume(JsonFileStore::new(&path), FixedOpponent::new("Pidgey", 1))
        .unwrap()
        .expect("save exists");

    assert_eq!(resumed.player(), &expected);
    assert_eq!(resumed.player().xp(), 5);
    assert_eq!(resumed.player().hp(), 14);
}

/// Test that a resumed creature can keep fighting and leveling.
#[test]
fn test_resumed_creature_keeps_playing() {
    let mut record: CombatantRecord = codec::encode(&veteran());
    record.xp = Some(8);
    let store = MemoryStore::with_record(record);

    let mut session = Session::resume(store, FixedOpponent::new("Pidgey", 1))
        .unwrap()
        .unwrap();
    let level = session.player().level();
    {
        let mut encounter = session.start_encounter();
        while !encounter.is_over() {
            encounter.submit_action(Action::Attack).unwrap();
        }
    }

    assert_eq!(session.player().level(), level + 1);
    assert_eq!(session.player().xp(), 3);
}
