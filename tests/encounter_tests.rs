//! Encounter integration tests.
//!
//! These tests drive whole battles through the public API, from opponent
//! generation to a terminal state.

use critter_quest::core::{Action, Combatant, StatTemplate};
use critter_quest::encounter::{
    Encounter, EncounterError, EncounterState, FixedOpponent, OpponentSeed, OpponentSource,
    RandomOpponents, VICTORY_XP,
};

fn starter() -> Combatant {
    StatTemplate::STARTER.spawn("Caterpie")
}

// =============================================================================
// Scripted Battles
// =============================================================================

/// Test the level 5 starter against a level 3 opponent, turn by turn.
#[test]
fn test_starter_vs_level_three() {
    let mut player = starter();
    let mut source = FixedOpponent::new("Rattata", 3);
    let mut encounter = Encounter::start(&mut player, &mut source);

    let first = encounter.submit_action(Action::Attack).unwrap();
    assert_eq!(first.damage_dealt, Some(4));
    assert_eq!(first.damage_taken, Some(2));
    assert_eq!(encounter.opponent().hp(), 12);
    assert_eq!(encounter.player().hp(), 18);

    let mut reports = vec![first];
    while !encounter.is_over() {
        reports.push(encounter.submit_action(Action::Attack).unwrap());
    }

    // 16 hp at 4 per hit: the fourth attack lands the knockout with no counter
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[3].damage_taken, None);
    assert_eq!(reports[3].state, EncounterState::PlayerWon);
    assert_eq!(reports[3].xp_gained, VICTORY_XP);
    assert_eq!(encounter.player().hp(), 14);
    assert_eq!(encounter.player().xp(), 5);
}

/// Test that the same fight always plays out the same way.
#[test]
fn test_battles_are_deterministic() {
    let play = || {
        let mut player = starter();
        let mut source = FixedOpponent::new("Zubat", 5);
        let mut encounter = Encounter::start(&mut player, &mut source);
        let mut log = Vec::new();
        while !encounter.is_over() {
            let r = encounter.submit_action(Action::Attack).unwrap();
            log.push((r.damage_dealt, r.damage_taken, r.state));
        }
        (log, player)
    };

    assert_eq!(play(), play());
}

/// Test a fight the player cannot win.
#[test]
fn test_outmatched_player_loses() {
    let mut player = Combatant::new("Magikarp", 1, 10, 1, 0);
    let mut source = FixedOpponent::new("Pidgey", 1);
    let mut encounter = Encounter::start(&mut player, &mut source);

    // Pidgey: 12 hp, 4 atk, 2 def; player chips 1 per turn, takes 4
    while !encounter.is_over() {
        encounter.submit_action(Action::Attack).unwrap();
    }

    assert_eq!(encounter.state(), EncounterState::PlayerLost);
    assert_eq!(encounter.turn(), 3);
    assert_eq!(encounter.opponent().hp(), 9);
    drop(encounter);
    assert!(player.is_fainted());
    assert_eq!(player.xp(), 0);
}

/// Test that winning at 7 xp crosses into the next level.
#[test]
fn test_win_at_seven_xp_levels_once() {
    let mut player = starter();
    player.gain_xp(7);
    player.take_damage(9);
    let weakling = Combatant::new("Weedle", 1, 1, 3, 2);

    let mut encounter = Encounter::with_opponent(&mut player, weakling);
    let report = encounter.submit_action(Action::Attack).unwrap();

    assert_eq!(report.state, EncounterState::PlayerWon);
    assert_eq!(report.levels_gained(), 1);
    drop(encounter);
    assert_eq!(player.level(), 6);
    assert_eq!(player.xp(), 2);
    assert_eq!(player.hp(), 25);
    assert_eq!(player.max_hp(), 25);
}

/// Test that a victory over an unsettled creature reports every level.
#[test]
fn test_victory_reports_each_level() {
    let record = critter_quest::codec::CombatantRecord {
        name: Some("Caterpie".into()),
        level: Some(5),
        hp: Some(20),
        atk: Some(7),
        defense: Some(4),
        xp: Some(18),
        max_hp: Some(20),
    };
    let mut player = critter_quest::codec::decode(&record).unwrap();
    let weakling = Combatant::new("Weedle", 1, 1, 3, 2);

    let mut encounter = Encounter::with_opponent(&mut player, weakling);
    let report = encounter.submit_action(Action::Attack).unwrap();

    // 18 + 5 = 23 xp: two level-ups, 3 left over
    assert_eq!(report.levels_gained(), 2);
    let levels: Vec<_> = report.level_ups.levels().collect();
    assert_eq!(levels, vec![6, 7]);
    drop(encounter);
    assert_eq!(player.xp(), 3);
}

// =============================================================================
// Non-combat Actions
// =============================================================================

/// Test that retreat ends the fight with nothing changed, at any hp.
#[test]
fn test_retreat_mid_fight() {
    let mut player = starter();
    let mut source = FixedOpponent::new("Rattata", 3);
    let mut encounter = Encounter::start(&mut player, &mut source);
    encounter.submit_action(Action::Attack).unwrap();
    encounter.submit_action(Action::Attack).unwrap();

    let player_before = encounter.player().clone();
    let opponent_before = encounter.opponent().clone();
    let report = encounter.submit_action(Action::Retreat).unwrap();

    assert_eq!(report.state, EncounterState::Retreated);
    assert_eq!(encounter.player(), &player_before);
    assert_eq!(encounter.opponent(), &opponent_before);
}

/// Test that inspecting reveals both sides without spending hp.
#[test]
fn test_inspect_reveals_both() {
    let mut player = starter();
    let mut source = FixedOpponent::new("Zubat", 4);
    let mut encounter = Encounter::start(&mut player, &mut source);

    let report = encounter.submit_action(Action::Inspect).unwrap();
    let inspection = report.inspection.expect("inspect returns summaries");

    assert_eq!(inspection.player.name, "Caterpie");
    assert_eq!(inspection.opponent.name, "Zubat");
    assert_eq!(inspection.opponent.level, 4);
    assert_eq!(inspection.opponent.hp, 18);
    assert_eq!(inspection.opponent.atk, 7);
    assert_eq!(inspection.opponent.defense, 4);
    assert_eq!(report.state, EncounterState::Ongoing);
}

/// Test that garbage input is rejected and the fight continues.
#[test]
fn test_invalid_input_then_continue() {
    let mut player = starter();
    let mut source = FixedOpponent::new("Pidgey", 1);
    let mut encounter = Encounter::start(&mut player, &mut source);

    for junk in ["", "x", "attack!", "runaway"] {
        let err = encounter.submit_input(junk).unwrap_err();
        assert!(matches!(err, EncounterError::InvalidAction(_)));
    }
    assert_eq!(encounter.turn(), 0);

    let report = encounter.submit_input("A").unwrap();
    assert_eq!(report.turn, 1);
    assert_eq!(report.damage_dealt, Some(5));
}

// =============================================================================
// Opponent Generation
// =============================================================================

/// Test that random opponents never outlevel min(5, player level).
#[test]
fn test_random_opponents_are_capped() {
    let mut source = RandomOpponents::new(1234);

    for level in 1..=8 {
        let mut player = Combatant::new("Caterpie", level, 20, 7, 4);
        for _ in 0..25 {
            let encounter = Encounter::start(&mut player, &mut source);
            let opp = encounter.opponent();
            assert!(opp.level() >= 1);
            assert!(opp.level() <= level.min(5));
            assert_eq!(opp.hp(), 10 + 2 * opp.level());
            assert_eq!(opp.atk(), 3 + opp.level());
            assert_eq!(opp.defense(), 2 + opp.level() / 2);
        }
    }
}

/// Test that an overleveled seed from a custom source is clamped.
#[test]
fn test_custom_source_is_clamped() {
    struct Boss;
    impl OpponentSource for Boss {
        fn next_opponent(&mut self, _level_cap: u32) -> OpponentSeed {
            OpponentSeed::new("Snorlax", 99)
        }
    }

    let mut player = Combatant::new("Caterpie", 3, 20, 7, 4);
    let encounter = Encounter::start(&mut player, &mut Boss);

    assert_eq!(encounter.opponent().name(), "Snorlax");
    assert_eq!(encounter.opponent().level(), 3);
}

/// Test that each encounter gets a fresh opponent.
#[test]
fn test_opponents_are_fresh_each_time() {
    let mut player = Combatant::new("Caterpie", 5, 200, 7, 4);
    let mut source = FixedOpponent::new("Rattata", 3);

    {
        let mut first = Encounter::start(&mut player, &mut source);
        first.submit_action(Action::Attack).unwrap();
        assert_eq!(first.opponent().hp(), 12);
        first.submit_action(Action::Retreat).unwrap();
    }

    let second = Encounter::start(&mut player, &mut source);
    assert_eq!(second.opponent().hp(), 16);
}
