use super::*;
use crate::replay::{GameMode, HitCounts};

fn record() -> ReplayRecord {
    ReplayRecord {
        mode: GameMode::Mania,
        version: 20_240_101,
        beatmap_hash: "beatmap".into(),
        player_name: "Moderr".into(),
        replay_hash: "replay".into(),
        counts: HitCounts {
            count_300: 300,
            count_100: 50,
            count_50: 10,
            count_geki: 1,
            count_katu: 2,
            count_miss: 5,
        },
        total_score: 987_654,
        max_combo: 321,
        perfect_combo: true,
        mods: 64,
        life_bar: "0|1,".into(),
        timestamp_ticks: 638_000_000_000_000_000,
        compressed_data: vec![9; 16],
    }
}

#[test]
fn replay_fields_become_prefixed_variables() {
    let t = replay_variables(&record());
    assert_eq!(t.render_text("replay_mode"), "osu!mania");
    assert_eq!(t.render_text("REPLAY_USER_NAME"), "Moderr");
    assert_eq!(t.render_text("REPLAY_TOTAL_SCORE"), "987654");
    assert_eq!(t.render_text("REPLAY_GREATEST_COMBO"), "321");
    assert_eq!(t.render_text("REPLAY_COUNT_MISSES"), "5");
    assert_eq!(t.render_text("REPLAY_IS_PERFECT"), "true");
    assert_eq!(t.render_text("REPLAY_ACCURACY_PERCENT"), "87.21");
    assert_eq!(t.render_text("REPLAY_TIMESTAMP"), "638000000000000000");
    assert_eq!(t.get("REPLAY_MODS"), Some(&Variable::number(64)));
}

#[test]
fn action_stream_is_not_exposed() {
    let t = replay_variables(&record());
    assert!(t.iter().all(|(k, _)| k.starts_with(REPLAY_PREFIX)));
    assert!(!t.iter().any(|(k, _)| k.contains("COMPRESSED")));
}

#[test]
fn insert_replay_keeps_other_variables() {
    let mut t = VariableTable::new();
    t.set("PLAYER", Variable::text("someone else"));
    t.insert_replay(&record());
    assert_eq!(t.render_text("PLAYER"), "someone else");
    assert!(t.has("REPLAY_MODE"));
}
