use super::*;

fn counts(c300: u16, c100: u16, c50: u16, miss: u16) -> HitCounts {
    HitCounts {
        count_300: c300,
        count_100: c100,
        count_50: c50,
        count_miss: miss,
        ..HitCounts::default()
    }
}

#[test]
fn accuracy_matches_weighted_formula() {
    let acc = counts(300, 50, 10, 5).accuracy();
    let expected = (50.0 * 10.0 + 100.0 * 50.0 + 300.0 * 300.0) / (300.0 * 365.0);
    assert!((acc - expected).abs() < 1e-12);
    assert!((acc - 0.8721).abs() < 1e-4);
}

#[test]
fn accuracy_with_no_judgements_is_zero() {
    let acc = HitCounts::default().accuracy();
    assert_eq!(acc, 0.0);
    assert!(!acc.is_nan());
}

#[test]
fn accuracy_ignores_bonus_counters() {
    let mut c = counts(10, 0, 0, 0);
    c.count_geki = 500;
    c.count_katu = 500;
    assert_eq!(c.accuracy(), 1.0);
}

#[test]
fn accuracy_all_misses_is_zero() {
    assert_eq!(counts(0, 0, 0, 7).accuracy(), 0.0);
}

#[test]
fn mode_byte_table() {
    assert_eq!(GameMode::from_byte(0), GameMode::Standard);
    assert_eq!(GameMode::from_byte(1), GameMode::Taiko);
    assert_eq!(GameMode::from_byte(2), GameMode::Catch);
    assert_eq!(GameMode::from_byte(3), GameMode::Mania);
    assert_eq!(GameMode::from_byte(4), GameMode::Unknown);
    assert_eq!(GameMode::from_byte(255), GameMode::Unknown);
    assert_eq!(GameMode::Mania.to_string(), "osu!mania");
}

#[test]
fn unix_timestamp_conversion() {
    let mut rec = sample();
    rec.timestamp_ticks = UNIX_EPOCH_TICKS + 86_400 * TICKS_PER_SECOND + 1;
    assert_eq!(rec.unix_timestamp_secs(), Some(86_400));

    rec.timestamp_ticks = UNIX_EPOCH_TICKS - 1;
    assert_eq!(rec.unix_timestamp_secs(), None);
}

#[test]
fn json_view_summarizes_action_stream() {
    let v = sample().to_json_value();
    assert_eq!(v["mode"], "standard");
    assert_eq!(v["player_name"], "Moderr");
    assert_eq!(v["compressed_data_len"], 3);
    assert!(v.get("compressed_data").is_none());
}

fn sample() -> ReplayRecord {
    ReplayRecord {
        mode: GameMode::Standard,
        version: 20_240_101,
        beatmap_hash: "b".into(),
        player_name: "Moderr".into(),
        replay_hash: "r".into(),
        counts: counts(1, 0, 0, 0),
        total_score: 1,
        max_combo: 1,
        perfect_combo: true,
        mods: 0,
        life_bar: String::new(),
        timestamp_ticks: UNIX_EPOCH_TICKS,
        compressed_data: vec![1, 2, 3],
    }
}
