use crate::{
    replay::ReplayRecord,
    variables::{table::VariableTable, variable::Variable},
};

/// Prefix of every variable derived from a replay.
pub const REPLAY_PREFIX: &str = "REPLAY_";

impl VariableTable {
    /// Seed the table with every field of `rec` as `REPLAY_<FIELD>`.
    ///
    /// Counters and scores are numbers, everything else is text. The action stream is not
    /// exposed.
    pub fn insert_replay(&mut self, rec: &ReplayRecord) {
        let c = &rec.counts;
        let entries = [
            ("MODE", Variable::text(rec.mode.display_name())),
            ("OSU_VERSION", Variable::number(rec.version)),
            ("BEATMAP_HASH", Variable::text(rec.beatmap_hash.clone())),
            ("USER_NAME", Variable::text(rec.player_name.clone())),
            ("REPLAY_HASH", Variable::text(rec.replay_hash.clone())),
            ("COUNT_300", Variable::number(c.count_300)),
            ("COUNT_100", Variable::number(c.count_100)),
            ("COUNT_50", Variable::number(c.count_50)),
            ("COUNT_GEKIS", Variable::number(c.count_geki)),
            ("COUNT_KATUS", Variable::number(c.count_katu)),
            ("COUNT_MISSES", Variable::number(c.count_miss)),
            ("ACCURACY", Variable::number(rec.accuracy())),
            (
                "ACCURACY_PERCENT",
                Variable::text(format!("{:.2}", rec.accuracy() * 100.0)),
            ),
            ("TOTAL_SCORE", Variable::number(rec.total_score)),
            ("GREATEST_COMBO", Variable::number(rec.max_combo)),
            ("IS_PERFECT", Variable::text(rec.perfect_combo.to_string())),
            ("MODS", Variable::number(rec.mods)),
            ("LIFE_BAR", Variable::text(rec.life_bar.clone())),
            ("TIMESTAMP", Variable::text(rec.timestamp_ticks.to_string())),
        ];

        for (field, var) in entries {
            self.set(&format!("{REPLAY_PREFIX}{field}"), var);
        }
        tracing::debug!(player = %rec.player_name, "seeded replay variables");
    }
}

/// Build a fresh table from a replay.
pub fn replay_variables(rec: &ReplayRecord) -> VariableTable {
    let mut table = VariableTable::new();
    table.insert_replay(rec);
    table
}

#[cfg(test)]
#[path = "../../tests/unit/variables/replay.rs"]
mod tests;
