use std::fmt;

/// .NET ticks (100ns) between 0001-01-01 and the Unix epoch.
pub const UNIX_EPOCH_TICKS: u64 = 621_355_968_000_000_000;
/// .NET ticks per second.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Ruleset a replay was recorded in.
pub enum GameMode {
    Standard,
    Taiko,
    Catch,
    Mania,
    /// Any mode byte outside `0..=3`. Not an error.
    Unknown,
}

impl GameMode {
    pub fn from_byte(b: u8) -> Self {
        match b {
            0 => Self::Standard,
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            _ => Self::Unknown,
        }
    }

    /// Wire byte for this mode. `Unknown` has no byte of its own and encodes as `0xff`.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Taiko => 1,
            Self::Catch => 2,
            Self::Mania => 3,
            Self::Unknown => 0xFF,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "osu!",
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-judgement hit counters, in wire order.
pub struct HitCounts {
    /// Perfect / great hits.
    pub count_300: u16,
    /// Good hits.
    pub count_100: u16,
    /// Meh hits.
    pub count_50: u16,
    /// Mode-specific bonus judgement (gekis).
    pub count_geki: u16,
    /// Mode-specific bonus judgement (katus).
    pub count_katu: u16,
    pub count_miss: u16,
}

impl HitCounts {
    /// Weighted accuracy in `[0, 1]`.
    ///
    /// Returns `0.0` when no judgements were recorded at all.
    pub fn accuracy(&self) -> f64 {
        let c300 = f64::from(self.count_300);
        let c100 = f64::from(self.count_100);
        let c50 = f64::from(self.count_50);
        let miss = f64::from(self.count_miss);

        let denom = 300.0 * (c50 + c100 + c300 + miss);
        if denom == 0.0 {
            return 0.0;
        }
        (50.0 * c50 + 100.0 * c100 + 300.0 * c300) / denom
    }
}

/// A fully decoded `.osr` replay.
///
/// Records are produced in one piece by [`crate::decode_replay`]; a failed decode never yields a
/// partially filled record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayRecord {
    pub mode: GameMode,
    /// Game client version the replay was recorded with.
    pub version: u32,
    /// MD5 of the beatmap file.
    pub beatmap_hash: String,
    pub player_name: String,
    /// MD5 of the replay itself.
    pub replay_hash: String,
    pub counts: HitCounts,
    pub total_score: u32,
    pub max_combo: u16,
    /// Full combo flag. Any nonzero wire byte is `true`.
    pub perfect_combo: bool,
    /// Bitmask of applied mods.
    pub mods: u32,
    /// Life bar graph (`time|life` pairs), kept verbatim.
    pub life_bar: String,
    /// Client timestamp in .NET ticks.
    pub timestamp_ticks: u64,
    /// LZMA-compressed action stream, never decompressed here.
    pub compressed_data: Vec<u8>,
}

impl ReplayRecord {
    pub fn accuracy(&self) -> f64 {
        self.counts.accuracy()
    }

    /// Timestamp as Unix seconds, `None` for timestamps before 1970.
    pub fn unix_timestamp_secs(&self) -> Option<i64> {
        let since_epoch = self.timestamp_ticks.checked_sub(UNIX_EPOCH_TICKS)?;
        i64::try_from(since_epoch / TICKS_PER_SECOND).ok()
    }

    /// JSON view of the record. The action stream is summarized by its length.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": self.mode,
            "version": self.version,
            "beatmap_hash": self.beatmap_hash,
            "player_name": self.player_name,
            "replay_hash": self.replay_hash,
            "counts": self.counts,
            "accuracy": self.accuracy(),
            "total_score": self.total_score,
            "max_combo": self.max_combo,
            "perfect_combo": self.perfect_combo,
            "mods": self.mods,
            "life_bar": self.life_bar,
            "timestamp_ticks": self.timestamp_ticks,
            "unix_timestamp_secs": self.unix_timestamp_secs(),
            "compressed_data_len": self.compressed_data.len(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/replay/record.rs"]
mod tests;
