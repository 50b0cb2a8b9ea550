use std::{io::Read, path::Path};

use crate::replay::{
    error::{FieldContext, ReplayError},
    reader::BinaryReader,
    record::{GameMode, HitCounts, ReplayRecord},
};

/// Decode a complete replay from memory.
///
/// Fields are read in wire order. The first failing read aborts the whole decode and is
/// returned as [`ReplayError::Parse`] naming the field. Bytes following the action stream
/// (newer clients append an online score id) are ignored.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_replay(bytes: &[u8]) -> Result<ReplayRecord, ReplayError> {
    let mut r = BinaryReader::new(bytes);

    let mode = GameMode::from_byte(r.read_u8().field("mode")?);
    let version = r.read_u32().field("version")?;
    let beatmap_hash = r.read_domain_string().field("beatmap_hash")?;
    let player_name = r.read_domain_string().field("player_name")?;
    let replay_hash = r.read_domain_string().field("replay_hash")?;

    let counts = HitCounts {
        count_300: r.read_u16().field("count_300")?,
        count_100: r.read_u16().field("count_100")?,
        count_50: r.read_u16().field("count_50")?,
        count_geki: r.read_u16().field("count_geki")?,
        count_katu: r.read_u16().field("count_katu")?,
        count_miss: r.read_u16().field("count_miss")?,
    };

    let total_score = r.read_u32().field("total_score")?;
    let max_combo = r.read_u16().field("max_combo")?;
    let perfect_combo = r.read_u8().field("perfect_combo")? != 0;
    let mods = r.read_u32().field("mods")?;
    let life_bar = r.read_domain_string().field("life_bar")?;
    let timestamp_ticks = r.read_u64().field("timestamp")?;

    let data_len = r.read_u32().field("compressed_data_len")?;
    let compressed_data = r
        .read_bytes(data_len as usize)
        .field("compressed_data")?
        .to_vec();

    if !r.is_empty() {
        tracing::debug!(
            trailing = r.remaining(),
            "ignoring bytes after the replay action stream"
        );
    }

    tracing::debug!(%mode, player = %player_name, total_score, "decoded replay");

    Ok(ReplayRecord {
        mode,
        version,
        beatmap_hash,
        player_name,
        replay_hash,
        counts,
        total_score,
        max_combo,
        perfect_combo,
        mods,
        life_bar,
        timestamp_ticks,
        compressed_data,
    })
}

/// Read a source to its end, then decode it.
pub fn decode_replay_from_reader<R: Read>(
    mut source: R,
    origin: &str,
) -> Result<ReplayRecord, ReplayError> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|source| ReplayError::SourceUnavailable {
            origin: origin.to_owned(),
            source,
        })?;
    decode_replay(&bytes)
}

impl ReplayRecord {
    /// Load and decode a `.osr` file.
    ///
    /// A missing or unreadable file is reported as [`ReplayError::SourceUnavailable`] before
    /// any byte-level parsing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ReplayError::SourceUnavailable {
            origin: path.display().to_string(),
            source,
        })?;
        decode_replay(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        decode_replay(bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/replay/decode.rs"]
mod tests;
