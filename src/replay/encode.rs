use crate::replay::{
    error::{FieldContext, ReplayError},
    record::ReplayRecord,
    writer::{BinaryWriter, WriteError},
};

/// Encode a record in the `.osr` wire layout read by [`crate::decode_replay`].
///
/// Fails when a string is longer than 255 bytes or the action stream does not fit a `u32`
/// length.
pub fn encode_replay(rec: &ReplayRecord) -> Result<Vec<u8>, ReplayError> {
    let mut w = BinaryWriter::new();

    w.write_u8(rec.mode.to_byte());
    w.write_u32(rec.version);
    w.write_domain_string(&rec.beatmap_hash)
        .field("beatmap_hash")?;
    w.write_domain_string(&rec.player_name)
        .field("player_name")?;
    w.write_domain_string(&rec.replay_hash)
        .field("replay_hash")?;

    let c = &rec.counts;
    for v in [
        c.count_300,
        c.count_100,
        c.count_50,
        c.count_geki,
        c.count_katu,
        c.count_miss,
    ] {
        w.write_u16(v);
    }

    w.write_u32(rec.total_score);
    w.write_u16(rec.max_combo);
    w.write_u8(u8::from(rec.perfect_combo));
    w.write_u32(rec.mods);
    w.write_domain_string(&rec.life_bar).field("life_bar")?;
    w.write_u64(rec.timestamp_ticks);

    let len = u32::try_from(rec.compressed_data.len())
        .map_err(|_| WriteError::BlobTooLong {
            len: rec.compressed_data.len(),
        })
        .field("compressed_data")?;
    w.write_u32(len);
    w.write_bytes(&rec.compressed_data);

    Ok(w.into_bytes())
}

impl ReplayRecord {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        encode_replay(self)
    }
}
