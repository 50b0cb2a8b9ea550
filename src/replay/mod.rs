//! `.osr` replay decoding.
//!
//! [`BinaryReader`] is the low-level cursor; [`decode_replay`] turns a whole buffer into a
//! [`ReplayRecord`] or fails atomically with a [`ReplayError`].

pub mod decode;
pub mod encode;
pub mod error;
pub mod reader;
pub mod record;
pub mod writer;

pub use decode::{decode_replay, decode_replay_from_reader};
pub use encode::encode_replay;
pub use error::ReplayError;
pub use reader::{BinaryReader, ReadError};
pub use record::{GameMode, HitCounts, ReplayRecord};
pub use writer::{BinaryWriter, WriteError};
