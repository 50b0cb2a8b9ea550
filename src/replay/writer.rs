use byteorder::{LittleEndian, WriteBytesExt};

use crate::replay::reader::{STRING_ABSENT, STRING_PRESENT};

/// Failures while writing replay bytes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The string does not fit behind a one-byte length prefix.
    #[error("string of {len} bytes exceeds the 255 byte limit")]
    StringTooLong { len: usize },

    /// A byte blob does not fit behind a `u32` length prefix.
    #[error("blob of {len} bytes exceeds the u32 length limit")]
    BlobTooLong { len: usize },
}

/// Little-endian writer producing the same encoding [`crate::replay::BinaryReader`] consumes.
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    // Writes into a `Vec<u8>` cannot fail.
    pub fn write_u8(&mut self, v: u8) {
        let _ = self.buf.write_u8(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        let _ = self.buf.write_u16::<LittleEndian>(v);
    }

    pub fn write_u32(&mut self, v: u32) {
        let _ = self.buf.write_u32::<LittleEndian>(v);
    }

    pub fn write_u64(&mut self, v: u64) {
        let _ = self.buf.write_u64::<LittleEndian>(v);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Empty strings are written as the absent marker.
    pub fn write_domain_string(&mut self, s: &str) -> Result<(), WriteError> {
        if s.is_empty() {
            self.write_u8(STRING_ABSENT);
            return Ok(());
        }
        let len = u8::try_from(s.len()).map_err(|_| WriteError::StringTooLong { len: s.len() })?;
        self.write_u8(STRING_PRESENT);
        self.write_u8(len);
        self.write_bytes(s.as_bytes());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
