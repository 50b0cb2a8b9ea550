use std::io::{self, Cursor};

use byteorder::{LittleEndian, ReadBytesExt};

/// Marker byte for an absent (empty) string.
pub const STRING_ABSENT: u8 = 0x00;
/// Marker byte for a present string followed by its length and UTF-8 bytes.
pub const STRING_PRESENT: u8 = 0x0B;

/// Low-level failures while reading replay bytes.
///
/// Every variant carries the byte offset at which the failing read started.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Fewer bytes remain than the read requires.
    #[error("truncated input at byte {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A string marker other than `0x00` / `0x0b`.
    #[error("invalid string marker 0x{marker:02x} at byte {offset} (expected 0x00 or 0x0b)")]
    InvalidMarker { offset: usize, marker: u8 },

    /// String payload is not valid UTF-8.
    #[error("invalid utf-8 in string payload at byte {offset}")]
    InvalidEncoding {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Forward-only little-endian cursor over a byte buffer.
///
/// A failed read never advances the cursor.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> BinaryReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn truncated(&self, needed: usize) -> ReadError {
        ReadError::Truncated {
            offset: self.position(),
            needed,
            remaining: self.remaining(),
        }
    }

    /// Run a fixed-width read, reporting a short buffer as [`ReadError::Truncated`].
    fn fixed<T>(
        &mut self,
        width: usize,
        read: impl FnOnce(&mut Cursor<&'a [u8]>) -> io::Result<T>,
    ) -> Result<T, ReadError> {
        if width > self.remaining() {
            return Err(self.truncated(width));
        }
        let start = self.cursor.position();
        read(&mut self.cursor).map_err(|_| {
            self.cursor.set_position(start);
            self.truncated(width)
        })
    }

    /// Consume exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ReadError> {
        if n > self.remaining() {
            return Err(self.truncated(n));
        }
        let bytes: &'a [u8] = *self.cursor.get_ref();
        let start = self.position();
        self.cursor.set_position((start + n) as u64);
        Ok(&bytes[start..start + n])
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        self.fixed(1, |c| c.read_u8())
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.fixed(2, |c| c.read_u16::<LittleEndian>())
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.fixed(4, |c| c.read_u32::<LittleEndian>())
    }

    pub fn read_u64(&mut self) -> Result<u64, ReadError> {
        self.fixed(8, |c| c.read_u64::<LittleEndian>())
    }

    /// Read a marker-prefixed string.
    ///
    /// `0x00` is an empty string (one byte consumed). `0x0b` is followed by a single length byte
    /// and that many UTF-8 bytes. The length prefix is one byte in the files this format is
    /// read from, not a ULEB128.
    pub fn read_domain_string(&mut self) -> Result<String, ReadError> {
        let offset = self.position();
        match self.read_u8()? {
            STRING_ABSENT => Ok(String::new()),
            STRING_PRESENT => {
                let len = self.read_u8()?;
                let payload_offset = self.position();
                let raw = self.read_bytes(usize::from(len))?;
                std::str::from_utf8(raw)
                    .map(str::to_owned)
                    .map_err(|source| ReadError::InvalidEncoding {
                        offset: payload_offset,
                        source,
                    })
            }
            marker => Err(ReadError::InvalidMarker { offset, marker }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/replay/reader.rs"]
mod tests;
