use serde::{Deserialize, Serialize};

use crate::foundation::error::{HosuError, HosuResult};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Deserializes from a hex string (`"#rgb"`, `"#rgba"`, `"#rrggbb"`, `"#rrggbbaa"`, leading `#`
/// optional) or a `[r, g, b]` / `[r, g, b, a]` byte array. Serializes as `"#rrggbbaa"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a hex color string.
    pub fn parse_hex(s: &str) -> HosuResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        let nibble = |i: usize| -> HosuResult<u8> {
            let v = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid_hex(s))?;
            Ok(v * 17)
        };
        let byte = |i: usize| -> HosuResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid_hex(s))
        };

        match hex.len() {
            3 => Ok(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Ok(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid_hex(s)),
        }
    }

    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

fn invalid_hex(s: &str) -> HosuError {
    HosuError::validation(format!("invalid hex color '{s}'"))
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 255)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
