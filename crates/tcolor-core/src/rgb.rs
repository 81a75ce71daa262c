// ABOUTME: 24-bit RGB color value exchanged between palettes and attributes.
// ABOUTME: Converts to and from packed COLORREF words and #rrggbb strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Three independent 8-bit channels.
///
/// Serialized as a `#rrggbb` string so color schemes stay readable in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb24 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    /// Unpack a `0x00BBGGRR` word (the Windows COLORREF layout). The top byte is ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: ((value >> 16) & 0xff) as u8,
        }
    }

    /// Pack into a `0x00BBGGRR` word.
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?;
        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

impl fmt::Display for Rgb24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb24 {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb24 {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb24> for String {
    fn from(color: Rgb24) -> Self {
        color.to_string()
    }
}

impl From<(u8, u8, u8)> for Rgb24 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb24 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("Expected 6 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("Invalid hex color: {0:?}")]
    InvalidDigit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let color = Rgb24::from_packed(0x00332211);
        assert_eq!(color, Rgb24::new(0x11, 0x22, 0x33));
        assert_eq!(color.to_packed(), 0x00332211);

        // High byte is not a channel
        assert_eq!(Rgb24::from_packed(0xff332211), color);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb24::from_hex("#ff8100"), Ok(Rgb24::new(255, 129, 0)));
        assert_eq!("22A75F".parse::<Rgb24>(), Ok(Rgb24::new(0x22, 0xa7, 0x5f)));
        assert_eq!(Rgb24::new(255, 129, 0).to_string(), "#ff8100");
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(Rgb24::from_hex("#fff"), Err(ParseColorError::InvalidLength(3)));
        assert_eq!(Rgb24::from_hex(""), Err(ParseColorError::InvalidLength(0)));
        assert!(matches!(
            Rgb24::from_hex("#gg0000"),
            Err(ParseColorError::InvalidDigit(_))
        ));
        assert!(matches!(
            Rgb24::from_hex("+f0000"),
            Err(ParseColorError::InvalidDigit(_))
        ));
        // Multi-byte input must not be sliced
        assert!(Rgb24::from_hex("#ääää").is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb24::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");

        let back: Rgb24 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb24::new(1, 2, 3));

        assert!(serde_json::from_str::<Rgb24>("\"nope\"").is_err());
    }
}
