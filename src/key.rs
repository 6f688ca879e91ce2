//! Validated scrambling key
//!
//! A key is a single byte. It is both the XOR mask applied to every channel
//! value and the seed of the pixel permutation. Out-of-range values are
//! rejected here, never clamped.

use crate::error::{Result, ScrambleError};
use std::{fmt, str::FromStr};

/// Integer key in [0, 255]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u8);

impl Key {
    /// The identity key: no XOR change, no permutation
    pub const ZERO: Key = Key(0);

    /// Wrap a byte; every byte is a valid key
    pub const fn new(value: u8) -> Self {
        Key(value)
    }

    /// Validate an arbitrary integer
    pub fn from_int(value: i64) -> Result<Self> {
        u8::try_from(value).map(Key).map_err(|_| {
            ScrambleError::InvalidKey(format!("Key must be between 0 and 255, got {}", value))
        })
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Key {
    fn from(value: u8) -> Self {
        Key(value)
    }
}

impl TryFrom<i64> for Key {
    type Error = ScrambleError;

    fn try_from(value: i64) -> Result<Self> {
        Key::from_int(value)
    }
}

impl FromStr for Key {
    type Err = ScrambleError;

    /// Parse user-entered text, e.g. the contents of a key input field
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            ScrambleError::InvalidKey(format!(
                "Please enter a valid integer key (0-255), got {:?}",
                trimmed
            ))
        })?;
        Key::from_int(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert_eq!(Key::from_int(0).unwrap(), Key::ZERO);
        assert_eq!(Key::from_int(255).unwrap().value(), 255);
        assert!(matches!(
            Key::from_int(256),
            Err(ScrambleError::InvalidKey(_))
        ));
        assert!(matches!(Key::from_int(-1), Err(ScrambleError::InvalidKey(_))));
        assert!(Key::try_from(1_000_000i64).is_err());
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(" 42 \n".parse::<Key>().unwrap(), Key::new(42));
        assert_eq!("+7".parse::<Key>().unwrap(), Key::new(7));

        // Not an integer at all
        for bad in ["", "abc", "4.5", "0x10"] {
            let err = bad.parse::<Key>().unwrap_err();
            assert!(err.to_string().contains("valid integer"), "{}", bad);
        }

        // Integer but out of range
        let err = "300".parse::<Key>().unwrap_err();
        assert!(err.to_string().contains("between 0 and 255"));
        assert!("-5".parse::<Key>().is_err());
    }

    #[test]
    fn test_zero_and_display() {
        assert!(Key::ZERO.is_zero());
        assert!(Key::default().is_zero());
        assert!(!Key::from(1u8).is_zero());
        assert_eq!(Key::new(123).to_string(), "123");
    }
}
