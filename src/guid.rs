//! Deterministic GUIDs for fixtures.
//!
//! `guid_of('a')` is `aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa`, which is easy to
//! recognize in a failure message and stable across runs.

use thiserror::Error;
use uuid::Uuid;

const HEX_DIGITS: &str = "123456789abcdef";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuidError {
    #[error("'{0}' is not a hexadecimal digit")]
    NotHex(char),
}

/// Builds a GUID whose 32 hex digits are all `digit`.
pub fn try_guid_of(digit: char) -> Result<Uuid, GuidError> {
    let nibble = digit.to_digit(16).ok_or(GuidError::NotHex(digit))? as u8;
    Ok(Uuid::from_bytes([(nibble << 4) | nibble; 16]))
}

/// Like [`try_guid_of`], panicking on a non-hex digit. Intended for literals
/// in test code.
#[track_caller]
pub fn guid_of(digit: char) -> Uuid {
    match try_guid_of(digit) {
        Ok(guid) => guid,
        Err(err) => panic!("{err}"),
    }
}

/// Yields the fifteen distinct non-nil single-digit GUIDs, `1` through `f`.
#[derive(Debug, Clone)]
pub struct GuidSequence {
    digits: std::str::Chars<'static>,
}

impl GuidSequence {
    pub fn new() -> Self {
        Self {
            digits: HEX_DIGITS.chars(),
        }
    }
}

impl Default for GuidSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for GuidSequence {
    type Item = Uuid;

    fn next(&mut self) -> Option<Uuid> {
        self.digits.next().map(guid_of)
    }
}
