//! Owned wide (UTF-16) strings.
//!
//! A `Variant` built from a `&[u16]` stores a `WideString`, never the borrowed
//! slice. A wide string and a `String` with the same text are different
//! types and never compare equal through a `Variant`.

use std::fmt;

/// Owned sequence of UTF-16 code units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    /// Create an empty wide string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of raw code units. Unpaired surrogates are kept as-is.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Get the code units.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Get the length in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode to a `String`, replacing invalid sequences with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for WideString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self {
        Self {
            units: units.to_vec(),
        }
    }
}

impl PartialEq<[u16]> for WideString {
    fn eq(&self, other: &[u16]) -> bool {
        self.units.as_slice() == other
    }
}

impl PartialEq<&[u16]> for WideString {
    fn eq(&self, other: &&[u16]) -> bool {
        self.units.as_slice() == *other
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
