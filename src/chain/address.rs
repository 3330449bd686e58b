//! Type-safe 20-byte account and contract addresses.
//!
//! [`Address`] is a newtype wrapper around a 20-byte array rendered as a
//! `0x`-prefixed lowercase hex string, so that account identifiers cannot
//! be confused with other strings flowing through the API.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 20-byte account or contract address.
///
/// Serialized as a `0x`-prefixed lowercase hex string. Used as the owner
/// key in ticket contracts, the caller identity on write calls, and the
/// dictionary key for node accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address, used as the empty/unset sentinel.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address whose low 8 bytes hold `value` (big-endian).
    ///
    /// The node uses this to derive fresh deterministic addresses from a
    /// monotonic counter.
    #[must_use]
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 20];
        for (slot, byte) in bytes.iter_mut().skip(12).zip(value.to_be_bytes()) {
            *slot = byte;
        }
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a valid `0x`-prefixed address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid address: {0}")]
pub struct ParseAddressError(String);

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ParseAddressError(s.to_string()))?;
        if hex.len() != 40 {
            return Err(ParseAddressError(s.to_string()));
        }
        let mut bytes = [0u8; 20];
        for (i, chunk) in hex.as_bytes().chunks_exact(2).enumerate() {
            let (Some(&hc), Some(&lc)) = (chunk.first(), chunk.get(1)) else {
                return Err(ParseAddressError(s.to_string()));
            };
            let high = hex_value(hc).ok_or_else(|| ParseAddressError(s.to_string()))?;
            let low = hex_value(lc).ok_or_else(|| ParseAddressError(s.to_string()))?;
            if let Some(slot) = bytes.get_mut(i) {
                *slot = (high << 4) | low;
            }
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
