// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a currency descriptor in a specified denomination with a fixed
//! decimal precision.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tokenvm_core::correctness::{
    FAILED, check_predicate_true, check_u8_in_range_inclusive, check_valid_string_ascii,
};
use ustr::Ustr;

/// The maximum number of characters in a symbol code.
pub const MAX_SYMBOL_CODE_LEN: usize = 7;

/// The maximum decimal precision a symbol can carry.
pub const MAX_SYMBOL_PRECISION: u8 = 18;

/// Represents a currency descriptor: a short uppercase code with a fixed
/// decimal precision.
///
/// Symbol equality covers the whole (code, precision) pair; two symbols with
/// the same code but differing precisions denominate incompatible quantities.
///
/// A default-constructed symbol is the invalid empty sentinel used by
/// [`Quantity::default`](crate::types::Quantity::default).
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct Symbol {
    /// The currency code as 1-7 uppercase ASCII letters (e.g. "SYS").
    pub code: Ustr,
    /// The number of decimal places amounts in this denomination are scaled by.
    pub precision: u8,
}

impl Symbol {
    /// Creates a new [`Symbol`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not 1-7 uppercase ASCII letters.
    /// - `precision` is outside the representable range [0, [`MAX_SYMBOL_PRECISION`]].
    pub fn new_checked<T: AsRef<str>>(code: T, precision: u8) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_valid_string_ascii(code, stringify!(code))?;
        check_predicate_true(
            code.len() <= MAX_SYMBOL_CODE_LEN && code.bytes().all(|b| b.is_ascii_uppercase()),
            &format!("`code` must be 1-{MAX_SYMBOL_CODE_LEN} uppercase ASCII letters, was '{code}'"),
        )?;
        check_u8_in_range_inclusive(precision, 0, MAX_SYMBOL_PRECISION, stringify!(precision))?;
        Ok(Self {
            code: Ustr::from(code),
            precision,
        })
    }

    /// Creates a new [`Symbol`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Symbol::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(code: T, precision: u8) -> Self {
        Self::new_checked(code, precision).expect(FAILED)
    }

    /// Returns `true` if this symbol is a valid currency descriptor.
    ///
    /// The empty sentinel returned by [`Symbol::default`] is not valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
            && self.code.len() <= MAX_SYMBOL_CODE_LEN
            && self.code.bytes().all(|b| b.is_ascii_uppercase())
            && self.precision <= MAX_SYMBOL_PRECISION
    }

    /// Returns the wire encoding of this symbol as a single `u64`.
    ///
    /// The low byte holds the precision; bytes 1..=7 hold the code characters
    /// left-aligned and zero-padded.
    #[must_use]
    pub fn raw(&self) -> u64 {
        let mut raw = u64::from(self.precision);
        for (i, b) in self.code.bytes().enumerate().take(MAX_SYMBOL_CODE_LEN) {
            raw |= u64::from(b) << (8 * (i + 1));
        }
        raw
    }

    /// Decodes a [`Symbol`] from its `u64` wire encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the code bytes are not a zero-padded run of
    /// uppercase ASCII letters, or if the precision byte is out of range.
    pub fn try_from_raw(raw: u64) -> anyhow::Result<Self> {
        let precision = (raw & 0xFF) as u8;
        let mut code = String::with_capacity(MAX_SYMBOL_CODE_LEN);
        let mut terminated = false;
        for i in 1..=MAX_SYMBOL_CODE_LEN {
            let b = ((raw >> (8 * i)) & 0xFF) as u8;
            if b == 0 {
                terminated = true;
            } else if terminated {
                anyhow::bail!("invalid symbol encoding {raw:#018x}: gap in code bytes");
            } else {
                code.push(char::from(b));
            }
        }
        Self::new_checked(code, precision)
    }
}

impl Default for Symbol {
    /// Creates the empty sentinel [`Symbol`], which fails `is_valid`.
    fn default() -> Self {
        Self {
            code: Ustr::from(""),
            precision: 0,
        }
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={})",
            stringify!(Symbol),
            self.code,
            self.precision,
        )
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let Some((precision, code)) = s.split_once(',') else {
            anyhow::bail!("invalid symbol string '{s}'. Expected '<precision>,<CODE>'");
        };
        let precision: u8 = precision
            .parse()
            .map_err(|e| anyhow::anyhow!("error parsing precision from '{s}': {e}"))?;
        Self::new_checked(code, precision)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbol_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&symbol_str).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("SYS", 4)]
    #[case("A", 0)]
    #[case("ABCDEFG", 18)]
    fn test_new_valid(#[case] code: &str, #[case] precision: u8) {
        let symbol = Symbol::new(code, precision);
        assert!(symbol.is_valid());
        assert_eq!(symbol.code.as_str(), code);
        assert_eq!(symbol.precision, precision);
    }

    #[rstest]
    #[case("", 4)] // <-- empty code
    #[case("sys", 4)] // <-- lowercase
    #[case("SY1", 4)] // <-- digit
    #[case("ABCDEFGH", 4)] // <-- too long
    #[case("SYS", 19)] // <-- precision out of range
    fn test_new_checked_invalid(#[case] code: &str, #[case] precision: u8) {
        assert!(Symbol::new_checked(code, precision).is_err());
    }

    #[rstest]
    fn test_default_is_invalid_sentinel() {
        let symbol = Symbol::default();
        assert!(!symbol.is_valid());
        assert!(symbol.code.is_empty());
        assert_eq!(symbol.precision, 0);
    }

    #[rstest]
    fn test_equality_covers_code_and_precision() {
        assert_eq!(Symbol::new("SYS", 4), Symbol::new("SYS", 4));
        assert_ne!(Symbol::new("SYS", 4), Symbol::new("SYS", 2));
        assert_ne!(Symbol::new("SYS", 4), Symbol::new("EOS", 4));
    }

    #[rstest]
    fn test_string_reprs() {
        let symbol = Symbol::new("SYS", 4);
        assert_eq!(format!("{symbol}"), "4,SYS");
        assert_eq!(format!("{symbol:?}"), "Symbol(code='SYS', precision=4)");
    }

    #[rstest]
    fn test_from_str() {
        let symbol = Symbol::from("4,SYS");
        assert_eq!(symbol, Symbol::new("SYS", 4));
        assert!(Symbol::from_str("SYS").is_err());
        assert!(Symbol::from_str("x,SYS").is_err());
    }

    #[rstest]
    fn test_raw_layout() {
        let symbol = Symbol::new("SYS", 4);
        let raw = symbol.raw();
        assert_eq!(raw & 0xFF, 4);
        assert_eq!((raw >> 8) & 0xFF, u64::from(b'S'));
        assert_eq!((raw >> 16) & 0xFF, u64::from(b'Y'));
        assert_eq!((raw >> 24) & 0xFF, u64::from(b'S'));
        assert_eq!(raw >> 32, 0);
    }

    #[rstest]
    #[case("SYS", 4)]
    #[case("ABCDEFG", 18)]
    #[case("A", 0)]
    fn test_raw_round_trip(#[case] code: &str, #[case] precision: u8) {
        let symbol = Symbol::new(code, precision);
        assert_eq!(Symbol::try_from_raw(symbol.raw()).unwrap(), symbol);
    }

    #[rstest]
    fn test_try_from_raw_rejects_invalid() {
        // Empty code
        assert!(Symbol::try_from_raw(4).is_err());
        // Gap in code bytes ('S', zero, 'S')
        let raw = 4 | (u64::from(b'S') << 8) | (u64::from(b'S') << 24);
        assert!(Symbol::try_from_raw(raw).is_err());
        // Lowercase code byte
        let raw = 4 | (u64::from(b's') << 8);
        assert!(Symbol::try_from_raw(raw).is_err());
    }

    #[rstest]
    fn test_serde_round_trip() {
        let symbol = Symbol::new("SYS", 4);
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"4,SYS\"");
        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, symbol);
    }
}
