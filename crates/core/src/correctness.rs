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

//! Functions for validating conditions at runtime.
//!
//! Each function returns an `anyhow::Result<()>` so that callers can either
//! propagate the failure or promote it to a panic with `.expect(FAILED)`,
//! which aborts the invoking operation's entire call chain.

use anyhow::{Result, bail};

/// Common message prefix when a correctness check is promoted to a panic.
pub const FAILED: &str = "Condition failed";

/// Validates that `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if `predicate` is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> Result<()> {
    if !predicate {
        bail!("{FAILED}: {fail_msg}")
    }
    Ok(())
}

/// Validates the content of the string `s`.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
/// - `s` contains one or more non-ASCII characters.
pub fn check_valid_string_ascii(s: &str, param: &str) -> Result<()> {
    if s.is_empty() {
        bail!("{FAILED}: invalid string for '{param}', was empty")
    } else if s.chars().all(char::is_whitespace) {
        bail!("{FAILED}: invalid string for '{param}', was all whitespace")
    } else if !s.is_ascii() {
        bail!("{FAILED}: invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    }
    Ok(())
}

/// Validates that the `u8` value is in the inclusive range [`l`, `r`].
///
/// # Errors
///
/// Returns an error if `value` falls outside the range.
pub fn check_u8_in_range_inclusive(value: u8, l: u8, r: u8, param: &str) -> Result<()> {
    if value < l || value > r {
        bail!("{FAILED}: invalid u8 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_check_predicate_true() {
        assert!(check_predicate_true(true, "the predicate was false").is_ok());
        assert!(check_predicate_true(false, "the predicate was false").is_err());
    }

    #[rstest]
    #[case("a")]
    #[case("SYS")]
    #[case(" a ")]
    fn test_check_valid_string_ascii_with_valid_values(#[case] s: &str) {
        assert!(check_valid_string_ascii(s, "value").is_ok());
    }

    #[rstest]
    #[case("")] // <-- empty string
    #[case("  ")] // <-- whitespace-only
    #[case("🦀")] // <-- contains non-ASCII char
    fn test_check_valid_string_ascii_with_invalid_values(#[case] s: &str) {
        assert!(check_valid_string_ascii(s, "value").is_err());
    }

    #[rstest]
    #[case(0, 0, 18, true)]
    #[case(18, 0, 18, true)]
    #[case(19, 0, 18, false)]
    fn test_check_u8_in_range_inclusive(
        #[case] value: u8,
        #[case] l: u8,
        #[case] r: u8,
        #[case] expected: bool,
    ) {
        assert_eq!(check_u8_in_range_inclusive(value, l, r, "value").is_ok(), expected);
    }
}
