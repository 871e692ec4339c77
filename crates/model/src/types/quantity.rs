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

//! Represents a bounded fixed-point token amount in a specified symbol denomination.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tokenvm_core::correctness::FAILED;

use crate::{
    errors::QuantityError,
    types::{Symbol, format::format_units},
};

/// The maximum valid amount magnitude which can be represented, `2^62 - 1`.
///
/// The bound is symmetric: valid amounts lie in
/// `[-QUANTITY_MAX_AMOUNT, QUANTITY_MAX_AMOUNT]`. Bounding the magnitude a
/// power of two below `i64::MAX` keeps every checked operation a single
/// widened compare, with no arbitrary-precision fallback.
pub const QUANTITY_MAX_AMOUNT: i64 = (1 << 62) - 1;

/// Represents a bounded amount of a token denominated in a [`Symbol`].
///
/// The raw `amount` is an integer scaled by `10^precision` of the symbol, so
/// an amount of 12345 at precision 2 represents 123.45 units.
///
/// A default-constructed quantity is the empty sentinel (zero amount, invalid
/// symbol); it may be observed but never combined with a valid quantity.
///
/// - [`QUANTITY_MAX_AMOUNT`] - Maximum representable amount magnitude
#[repr(C)]
#[derive(Clone, Copy, Default, Eq)]
pub struct Quantity {
    /// The raw fixed-point amount, scaled by `10^precision` of the symbol.
    pub amount: i64,
    /// The symbol denomination associated with the amount.
    pub symbol: Symbol,
}

impl Quantity {
    /// Creates a new [`Quantity`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` magnitude exceeds [`QUANTITY_MAX_AMOUNT`].
    /// - `symbol` fails its validity check.
    pub fn new_checked(amount: i64, symbol: Symbol) -> Result<Self, QuantityError> {
        if !amount_within_range(amount) {
            return Err(QuantityError::OutOfRange(amount));
        }
        if !symbol.is_valid() {
            return Err(QuantityError::InvalidSymbol);
        }
        Ok(Self { amount, symbol })
    }

    /// Creates a new [`Quantity`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Quantity::new_checked`] for more details.
    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Self::new_checked(amount, symbol).expect(FAILED)
    }

    /// Creates a new [`Quantity`] instance with an amount of zero in the given `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` fails its validity check.
    #[must_use]
    pub fn zero(symbol: Symbol) -> Self {
        Self::new(0, symbol)
    }

    /// Returns `true` if the amount magnitude is within [`QUANTITY_MAX_AMOUNT`].
    #[must_use]
    pub fn is_amount_within_range(&self) -> bool {
        amount_within_range(self.amount)
    }

    /// Returns `true` if the amount is within range and the symbol is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_amount_within_range() && self.symbol.is_valid()
    }

    /// Returns `true` if the amount of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Sets the amount, leaving the symbol untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` magnitude exceeds [`QUANTITY_MAX_AMOUNT`];
    /// the existing amount is left unchanged.
    pub fn set_amount(&mut self, amount: i64) -> Result<(), QuantityError> {
        if !amount_within_range(amount) {
            return Err(QuantityError::OutOfRange(amount));
        }
        self.amount = amount;
        Ok(())
    }

    /// Adds `rhs`, returning a new validated quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ, or if the result falls outside
    /// `[-QUANTITY_MAX_AMOUNT, QUANTITY_MAX_AMOUNT]`.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        self.check_symbol(&rhs)?;
        // Two in-range amounts cannot wrap an i64, but the operands are not
        // guaranteed in-range when constructed field-by-field.
        let amount = match self.amount.checked_add(rhs.amount) {
            Some(amount) => amount,
            None => return Err(addition_bound_error(rhs.amount)),
        };
        if amount > QUANTITY_MAX_AMOUNT {
            return Err(QuantityError::Overflow("addition"));
        }
        if amount < -QUANTITY_MAX_AMOUNT {
            return Err(QuantityError::Underflow("addition"));
        }
        Ok(Self {
            amount,
            symbol: self.symbol,
        })
    }

    /// Subtracts `rhs`, returning a new validated quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ, or if the result falls outside
    /// `[-QUANTITY_MAX_AMOUNT, QUANTITY_MAX_AMOUNT]`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        self.check_symbol(&rhs)?;
        let amount = match self.amount.checked_sub(rhs.amount) {
            Some(amount) => amount,
            None => return Err(subtraction_bound_error(rhs.amount)),
        };
        if amount > QUANTITY_MAX_AMOUNT {
            return Err(QuantityError::Overflow("subtraction"));
        }
        if amount < -QUANTITY_MAX_AMOUNT {
            return Err(QuantityError::Underflow("subtraction"));
        }
        Ok(Self {
            amount,
            symbol: self.symbol,
        })
    }

    /// Multiplies the amount by the integer `scalar`, returning a new
    /// validated quantity.
    ///
    /// The product is computed in an `i128` intermediate so that a wrap a
    /// 64-bit multiply would miss is detected before truncation.
    ///
    /// # Errors
    ///
    /// Returns an error if the widened product falls outside
    /// `[-QUANTITY_MAX_AMOUNT, QUANTITY_MAX_AMOUNT]`.
    pub fn checked_mul(self, scalar: i64) -> Result<Self, QuantityError> {
        let product = i128::from(self.amount) * i128::from(scalar);
        if product > i128::from(QUANTITY_MAX_AMOUNT) {
            return Err(QuantityError::Overflow("multiplication"));
        }
        if product < -i128::from(QUANTITY_MAX_AMOUNT) {
            return Err(QuantityError::Underflow("multiplication"));
        }
        Ok(Self {
            amount: product as i64,
            symbol: self.symbol,
        })
    }

    /// Divides the amount by the integer `scalar` using truncating
    /// (toward-zero) division; the remainder is discarded, not rounded.
    ///
    /// # Errors
    ///
    /// Returns an error if `scalar` is zero, or on the single signed-division
    /// edge case of `i64::MIN / -1`.
    pub fn checked_div(self, scalar: i64) -> Result<Self, QuantityError> {
        if scalar == 0 {
            return Err(QuantityError::DivideByZero);
        }
        if self.amount == i64::MIN && scalar == -1 {
            return Err(QuantityError::Overflow("signed division"));
        }
        Ok(Self {
            amount: self.amount / scalar,
            symbol: self.symbol,
        })
    }

    /// Divides this quantity by another of the same symbol, returning the
    /// integer ratio of the raw amounts (truncating division).
    ///
    /// # Errors
    ///
    /// Returns an error if `rhs` has a zero amount, or if the symbols differ.
    pub fn checked_div_by(self, rhs: Self) -> Result<i64, QuantityError> {
        if rhs.amount == 0 {
            return Err(QuantityError::DivideByZero);
        }
        self.check_symbol(&rhs)?;
        Ok(self.amount / rhs.amount)
    }

    /// Returns whether the amounts are equal.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_eq(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_symbol(&rhs)?;
        Ok(self.amount == rhs.amount)
    }

    /// Returns whether the amounts are unequal (the negation of [`Quantity::checked_eq`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_ne(self, rhs: Self) -> Result<bool, QuantityError> {
        Ok(!self.checked_eq(rhs)?)
    }

    /// Returns whether this amount is less than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_lt(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_symbol(&rhs)?;
        Ok(self.amount < rhs.amount)
    }

    /// Returns whether this amount is less than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_le(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_symbol(&rhs)?;
        Ok(self.amount <= rhs.amount)
    }

    /// Returns whether this amount is greater than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_gt(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_symbol(&rhs)?;
        Ok(self.amount > rhs.amount)
    }

    /// Returns whether this amount is greater than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbols differ.
    pub fn checked_ge(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_symbol(&rhs)?;
        Ok(self.amount >= rhs.amount)
    }

    /// Returns the value of this instance as a `Decimal`.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.amount), u32::from(self.symbol.precision))
    }

    fn check_symbol(&self, rhs: &Self) -> Result<(), QuantityError> {
        if self.symbol == rhs.symbol {
            Ok(())
        } else {
            Err(QuantityError::SymbolMismatch {
                lhs: self.symbol,
                rhs: rhs.symbol,
            })
        }
    }
}

const fn amount_within_range(amount: i64) -> bool {
    -QUANTITY_MAX_AMOUNT <= amount && amount <= QUANTITY_MAX_AMOUNT
}

const fn addition_bound_error(rhs_amount: i64) -> QuantityError {
    if rhs_amount > 0 {
        QuantityError::Overflow("addition")
    } else {
        QuantityError::Underflow("addition")
    }
}

const fn subtraction_bound_error(rhs_amount: i64) -> QuantityError {
    if rhs_amount < 0 {
        QuantityError::Overflow("subtraction")
    } else {
        QuantityError::Underflow("subtraction")
    }
}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.symbol.hash(state);
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.symbol == other.symbol
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.checked_lt(*other).expect(FAILED)
    }

    fn le(&self, other: &Self) -> bool {
        self.checked_le(*other).expect(FAILED)
    }

    fn gt(&self, other: &Self) -> bool {
        self.checked_gt(*other).expect(FAILED)
    }

    fn ge(&self, other: &Self) -> bool {
        self.checked_ge(*other).expect(FAILED)
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.check_symbol(other).expect(FAILED);
        self.amount.cmp(&other.amount)
    }
}

impl Neg for Quantity {
    type Output = Self;
    fn neg(self) -> Self::Output {
        // The bound is symmetric, so negation cannot leave the valid range.
        Self {
            amount: -self.amount,
            symbol: self.symbol,
        }
    }
}

impl Add for Quantity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect(FAILED)
    }
}

impl Sub for Quantity {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect(FAILED)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.checked_add(rhs).expect(FAILED);
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.checked_sub(rhs).expect(FAILED);
    }
}

impl Mul<i64> for Quantity {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).expect(FAILED)
    }
}

impl Mul<Quantity> for i64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs.checked_mul(self).expect(FAILED)
    }
}

impl MulAssign<i64> for Quantity {
    fn mul_assign(&mut self, rhs: i64) {
        *self = self.checked_mul(rhs).expect(FAILED);
    }
}

impl Div<i64> for Quantity {
    type Output = Self;
    fn div(self, rhs: i64) -> Self::Output {
        self.checked_div(rhs).expect(FAILED)
    }
}

impl DivAssign<i64> for Quantity {
    fn div_assign(&mut self, rhs: i64) {
        *self = self.checked_div(rhs).expect(FAILED);
    }
}

impl Div for Quantity {
    type Output = i64;
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div_by(rhs).expect(FAILED)
    }
}

impl Debug for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Quantity), self)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format_units(self.amount, self.symbol.precision, self.symbol.code.as_str())
        )
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(format!(
                "Error invalid input format '{value}'. Expected '<amount> <CODE>'"
            ));
        }
        let (amount_str, code) = (parts[0], parts[1]);

        let (sign, digits) = match amount_str.strip_prefix('-') {
            Some(rest) => (-1_i64, rest),
            None => (1_i64, amount_str),
        };
        let (int_str, frac_str) = match digits.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (digits, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(format!("Error parsing amount '{amount_str}': no digits"));
        }

        // Digit-by-digit accumulation keeps parsing exact (no float round trip)
        let mut amount: i64 = 0;
        for c in int_str.chars().chain(frac_str.chars()) {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| format!("Error parsing amount '{amount_str}': invalid digit '{c}'"))?;
            amount = amount
                .checked_mul(10)
                .and_then(|a| a.checked_add(i64::from(digit)))
                .ok_or_else(|| format!("Error parsing amount '{amount_str}': out of range"))?;
        }
        amount *= sign;

        let precision = u8::try_from(frac_str.len())
            .map_err(|_| format!("Error parsing amount '{amount_str}': too many decimal places"))?;
        let symbol = Symbol::new_checked(code, precision).map_err(|e| e.to_string())?;
        Self::new_checked(amount, symbol).map_err(|e| e.to_string())
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::from_str(value).expect(FAILED)
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self::from_str(&value).expect(FAILED)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let quantity_str: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&quantity_str).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::stubs::*;

    #[rstest]
    fn test_new_valid(symbol_sys: Symbol) {
        let quantity = Quantity::new(100_000, symbol_sys);
        assert_eq!(quantity.amount, 100_000);
        assert_eq!(quantity.symbol, symbol_sys);
        assert!(quantity.is_valid());
    }

    #[rstest]
    fn test_new_checked_at_bounds(symbol_sys: Symbol) {
        assert!(Quantity::new_checked(QUANTITY_MAX_AMOUNT, symbol_sys).is_ok());
        assert!(Quantity::new_checked(-QUANTITY_MAX_AMOUNT, symbol_sys).is_ok());
        assert_eq!(
            Quantity::new_checked(QUANTITY_MAX_AMOUNT + 1, symbol_sys),
            Err(QuantityError::OutOfRange(QUANTITY_MAX_AMOUNT + 1)),
        );
        assert_eq!(
            Quantity::new_checked(-QUANTITY_MAX_AMOUNT - 1, symbol_sys),
            Err(QuantityError::OutOfRange(-QUANTITY_MAX_AMOUNT - 1)),
        );
    }

    #[rstest]
    fn test_new_checked_invalid_symbol() {
        assert_eq!(
            Quantity::new_checked(1, Symbol::default()),
            Err(QuantityError::InvalidSymbol),
        );
    }

    #[rstest]
    fn test_default_is_empty_sentinel() {
        let quantity = Quantity::default();
        assert!(quantity.is_zero());
        assert!(quantity.is_amount_within_range());
        assert!(!quantity.is_valid());
    }

    #[rstest]
    fn test_zero_constructor(symbol_sys: Symbol) {
        let quantity = Quantity::zero(symbol_sys);
        assert!(quantity.is_zero());
        assert_eq!(quantity.symbol, symbol_sys);
    }

    #[rstest]
    fn test_set_amount(symbol_sys: Symbol) {
        let mut quantity = Quantity::new(10, symbol_sys);
        quantity.set_amount(25).unwrap();
        assert_eq!(quantity.amount, 25);
        assert_eq!(quantity.symbol, symbol_sys);

        let result = quantity.set_amount(QUANTITY_MAX_AMOUNT + 1);
        assert_eq!(result, Err(QuantityError::OutOfRange(QUANTITY_MAX_AMOUNT + 1)));
        assert_eq!(quantity.amount, 25, "failed set_amount must not mutate");
    }

    #[rstest]
    fn test_negation(symbol_sys: Symbol) {
        let quantity = Quantity::new(5, symbol_sys);
        let negated = -quantity;
        assert_eq!(negated.amount, -5);
        assert_eq!(negated.symbol, symbol_sys);
        assert_eq!(-negated, quantity);

        // Symmetric bound: negating the extremes stays in range
        assert!((-Quantity::new(QUANTITY_MAX_AMOUNT, symbol_sys)).is_valid());
    }

    #[rstest]
    fn test_checked_add(symbol_sys: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(50, symbol_sys);
        assert_eq!(a.checked_add(b).unwrap().amount, 150);
    }

    #[rstest]
    fn test_checked_add_symbol_mismatch(symbol_sys: Symbol, symbol_eos: Symbol) {
        let a = Quantity::new(1, symbol_sys);
        let b = Quantity::new(1, symbol_eos);
        assert_eq!(
            a.checked_add(b),
            Err(QuantityError::SymbolMismatch {
                lhs: symbol_sys,
                rhs: symbol_eos,
            }),
        );
    }

    #[rstest]
    fn test_checked_add_at_bound(symbol_sys: Symbol) {
        let max = Quantity::new(QUANTITY_MAX_AMOUNT, symbol_sys);
        let one = Quantity::new(1, symbol_sys);
        assert_eq!(max.checked_add(one), Err(QuantityError::Overflow("addition")));
        assert_eq!(
            (-max).checked_add(-one),
            Err(QuantityError::Underflow("addition")),
        );
        assert_eq!(max.checked_add(Quantity::zero(symbol_sys)).unwrap(), max);
    }

    #[rstest]
    fn test_checked_sub(symbol_sys: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(30, symbol_sys);
        assert_eq!(a.checked_sub(b).unwrap().amount, 70);
        assert_eq!(b.checked_sub(a).unwrap().amount, -70);
    }

    #[rstest]
    fn test_checked_sub_at_bound(symbol_sys: Symbol) {
        let max = Quantity::new(QUANTITY_MAX_AMOUNT, symbol_sys);
        let one = Quantity::new(1, symbol_sys);
        assert_eq!(
            (-max).checked_sub(one),
            Err(QuantityError::Underflow("subtraction")),
        );
        assert_eq!(
            max.checked_sub(-one),
            Err(QuantityError::Overflow("subtraction")),
        );
    }

    #[rstest]
    fn test_add_sub_round_trip(symbol_sys: Symbol) {
        let a = Quantity::new(123_456, symbol_sys);
        let b = Quantity::new(789, symbol_sys);
        assert_eq!((a + b) - b, a);
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_add_symbol_mismatch_panics(symbol_sys: Symbol, symbol_eos: Symbol) {
        let _ = Quantity::new(1, symbol_sys) + Quantity::new(1, symbol_eos);
    }

    #[rstest]
    fn test_add_assign_sub_assign(symbol_sys: Symbol) {
        let mut quantity = Quantity::new(100, symbol_sys);
        quantity += Quantity::new(50, symbol_sys);
        assert_eq!(quantity.amount, 150);
        quantity -= Quantity::new(25, symbol_sys);
        assert_eq!(quantity.amount, 125);
    }

    #[rstest]
    fn test_checked_mul_identity_and_zero(symbol_sys: Symbol) {
        let a = Quantity::new(123_456, symbol_sys);
        assert_eq!(a.checked_mul(1).unwrap(), a);
        assert_eq!(a.checked_mul(0).unwrap().amount, 0);
        assert_eq!(a.checked_mul(-1).unwrap().amount, -123_456);
    }

    #[rstest]
    fn test_checked_mul_widened_bounds(symbol_sys: Symbol) {
        let max = Quantity::new(QUANTITY_MAX_AMOUNT, symbol_sys);
        assert_eq!(max.checked_mul(2), Err(QuantityError::Overflow("multiplication")));
        assert_eq!(
            max.checked_mul(-2),
            Err(QuantityError::Underflow("multiplication")),
        );
        // A product wrapping i64 exactly must still be caught by the i128 check
        let a = Quantity::new(1 << 32, symbol_sys);
        assert_eq!(
            a.checked_mul(1 << 32),
            Err(QuantityError::Overflow("multiplication")),
        );
    }

    #[rstest]
    fn test_mul_both_operand_orders(symbol_sys: Symbol) {
        let a = Quantity::new(21, symbol_sys);
        assert_eq!((a * 2).amount, 42);
        assert_eq!((2 * a).amount, 42);
        let mut b = a;
        b *= 3;
        assert_eq!(b.amount, 63);
    }

    #[rstest]
    #[case(7, 2, 3)]
    #[case(-7, 2, -3)]
    #[case(7, -2, -3)]
    #[case(-7, -2, 3)]
    fn test_checked_div_truncates_toward_zero(
        #[case] amount: i64,
        #[case] scalar: i64,
        #[case] expected: i64,
        symbol_sys: Symbol,
    ) {
        let quantity = Quantity::new(amount, symbol_sys);
        assert_eq!(quantity.checked_div(scalar).unwrap().amount, expected);
    }

    #[rstest]
    fn test_checked_div_by_zero(symbol_sys: Symbol) {
        let quantity = Quantity::new(7, symbol_sys);
        assert_eq!(quantity.checked_div(0), Err(QuantityError::DivideByZero));
    }

    #[rstest]
    fn test_checked_div_signed_min_edge(symbol_sys: Symbol) {
        // Reachable only through field construction; the guard must still hold
        let quantity = Quantity {
            amount: i64::MIN,
            symbol: symbol_sys,
        };
        assert_eq!(
            quantity.checked_div(-1),
            Err(QuantityError::Overflow("signed division")),
        );
    }

    #[rstest]
    fn test_div_assign(symbol_sys: Symbol) {
        let mut quantity = Quantity::new(100, symbol_sys);
        quantity /= 3;
        assert_eq!(quantity.amount, 33);
    }

    #[rstest]
    fn test_checked_div_by_quantity(symbol_sys: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(30, symbol_sys);
        assert_eq!(a.checked_div_by(b).unwrap(), 3);
        assert_eq!(a / b, 3);
    }

    #[rstest]
    fn test_checked_div_by_quantity_zero_divisor(symbol_sys: Symbol, symbol_eos: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        // Zero divisor is rejected before the symbol check
        let zero_other = Quantity::zero(symbol_eos);
        assert_eq!(a.checked_div_by(zero_other), Err(QuantityError::DivideByZero));
        assert_eq!(
            a.checked_div_by(Quantity::zero(symbol_sys)),
            Err(QuantityError::DivideByZero),
        );
    }

    #[rstest]
    fn test_checked_div_by_quantity_symbol_mismatch(symbol_sys: Symbol, symbol_eos: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(30, symbol_eos);
        assert_eq!(
            a.checked_div_by(b),
            Err(QuantityError::SymbolMismatch {
                lhs: symbol_sys,
                rhs: symbol_eos,
            }),
        );
    }

    #[rstest]
    fn test_checked_comparisons(symbol_sys: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(200, symbol_sys);
        assert!(a.checked_lt(b).unwrap());
        assert!(a.checked_le(b).unwrap());
        assert!(b.checked_gt(a).unwrap());
        assert!(b.checked_ge(a).unwrap());
        assert!(a.checked_eq(a).unwrap());
        assert!(a.checked_ne(b).unwrap());
    }

    #[rstest]
    fn test_checked_comparisons_symbol_mismatch(symbol_sys: Symbol, symbol_eos: Symbol) {
        let a = Quantity::new(1, symbol_sys);
        let b = Quantity::new(1, symbol_eos);
        let mismatch = QuantityError::SymbolMismatch {
            lhs: symbol_sys,
            rhs: symbol_eos,
        };
        assert_eq!(a.checked_eq(b), Err(mismatch));
        assert_eq!(a.checked_ne(b), Err(mismatch));
        assert_eq!(a.checked_lt(b), Err(mismatch));
        assert_eq!(a.checked_le(b), Err(mismatch));
        assert_eq!(a.checked_gt(b), Err(mismatch));
        assert_eq!(a.checked_ge(b), Err(mismatch));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_operator_comparison_symbol_mismatch_panics(symbol_sys: Symbol, symbol_eos: Symbol) {
        let _ = Quantity::new(1, symbol_sys) < Quantity::new(1, symbol_eos);
    }

    #[rstest]
    fn test_comparison_operators(symbol_sys: Symbol) {
        let a = Quantity::new(100, symbol_sys);
        let b = Quantity::new(200, symbol_sys);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= b);
        assert!(b >= a);
        assert_eq!(a, Quantity::new(100, symbol_sys));
        assert_ne!(a, b);
    }

    #[rstest]
    #[case(100_000, "10.0000 SYS")]
    #[case(-100_000, "-10.0000 SYS")]
    #[case(5, "0.0005 SYS")]
    #[case(-5, "-0.0005 SYS")]
    fn test_display(#[case] amount: i64, #[case] expected: &str, symbol_sys: Symbol) {
        assert_eq!(Quantity::new(amount, symbol_sys).to_string(), expected);
    }

    #[rstest]
    fn test_debug(symbol_sys: Symbol) {
        let quantity = Quantity::new(100_000, symbol_sys);
        assert_eq!(format!("{quantity:?}"), "Quantity(10.0000 SYS)");
    }

    #[rstest]
    fn test_as_decimal(symbol_sys: Symbol) {
        let quantity = Quantity::new(123_456, symbol_sys);
        assert_eq!(quantity.as_decimal(), dec!(12.3456));
    }

    #[rstest]
    #[case("10.0000 SYS", 100_000, 4)]
    #[case("-10.0000 SYS", -100_000, 4)]
    #[case("0.0005 SYS", 5, 4)]
    #[case("42 SYS", 42, 0)]
    fn test_from_str_valid(#[case] input: &str, #[case] amount: i64, #[case] precision: u8) {
        let quantity = Quantity::from(input);
        assert_eq!(quantity.amount, amount);
        assert_eq!(quantity.symbol.precision, precision);
        assert_eq!(quantity.symbol.code.as_str(), "SYS");
    }

    #[rstest]
    #[case("10.0000SYS")] // <-- no whitespace separator
    #[case("10.0000 SYS SYS")] // <-- too many parts
    #[case("1x.0 SYS")] // <-- invalid digit
    #[case("10.0 sys")] // <-- invalid code
    #[case(". SYS")] // <-- no digits
    fn test_from_str_invalid(#[case] input: &str) {
        assert!(Quantity::from_str(input).is_err());
    }

    #[rstest]
    fn test_serde_round_trip(symbol_sys: Symbol) {
        let quantity = Quantity::new(-5, symbol_sys);
        let json = serde_json::to_string(&quantity).unwrap();
        assert_eq!(json, "\"-0.0005 SYS\"");
        let parsed: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quantity);
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Property-based testing
    ////////////////////////////////////////////////////////////////////////////////

    use proptest::prelude::*;

    fn symbol_strategy() -> impl Strategy<Value = Symbol> {
        prop_oneof![
            Just(Symbol::new("SYS", 4)),
            Just(Symbol::new("EOS", 4)),
            Just(Symbol::new("GOLD", 0)),
            Just(Symbol::new("WEI", 18)),
        ]
    }

    fn amount_strategy() -> impl Strategy<Value = i64> {
        // Halving the bound keeps single additions within range
        prop_oneof![
            -1_000_000_i64..1_000_000,
            Just(0),
            Just(QUANTITY_MAX_AMOUNT / 2),
            Just(-QUANTITY_MAX_AMOUNT / 2),
        ]
    }

    fn quantity_strategy() -> impl Strategy<Value = Quantity> {
        (amount_strategy(), symbol_strategy())
            .prop_map(|(amount, symbol)| Quantity::new(amount, symbol))
    }

    proptest! {
        #[rstest]
        fn prop_add_sub_inverse(a in quantity_strategy(), b in quantity_strategy()) {
            if a.symbol == b.symbol {
                let sum = a.checked_add(b).unwrap();
                prop_assert_eq!(sum.checked_sub(b).unwrap(), a);
            }
        }

        #[rstest]
        fn prop_negation_involution(a in quantity_strategy()) {
            prop_assert_eq!(-(-a), a);
            prop_assert!(a.checked_add(-a).unwrap().is_zero());
        }

        #[rstest]
        fn prop_comparison_consistency(a in quantity_strategy(), b in quantity_strategy()) {
            if a.symbol == b.symbol {
                let eq = a.checked_eq(b).unwrap();
                let lt = a.checked_lt(b).unwrap();
                let gt = a.checked_gt(b).unwrap();
                let exclusive = [eq, lt, gt].iter().filter(|&&x| x).count();
                prop_assert_eq!(exclusive, 1, "exactly one of ==, <, > must hold");
                prop_assert_eq!(a.checked_le(b).unwrap(), eq || lt);
                prop_assert_eq!(a.checked_ge(b).unwrap(), eq || gt);
            }
        }

        #[rstest]
        fn prop_string_round_trip(a in quantity_strategy()) {
            let parsed = Quantity::from_str(&a.to_string());
            // The precision-zero canonical form keeps its trailing separator,
            // which the parser reads back as precision zero.
            prop_assert_eq!(parsed.unwrap(), a);
        }
    }
}
