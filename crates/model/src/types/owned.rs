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

//! Represents a token quantity paired with the contract which owns it.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use tokenvm_core::correctness::FAILED;

use crate::{
    errors::QuantityError,
    identifiers::ContractId,
    types::{Quantity, Symbol},
};

/// Represents a [`Quantity`] denominated under a specific owning contract.
///
/// Arithmetic and ordering between two owned quantities require the owners to
/// match before the contained quantities are combined. Equality is the
/// exception: it compares the (quantity, owner) pair structurally, so two
/// values under different owners are simply unequal rather than an error.
/// Callers relying on the owner precondition must use the ordering operators
/// or the checked methods, not `==`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedQuantity {
    /// The contained token quantity.
    pub quantity: Quantity,
    /// The contract which owns the quantity.
    pub contract: ContractId,
}

impl OwnedQuantity {
    /// Creates a new [`OwnedQuantity`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` fails its validity checks. No extra
    /// validation applies to `contract` (any handle is a valid owner).
    pub fn new_checked(quantity: Quantity, contract: ContractId) -> Result<Self, QuantityError> {
        let quantity = Quantity::new_checked(quantity.amount, quantity.symbol)?;
        Ok(Self { quantity, contract })
    }

    /// Creates a new [`OwnedQuantity`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`OwnedQuantity::new_checked`] for more details.
    pub fn new(quantity: Quantity, contract: ContractId) -> Self {
        Self::new_checked(quantity, contract).expect(FAILED)
    }

    /// Creates a new [`OwnedQuantity`] instance from a raw amount, symbol and owner.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Quantity::new_checked`] for more details.
    pub fn from_parts(amount: i64, symbol: Symbol, contract: ContractId) -> Self {
        Self {
            quantity: Quantity::new(amount, symbol),
            contract,
        }
    }

    /// Returns `true` if the contained quantity is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.quantity.is_valid()
    }

    /// Adds `rhs`, returning a new validated owned quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners differ, or if the contained quantities
    /// fail their own addition checks.
    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        self.check_owner(&rhs)?;
        Ok(Self {
            quantity: self.quantity.checked_add(rhs.quantity)?,
            contract: self.contract,
        })
    }

    /// Subtracts `rhs`, returning a new validated owned quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners differ, or if the contained quantities
    /// fail their own subtraction checks.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        self.check_owner(&rhs)?;
        Ok(Self {
            quantity: self.quantity.checked_sub(rhs.quantity)?,
            contract: self.contract,
        })
    }

    /// Returns whether this quantity is less than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners or symbols differ.
    pub fn checked_lt(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_owner(&rhs)?;
        self.quantity.checked_lt(rhs.quantity)
    }

    /// Returns whether this quantity is less than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners or symbols differ.
    pub fn checked_le(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_owner(&rhs)?;
        self.quantity.checked_le(rhs.quantity)
    }

    /// Returns whether this quantity is greater than `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners or symbols differ.
    pub fn checked_gt(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_owner(&rhs)?;
        self.quantity.checked_gt(rhs.quantity)
    }

    /// Returns whether this quantity is greater than or equal to `rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the owners or symbols differ.
    pub fn checked_ge(self, rhs: Self) -> Result<bool, QuantityError> {
        self.check_owner(&rhs)?;
        self.quantity.checked_ge(rhs.quantity)
    }

    fn check_owner(&self, rhs: &Self) -> Result<(), QuantityError> {
        if self.contract == rhs.contract {
            Ok(())
        } else {
            Err(QuantityError::OwnerMismatch {
                lhs: self.contract,
                rhs: rhs.contract,
            })
        }
    }
}

// Equality stays the derived structural comparison over (quantity, contract),
// with no owner precondition; only the ordering operators require owner
// equality. Existing callers and encoded data depend on this split, so it is
// kept as-is. `Ord` is deliberately not implemented: a total order over
// differing owners does not exist.
impl PartialOrd for OwnedQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.check_owner(other).expect(FAILED);
        self.quantity.partial_cmp(&other.quantity)
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

impl Neg for OwnedQuantity {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            quantity: -self.quantity,
            contract: self.contract,
        }
    }
}

impl Add for OwnedQuantity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect(FAILED)
    }
}

impl Sub for OwnedQuantity {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect(FAILED)
    }
}

impl AddAssign for OwnedQuantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.checked_add(rhs).expect(FAILED);
    }
}

impl SubAssign for OwnedQuantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.checked_sub(rhs).expect(FAILED);
    }
}

impl Display for OwnedQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.quantity, self.contract)
    }
}
