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

//! Error types for checked quantity operations.

use thiserror::Error;

use crate::{identifiers::ContractId, types::Symbol};

/// The error type returned by checked [`Quantity`](crate::types::Quantity) and
/// [`OwnedQuantity`](crate::types::OwnedQuantity) operations.
///
/// Every variant is fatal to the invoking operation: the operation either
/// fully succeeds with a validated value or fails without mutating any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The symbol failed its validity check at construction.
    #[error("invalid symbol name")]
    InvalidSymbol,
    /// The amount magnitude exceeded the `2^62 - 1` bound at construction or mutation.
    #[error("magnitude of quantity amount must be less than 2^62, was {0}")]
    OutOfRange(i64),
    /// A binary operation was attempted between quantities with differing symbols.
    #[error("symbol mismatch: {lhs} vs {rhs}")]
    SymbolMismatch {
        /// The symbol of the left-hand operand.
        lhs: Symbol,
        /// The symbol of the right-hand operand.
        rhs: Symbol,
    },
    /// Arithmetic or ordering was attempted between owned quantities with differing owners.
    #[error("owner mismatch: {lhs} vs {rhs}")]
    OwnerMismatch {
        /// The owner of the left-hand operand.
        lhs: ContractId,
        /// The owner of the right-hand operand.
        rhs: ContractId,
    },
    /// The scalar or quantity divisor was zero.
    #[error("divide by zero")]
    DivideByZero,
    /// The result would exceed the maximum representable amount.
    #[error("{0} overflow")]
    Overflow(&'static str),
    /// The result would fall below the minimum representable amount.
    #[error("{0} underflow")]
    Underflow(&'static str),
}
