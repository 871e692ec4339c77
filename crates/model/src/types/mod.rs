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

//! Value types for the token-contract domain model, such as `Symbol`,
//! `Quantity` and `OwnedQuantity`.

pub mod format;
pub mod owned;
pub mod quantity;
pub mod symbol;

// Re-exports
pub use crate::types::{
    format::format_units,
    owned::OwnedQuantity,
    quantity::{QUANTITY_MAX_AMOUNT, Quantity},
    symbol::{MAX_SYMBOL_CODE_LEN, MAX_SYMBOL_PRECISION, Symbol},
};
