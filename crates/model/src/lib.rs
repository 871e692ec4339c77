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

//! Domain model for token balances inside a deterministic contract-execution
//! environment.
//!
//! The `tokenvm-model` crate provides the checked fixed-point value types a
//! token contract operates on:
//!
//! - [`types::Symbol`]: a currency descriptor (code plus decimal precision).
//! - [`types::Quantity`]: a bounded, symbol-denominated fixed-point amount.
//! - [`types::OwnedQuantity`]: a quantity paired with the owning contract.
//! - [`identifiers::ContractId`]: an opaque 64-bit contract handle.
//!
//! All arithmetic is checked against the domain magnitude bound of `2^62 - 1`
//! before any state is mutated, and every binary operation validates that the
//! operands share a symbol (and, for owned quantities, an owner). Checked
//! methods surface failures as [`errors::QuantityError`]; the operator forms
//! promote the same failures to panics, unwinding the invoking transaction.
//!
//! Every operation is a pure computation over owned values: no wall-clock
//! time, randomness, or I/O is reachable from any code path.
//!
//! # Feature flags
//!
//! - `stubs`: Exposes the test fixture module to downstream crates.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod errors;
pub mod identifiers;
pub mod serialization;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
#[allow(missing_docs)]
pub mod stubs;
