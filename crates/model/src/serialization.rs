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

//! Wire-format implementations for the domain model types.
//!
//! Every field is fixed-width little-endian and encoded in declaration order:
//! a [`Quantity`] is its signed 8-byte amount followed by the symbol encoding,
//! an [`OwnedQuantity`] is a quantity followed by the owner handle. Decoding
//! re-runs the checked constructors, so invalid bytes never become values.

use anyhow::Result;
use tokenvm_core::serialization::{WireSerializable, take_i64_le, take_u64_le};

use crate::{
    identifiers::ContractId,
    types::{OwnedQuantity, Quantity, Symbol},
};

impl WireSerializable for Symbol {
    const FIELDS: &'static [&'static str] = &["raw"];

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.raw().to_le_bytes());
    }

    fn decode(buf: &mut &[u8]) -> Result<Self> {
        Self::try_from_raw(take_u64_le(buf)?)
    }
}

impl WireSerializable for ContractId {
    const FIELDS: &'static [&'static str] = &["contract"];

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.inner().to_le_bytes());
    }

    fn decode(buf: &mut &[u8]) -> Result<Self> {
        Ok(Self::new(take_u64_le(buf)?))
    }
}

impl WireSerializable for Quantity {
    const FIELDS: &'static [&'static str] = &["amount", "symbol"];

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.amount.to_le_bytes());
        self.symbol.encode(buf);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let amount = take_i64_le(buf)?;
        let symbol = Symbol::decode(buf)?;
        Ok(Self::new_checked(amount, symbol)?)
    }
}

impl WireSerializable for OwnedQuantity {
    const FIELDS: &'static [&'static str] = &["quantity", "contract"];

    fn encode(&self, buf: &mut Vec<u8>) {
        self.quantity.encode(buf);
        self.contract.encode(buf);
    }

    fn decode(buf: &mut &[u8]) -> Result<Self> {
        let quantity = Quantity::decode(buf)?;
        let contract = ContractId::decode(buf)?;
        Ok(Self::new_checked(quantity, contract)?)
    }
}
