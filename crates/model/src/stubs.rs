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

//! Type stubs for testing.

use rstest::fixture;

use crate::{
    identifiers::ContractId,
    types::{OwnedQuantity, Quantity, Symbol},
};

#[fixture]
pub fn symbol_sys() -> Symbol {
    Symbol::new("SYS", 4)
}

#[fixture]
pub fn symbol_eos() -> Symbol {
    Symbol::new("EOS", 4)
}

#[fixture]
pub fn symbol_gold() -> Symbol {
    Symbol::new("GOLD", 0)
}

#[fixture]
pub fn quantity_sys(symbol_sys: Symbol) -> Quantity {
    Quantity::new(100_000, symbol_sys)
}

#[fixture]
pub fn contract_alpha() -> ContractId {
    ContractId::new(0xA1FA)
}

#[fixture]
pub fn contract_beta() -> ContractId {
    ContractId::new(0xBE7A)
}

#[fixture]
pub fn owned_quantity_sys(quantity_sys: Quantity, contract_alpha: ContractId) -> OwnedQuantity {
    OwnedQuantity::new(quantity_sys, contract_alpha)
}
