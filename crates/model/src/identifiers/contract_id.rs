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

//! Represents a valid contract account handle.

use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Represents the opaque 64-bit handle of a contract account.
///
/// The name encoding behind the handle is owned by the host environment; this
/// type carries the handle for value equality only.
#[repr(C)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(u64);

impl ContractId {
    /// Creates a new [`ContractId`] instance from the given raw handle.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner handle value.
    #[must_use]
    pub const fn inner(&self) -> u64 {
        self.0
    }
}

impl Debug for ContractId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(ContractId), self.0)
    }
}

impl Display for ContractId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContractId {
    fn from(value: u64) -> Self {
        Self::new(value)
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
    fn test_string_reprs() {
        let id = ContractId::new(42);
        assert_eq!(format!("{id}"), "42");
        assert_eq!(format!("{id:?}"), "ContractId(42)");
    }

    #[rstest]
    fn test_equality_is_on_the_handle() {
        assert_eq!(ContractId::new(7), ContractId::from(7));
        assert_ne!(ContractId::new(7), ContractId::new(8));
    }

    #[rstest]
    fn test_serde_as_u64() {
        let id = ContractId::new(12345);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12345");
        let parsed: ContractId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
