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

//! Common wire serialization traits and functions.
//!
//! The wire format is a concatenation of fixed-width little-endian fields in
//! the order given by each type's field descriptor. Field order is part of the
//! compatibility contract; implementations must never reorder fields.

use anyhow::Result;
use bytes::Bytes;

/// Represents types which are serializable to the fixed-width, field-ordered
/// wire format.
pub trait WireSerializable: Sized {
    /// The ordered field descriptor for this type.
    const FIELDS: &'static [&'static str];

    /// Encodes this value onto the end of `buf`, field by field in
    /// [`Self::FIELDS`] order.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decodes a value from the front of `buf`, advancing it past the bytes
    /// read.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is truncated or the decoded value fails
    /// validation.
    fn decode(buf: &mut &[u8]) -> Result<Self>;

    /// Serializes this value to wire-encoded bytes.
    fn to_wire_bytes(&self) -> Bytes {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        Bytes::from(buf)
    }

    /// Deserializes a value from wire-encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or if trailing bytes remain after
    /// the final field.
    fn from_wire_bytes(mut data: &[u8]) -> Result<Self> {
        let value = Self::decode(&mut data)?;
        anyhow::ensure!(
            data.is_empty(),
            "trailing bytes after decoding [{}]",
            Self::FIELDS.join(", "),
        );
        Ok(value)
    }
}

/// Reads a little-endian `i64` from the front of `buf`, advancing it.
///
/// # Errors
///
/// Returns an error if fewer than 8 bytes remain.
pub fn take_i64_le(buf: &mut &[u8]) -> Result<i64> {
    take_u64_le(buf).map(|raw| i64::from_le_bytes(raw.to_le_bytes()))
}

/// Reads a little-endian `u64` from the front of `buf`, advancing it.
///
/// # Errors
///
/// Returns an error if fewer than 8 bytes remain.
pub fn take_u64_le(buf: &mut &[u8]) -> Result<u64> {
    let Some((field, rest)) = buf.split_at_checked(8) else {
        anyhow::bail!("unexpected end of buffer: needed 8 bytes, had {}", buf.len());
    };
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(field);
    *buf = rest;
    Ok(u64::from_le_bytes(bytes))
}
