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

//! Canonical decimal rendering of raw fixed-point amounts.

/// Renders a raw fixed-point `amount` as a decimal string with exactly
/// `precision` fractional digits, followed by a space and the currency `code`.
///
/// The fractional remainder is rendered from the magnitude and left-padded
/// with zeros, so a negative amount whose integer part is zero keeps its sign
/// prefix: an amount of -5 at precision 4 renders as `"-0.0005 CODE"`.
///
/// At precision 0 the trailing separator is kept with no fractional digits
/// (`"123. CODE"`), preserving the canonical form emitted by existing token
/// contracts.
#[must_use]
pub fn format_units(amount: i64, precision: u8, code: &str) -> String {
    let p10 = 10_u64.pow(u32::from(precision));
    let magnitude = amount.unsigned_abs();
    let integer = magnitude / p10;
    let fraction = magnitude % p10;
    let sign = if amount < 0 { "-" } else { "" };

    if precision == 0 {
        return format!("{sign}{integer}. {code}");
    }
    format!("{sign}{integer}.{fraction:0>width$} {code}", width = usize::from(precision))
}
