// idbench - Identifier Generator Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Human-readable value formatting shared by the text and Markdown reporters.

use std::time::Duration;

const UNITS: [(f64, &str); 4] = [
    (1_000_000_000.0, "s"),
    (1_000_000.0, "ms"),
    (1_000.0, "µs"),
    (1.0, "ns"),
];

/// Formats a duration in the largest unit whose value is at least one.
///
/// At most two decimals are kept and trailing zeros are dropped.
///
/// ```
/// use idbench::reporters::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_nanos(50)), "50ns");
/// assert_eq!(format_duration(Duration::from_nanos(1_250)), "1.25µs");
/// assert_eq!(format_duration(Duration::from_secs(2)), "2s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    format_nanos(duration.as_nanos() as f64)
}

/// Formats a fractional nanosecond count like [`format_duration`].
///
/// Values below one nanosecond stay in `ns` with their decimals.
///
/// ```
/// use idbench::reporters::format_nanos;
///
/// assert_eq!(format_nanos(1.5), "1.5ns");
/// assert_eq!(format_nanos(0.7), "0.7ns");
/// ```
pub fn format_nanos(nanos: f64) -> String {
    let mut idx = UNITS
        .iter()
        .position(|(scale, _)| nanos >= *scale)
        .unwrap_or(UNITS.len() - 1);

    // 999.999µs rounds to 1000.00µs and reads better as 1ms
    if idx > 0 && (nanos / UNITS[idx].0 * 100.0).round() >= 100_000.0 {
        idx -= 1;
    }

    let (scale, unit) = UNITS[idx];
    let value = format!("{:.2}", nanos / scale);
    format!("{}{}", trim_decimal(&value), unit)
}

/// Drops trailing zeros and a dangling decimal point.
pub(crate) fn trim_decimal(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}
