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

//! Measurement configuration.

use std::time::Duration;

/// Default minimum measured time per case.
pub const DEFAULT_MIN_TIME: Duration = Duration::from_secs(1);

/// Default iteration ceiling per case.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000_000;

/// Largest factor by which the iteration count may grow between two runs.
pub const MAX_GROWTH: u64 = 100;

/// Controls the adaptive iteration ramp of [`measure`](crate::core::measure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureConfig {
    /// A run stops ramping once its measured time reaches this.
    pub min_time: Duration,
    /// Hard ceiling on iterations in a single run.
    pub max_iterations: u64,
}

impl MeasureConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            min_time: DEFAULT_MIN_TIME,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the minimum measured time.
    pub fn with_min_time(mut self, min_time: Duration) -> Self {
        self.min_time = min_time;
        self
    }

    /// Sets the iteration ceiling (at least 1).
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}
