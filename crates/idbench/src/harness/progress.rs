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

//! Progress bar for long benchmark runs.
//!
//! The bar advances once per case and is redrawn from indicatif's steady-tick
//! thread, so it keeps moving during a long case without touching the code
//! being timed.

use crate::core::BenchmarkCase;
use crate::harness::runner::RunObserver;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt;
use std::time::Duration;

/// Redraw interval of the steady tick.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Progress bar over a known number of cases.
///
/// Dropping an unfinished bar clears it and stops the tick thread.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// A bar drawn on stderr. Nothing is drawn when stderr is not a terminal.
    pub fn stderr(cases: usize) -> Self {
        Self::with_draw_target(cases, ProgressDrawTarget::stderr())
    }

    /// A bar that tracks progress without drawing anything.
    pub fn hidden(cases: usize) -> Self {
        Self::with_draw_target(cases, ProgressDrawTarget::hidden())
    }

    /// A bar drawn on `target`.
    pub fn with_draw_target(cases: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(cases as u64), target);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.enable_steady_tick(DEFAULT_TICK_INTERVAL);
        Self { bar }
    }

    /// Cases finished so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of cases.
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Label of the case currently running (or last run).
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Returns whether [`finish`](Self::finish) was called.
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Stops the steady tick and erases the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("position", &self.position())
            .field("length", &self.length())
            .finish()
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl RunObserver for Progress {
    fn case_started(&mut self, case: &BenchmarkCase) {
        let label = if case.group.is_empty() {
            case.name.clone()
        } else {
            format!("{} / {}", case.group, case.name)
        };
        self.bar.set_message(label);
    }

    fn case_finished(&mut self, _case: &BenchmarkCase) {
        self.bar.inc(1);
    }
}
