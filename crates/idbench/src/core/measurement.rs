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

//! Timing loop for a single benchmark case.
//!
//! A benchmark function receives a [`Bencher`], performs whatever setup it
//! needs, optionally resets the timer, and hands the hot path to
//! [`Bencher::iter`]. [`measure`] calls the function repeatedly with a
//! growing iteration count until one run lasts at least
//! [`MeasureConfig::min_time`].
//!
//! ```
//! use idbench::core::{measure, MeasureConfig};
//! use std::time::Duration;
//!
//! let config = MeasureConfig::new().with_min_time(Duration::from_millis(1));
//! let result = measure(&config, |b| {
//!     let mut next = 0u64;
//!     b.reset_timer();
//!     b.iter(|| {
//!         next += 1;
//!         next
//!     });
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert!(result.iterations > 0);
//! ```

use crate::core::alloc::{self, AllocSnapshot, Allocations};
use crate::core::config::{MeasureConfig, MAX_GROWTH};
use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::trace;

/// Outcome of measuring one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Generator calls in the final run.
    pub iterations: u64,
    /// Wall-clock time of those calls.
    pub total: Duration,
    /// Allocation totals of those calls, when tracking is active.
    pub allocations: Option<Allocations>,
}

impl BenchmarkResult {
    /// Creates a result without allocation data.
    pub fn new(iterations: u64, total: Duration) -> Self {
        Self {
            iterations,
            total,
            allocations: None,
        }
    }

    /// Attaches allocation totals.
    pub fn with_allocations(mut self, allocations: Allocations) -> Self {
        self.allocations = Some(allocations);
        self
    }

    /// Mean time per call in nanoseconds (zero without iterations).
    pub fn per_op_nanos(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total.as_nanos() as f64 / self.iterations as f64
    }

    /// Mean time per call, truncated to whole nanoseconds.
    pub fn per_op(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / self.iterations as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Bytes allocated per call, if known.
    pub fn bytes_per_op(&self) -> Option<u64> {
        self.allocations.map(|a| a.bytes / self.iterations.max(1))
    }

    /// Allocation calls per call, if known.
    pub fn allocs_per_op(&self) -> Option<u64> {
        self.allocations.map(|a| a.count / self.iterations.max(1))
    }
}

/// Iteration control handed to a benchmark function.
///
/// The timer is already running when the function is entered, so any setup
/// is measured unless the function calls [`reset_timer`](Self::reset_timer).
#[derive(Debug)]
pub struct Bencher {
    iterations: u64,
    started: Option<Instant>,
    elapsed: Duration,
    alloc_start: AllocSnapshot,
    allocations: Allocations,
}

impl Bencher {
    fn new(iterations: u64) -> Self {
        Self {
            iterations,
            started: None,
            elapsed: Duration::ZERO,
            alloc_start: AllocSnapshot::default(),
            allocations: Allocations::default(),
        }
    }

    /// How many times [`iter`](Self::iter) will call its closure.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Time accumulated so far.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }

    /// Calls `f` exactly [`iterations`](Self::iterations) times.
    #[inline]
    pub fn iter<T, F>(&mut self, mut f: F)
    where
        F: FnMut() -> T,
    {
        for _ in 0..self.iterations {
            black_box(f());
        }
    }

    /// Discards time and allocations accumulated so far.
    pub fn reset_timer(&mut self) {
        self.elapsed = Duration::ZERO;
        self.allocations = Allocations::default();
        if self.started.is_some() {
            self.alloc_start = alloc::current_allocation();
            self.started = Some(Instant::now());
        }
    }

    /// Resumes timing. Does nothing if the timer is running.
    pub fn start_timer(&mut self) {
        if self.started.is_none() {
            self.alloc_start = alloc::current_allocation();
            self.started = Some(Instant::now());
        }
    }

    /// Pauses timing. Does nothing if the timer is stopped.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
            let delta = alloc::current_allocation().since(&self.alloc_start);
            self.allocations.bytes += delta.bytes;
            self.allocations.count += delta.count;
        }
    }

    fn into_result(self) -> BenchmarkResult {
        let result = BenchmarkResult::new(self.iterations, self.elapsed);
        if alloc::is_tracking() {
            result.with_allocations(self.allocations)
        } else {
            result
        }
    }
}

/// Measures a benchmark function with an adaptive iteration count.
///
/// # Errors
///
/// Returns the [`SetupError`] of the first run whose setup failed; no
/// further runs are attempted.
pub fn measure<F>(config: &MeasureConfig, mut f: F) -> Result<BenchmarkResult, SetupError>
where
    F: FnMut(&mut Bencher) -> Result<(), SetupError>,
{
    let mut iterations = 1;
    loop {
        let bencher = run_once(&mut f, iterations)?;
        let elapsed = bencher.elapsed;
        trace!(iterations, elapsed_ns = elapsed.as_nanos() as u64, "timing run");

        if elapsed >= config.min_time || iterations >= config.max_iterations {
            return Ok(bencher.into_result());
        }
        iterations = next_iterations(iterations, elapsed, config);
    }
}

fn run_once<F>(f: &mut F, iterations: u64) -> Result<Bencher, SetupError>
where
    F: FnMut(&mut Bencher) -> Result<(), SetupError>,
{
    let mut bencher = Bencher::new(iterations);
    bencher.start_timer();
    let outcome = f(&mut bencher);
    bencher.stop_timer();
    outcome.map(|()| bencher)
}

/// Predicts the iteration count that reaches `min_time`, with 20% headroom,
/// growing at most [`MAX_GROWTH`] times and at least by one.
fn next_iterations(previous: u64, elapsed: Duration, config: &MeasureConfig) -> u64 {
    let goal = config.min_time.as_nanos();
    let per_op = (elapsed.as_nanos() / previous.max(1) as u128).max(1);

    let mut predicted = goal / per_op;
    predicted += predicted / 5;
    let predicted = predicted
        .min(previous as u128 * MAX_GROWTH as u128)
        .max(previous as u128 + 1);

    round_up(u64::try_from(predicted).unwrap_or(u64::MAX)).min(config.max_iterations)
}

/// Rounds up to the next 1, 2, 3 or 5 times a power of ten.
fn round_up(n: u64) -> u64 {
    let mut base = 1u64;
    while base <= n / 10 {
        base *= 10;
    }
    match n {
        n if n <= base => base,
        n if n <= 2 * base => 2 * base,
        n if n <= 3 * base => 3 * base,
        n if n <= 5 * base => 5 * base,
        _ => base.saturating_mul(10),
    }
}
