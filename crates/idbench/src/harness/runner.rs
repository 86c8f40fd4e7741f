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

//! Benchmark runner for executing registered cases in order.

use crate::core::config::MeasureConfig;
use crate::core::{measure, Bencher, BenchmarkCase, BenchmarkRecord};
use crate::error::SetupError;
use crate::harness::collection::ResultCollection;
use tracing::{debug, info};

/// A benchmark function: optional setup, then [`Bencher::iter`].
pub type BenchFn = Box<dyn FnMut(&mut Bencher) -> Result<(), SetupError>>;

/// Receives per-case notifications while the runner works.
///
/// Both hooks default to doing nothing. Skipped cases are reported as
/// finished too.
pub trait RunObserver {
    /// Called before a case is measured.
    fn case_started(&mut self, _case: &BenchmarkCase) {}

    /// Called once a case completed or was skipped.
    fn case_finished(&mut self, _case: &BenchmarkCase) {}
}

impl RunObserver for () {}

/// Runs registered cases one at a time, in registration order.
///
/// Cases never run concurrently: each one needs the CPU to itself for its
/// timing to mean anything.
pub struct BenchmarkRunner {
    config: MeasureConfig,
    benchmarks: Vec<(BenchmarkCase, BenchFn)>,
}

impl BenchmarkRunner {
    /// Creates a runner with the specified measurement configuration.
    pub fn new(config: MeasureConfig) -> Self {
        Self {
            config,
            benchmarks: Vec::new(),
        }
    }

    /// The measurement configuration.
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// Registers a case and its benchmark function.
    pub fn register<F>(&mut self, case: BenchmarkCase, bench_fn: F)
    where
        F: FnMut(&mut Bencher) -> Result<(), SetupError> + 'static,
    {
        self.benchmarks.push((case, Box::new(bench_fn)));
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Returns whether no case is registered.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Registered cases in order.
    pub fn cases(&self) -> impl Iterator<Item = &BenchmarkCase> {
        self.benchmarks.iter().map(|(case, _)| case)
    }

    /// Keeps only the cases matching `predicate`.
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&BenchmarkCase) -> bool,
    {
        self.benchmarks.retain(|(case, _)| predicate(case));
    }

    /// Runs every registered case and collects the completed ones.
    ///
    /// A case whose setup fails is skipped; the remaining cases still run.
    pub fn run_all(self) -> ResultCollection {
        self.run_all_with(&mut ())
    }

    /// Like [`run_all`](Self::run_all), notifying `observer` around each case.
    pub fn run_all_with<O>(self, observer: &mut O) -> ResultCollection
    where
        O: RunObserver + ?Sized,
    {
        let total = self.benchmarks.len();
        info!(benchmarks = total, "running benchmarks");

        let mut collection = ResultCollection::new();
        let mut skipped = 0usize;

        for (case, mut bench_fn) in self.benchmarks {
            observer.case_started(&case);
            let outcome = measure(&self.config, &mut bench_fn);
            observer.case_finished(&case);

            match outcome {
                Ok(result) => {
                    debug!(
                        name = %case.name,
                        group = %case.group,
                        iterations = result.iterations,
                        per_op_ns = result.per_op_nanos(),
                        "benchmark complete"
                    );
                    collection.push(BenchmarkRecord::new(case, result));
                }
                Err(err) => {
                    debug!(
                        name = %case.name,
                        group = %case.group,
                        error = %err,
                        "benchmark skipped"
                    );
                    skipped += 1;
                }
            }
        }

        info!(completed = collection.len(), skipped, "benchmarks finished");
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn quick_runner() -> BenchmarkRunner {
        BenchmarkRunner::new(MeasureConfig::new().with_min_time(Duration::from_millis(1)))
    }

    fn case(name: &str, group: &str) -> BenchmarkCase {
        BenchmarkCase::new(name).unwrap().with_group(group)
    }

    fn counting(b: &mut Bencher) -> Result<(), SetupError> {
        let mut counter = 0u64;
        b.iter(|| {
            counter = counter.wrapping_add(1);
            counter
        });
        Ok(())
    }

    #[test]
    fn test_runner_creation() {
        let runner = quick_runner();
        assert!(runner.is_empty());
        assert_eq!(runner.config().min_time, Duration::from_millis(1));
    }

    #[test]
    fn test_register_benchmark() {
        let mut runner = quick_runner();
        runner.register(case("a", "g"), counting);
        runner.register(case("b", "g"), counting);
        assert_eq!(runner.len(), 2);
    }

    #[test]
    fn test_run_all_preserves_registration_order() {
        let mut runner = quick_runner();
        // Deliberately slow first case: order must not follow durations
        runner.register(case("slow", "x"), |b| {
            b.iter(|| std::thread::sleep(Duration::from_micros(50)));
            Ok(())
        });
        runner.register(case("fast", "y"), counting);
        runner.register(case("medium", "x"), counting);

        let collection = runner.run_all();
        let names: Vec<&str> = collection.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["slow", "fast", "medium"]);
        assert!(collection.iter().all(|r| r.result.iterations > 0));
    }

    #[test]
    fn test_setup_failure_is_skipped() {
        let ran_after = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran_after);

        let mut runner = quick_runner();
        runner.register(case("first", "g"), counting);
        runner.register(case("broken", "g"), |_b| {
            Err(SetupError::new("no machine id"))
        });
        runner.register(case("last", "g"), move |b| {
            *flag.borrow_mut() = true;
            counting(b)
        });

        let collection = runner.run_all();
        let names: Vec<&str> = collection.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["first", "last"]);
        assert!(*ran_after.borrow());
    }

    #[test]
    fn test_retain_filters_cases() {
        let mut runner = quick_runner();
        runner.register(case("uuid", "uuid v4"), counting);
        runner.register(case("xid", "pseudo-snowflake"), counting);
        runner.register(case("ulid", "pseudo-uuid"), counting);

        runner.retain(|c| c.matches("uuid"));
        let names: Vec<&str> = runner.cases().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["uuid", "ulid"]);
    }

    #[derive(Default)]
    struct Events(Vec<String>);

    impl RunObserver for Events {
        fn case_started(&mut self, case: &BenchmarkCase) {
            self.0.push(format!("start {}", case.name));
        }

        fn case_finished(&mut self, case: &BenchmarkCase) {
            self.0.push(format!("end {}", case.name));
        }
    }

    #[test]
    fn test_observer_sees_every_case() {
        let mut runner = quick_runner();
        runner.register(case("a", "g"), counting);
        runner.register(case("broken", "g"), |_b| Err(SetupError::new("unavailable")));

        let mut events = Events::default();
        let collection = runner.run_all_with(&mut events);
        assert_eq!(collection.len(), 1);
        assert_eq!(events.0, vec!["start a", "end a", "start broken", "end broken"]);
    }

    #[test]
    fn test_empty_runner() {
        let collection = quick_runner().run_all();
        assert!(collection.is_empty());
    }
}
