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

//! Identifier Generator Benchmark Framework
//!
//! Measures many independent ID generators under one timing loop and
//! renders a comparative report.
//!
//! ## Features
//!
//! - **Adaptive measurement**: iteration counts grow until a run is long
//!   enough to time reliably
//! - **Allocation counting**: optional global allocator wrapper
//! - **Reporting**: plain text, CSV and Markdown with per-group sections
//!
//! ## Usage
//!
//! ```
//! use idbench::prelude::*;
//! use std::time::Duration;
//!
//! let mut runner = BenchmarkRunner::new(
//!     MeasureConfig::new().with_min_time(Duration::from_millis(1)),
//! );
//! runner.register(
//!     BenchmarkCase::new("counter").unwrap().with_group("sequential"),
//!     |b| {
//!         let mut next = 0u64;
//!         b.iter(|| {
//!             next += 1;
//!             next
//!         });
//!         Ok(())
//!     },
//! );
//!
//! let mut reporter = Reporter::new(OutputFormat::Markdown);
//! reporter.extend(runner.run_all());
//!
//! let mut out = Vec::new();
//! reporter.render(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;
pub mod system;

pub use error::{CaseError, ReportError, Result, SetupError, UnknownFormatError};

/// Commonly used types for registering, running and reporting.
pub mod prelude {
    pub use crate::core::{
        BenchmarkCase, BenchmarkRecord, BenchmarkResult, Bencher, CountingAllocator,
        MeasureConfig,
    };
    pub use crate::error::{ReportError, SetupError};
    pub use crate::harness::{BenchmarkRunner, Progress, ResultCollection, RunObserver};
    pub use crate::reporters::{Column, OutputFormat, ReportConfig, Reporter};
    pub use crate::system::SystemInfo;
}
