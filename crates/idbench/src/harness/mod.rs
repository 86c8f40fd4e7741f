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

//! Benchmark harness: execution and result collection.
//!
//! # Modules
//!
//! - `runner`: Serial execution of registered cases
//! - `collection`: Ordered result storage
//! - `progress`: Progress bar fed by the runner

pub mod collection;
pub mod progress;
pub mod runner;

pub use collection::ResultCollection;
pub use progress::{Progress, DEFAULT_TICK_INTERVAL};
pub use runner::{BenchFn, BenchmarkRunner, RunObserver};
