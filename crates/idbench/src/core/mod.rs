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

//! Core benchmarking infrastructure.
//!
//! # Modules
//!
//! - `case`: Case labels and measured records
//! - `config`: Measurement configuration
//! - `measurement`: The adaptive timing loop
//! - `alloc`: Allocation counting

pub mod alloc;
pub mod case;
pub mod config;
pub mod measurement;

pub use alloc::{current_allocation, is_tracking, AllocSnapshot, Allocations, CountingAllocator};
pub use case::{BenchmarkCase, BenchmarkRecord};
pub use config::{MeasureConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_TIME};
pub use measurement::{measure, Bencher, BenchmarkResult};
