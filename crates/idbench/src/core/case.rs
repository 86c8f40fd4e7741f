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

//! Benchmark case descriptions and measured records.

use crate::core::measurement::BenchmarkResult;
use crate::error::CaseError;
use serde::{Deserialize, Serialize};

/// Descriptive labels of one benchmark.
///
/// Only `name` is mandatory; `group`, `subgroup` and `description` default
/// to empty strings and render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    /// Display name, usually the crate providing the generator.
    pub name: String,
    /// Coarse category, e.g. "uuid v4" or "snowflake".
    pub group: String,
    /// Secondary label, e.g. "128-bit".
    pub subgroup: String,
    /// Free-text annotation, e.g. "thread-safe".
    pub description: String,
}

impl BenchmarkCase {
    /// Creates a case with the given name and empty labels.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EmptyName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CaseError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CaseError::EmptyName);
        }
        Ok(Self {
            name,
            group: String::new(),
            subgroup: String::new(),
            description: String::new(),
        })
    }

    /// Sets the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the subgroup label.
    pub fn with_subgroup(mut self, subgroup: impl Into<String>) -> Self {
        self.subgroup = subgroup.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns whether `needle` occurs in the name or group, ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.group.to_lowercase().contains(&needle)
    }
}

/// A case paired with its measured result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// What was measured.
    pub case: BenchmarkCase,
    /// How it performed.
    pub result: BenchmarkResult,
}

impl BenchmarkRecord {
    /// Pairs a case with its result.
    pub fn new(case: BenchmarkCase, result: BenchmarkResult) -> Self {
        Self { case, result }
    }

    /// Shorthand for the case name.
    pub fn name(&self) -> &str {
        &self.case.name
    }

    /// Shorthand for the case group.
    pub fn group(&self) -> &str {
        &self.case.group
    }
}
