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

//! Ordered collection of measured records.

use crate::core::BenchmarkRecord;
use crate::system::SystemInfo;
use serde::{Deserialize, Serialize};

/// Append-only sequence of records; insertion order is report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultCollection {
    records: Vec<BenchmarkRecord>,
    system_info: Option<SystemInfo>,
}

impl ResultCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no record was collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Attaches the host description.
    pub fn set_system_info(&mut self, info: SystemInfo) {
        self.system_info = Some(info);
    }

    /// The host description, if attached.
    pub fn system_info(&self) -> Option<&SystemInfo> {
        self.system_info.as_ref()
    }

    /// Returns whether any record carries allocation figures.
    pub fn has_allocations(&self) -> bool {
        self.records.iter().any(|r| r.result.allocations.is_some())
    }

    /// Splits into records and host description.
    pub fn into_parts(self) -> (Vec<BenchmarkRecord>, Option<SystemInfo>) {
        (self.records, self.system_info)
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<BenchmarkRecord> for ResultCollection {
    fn extend<I: IntoIterator<Item = BenchmarkRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
