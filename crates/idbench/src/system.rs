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

//! Host description attached to a report.

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Ordered key/value descriptors of the machine that ran the benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    entries: Vec<(String, String)>,
}

impl SystemInfo {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes the current host: OS, kernel, CPU, logical cores and
    /// total memory.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        let mut info = Self::new();
        info.insert(
            "os",
            format!(
                "{} {}",
                System::name().unwrap_or_else(|| "unknown".to_string()),
                System::os_version().unwrap_or_default()
            )
            .trim_end(),
        );
        info.insert(
            "kernel",
            System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        );
        info.insert("cpu", cpu);
        info.insert("cores", sys.cpus().len().to_string());
        info.insert(
            "memory",
            format!("{} MiB", sys.total_memory() / 1024 / 1024),
        );
        info
    }

    /// Appends a descriptor. An existing key is updated in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a descriptor.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Descriptors in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns whether no descriptor was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
