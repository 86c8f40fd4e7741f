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

//! The identifier generators under test.
//!
//! Entries are listed in report order and grouped by ID family. Stateful
//! generators are built before the timer is reset so only generation is
//! measured.

use idbench::core::{Bencher, BenchmarkCase};
use idbench::error::{CaseError, SetupError};
use idbench::harness::BenchmarkRunner;
use scru128::Scru128Generator;
use sonyflake::Sonyflake;
use ulid::Ulid;
use uuid::Uuid;

type Bench = fn(&mut Bencher) -> Result<(), SetupError>;

/// One registered generator.
#[derive(Debug, Clone, Copy)]
pub struct SuiteEntry {
    /// Crate (and type, when it matters) providing the generator
    pub name: &'static str,
    /// ID family
    pub group: &'static str,
    /// Width of the identifier
    pub bits: &'static str,
    /// Notes on the variant
    pub info: &'static str,
    bench: Bench,
}

impl SuiteEntry {
    const fn new(
        name: &'static str,
        group: &'static str,
        bits: &'static str,
        info: &'static str,
        bench: Bench,
    ) -> Self {
        Self {
            name,
            group,
            bits,
            info,
            bench,
        }
    }

    fn case(&self) -> Result<BenchmarkCase, CaseError> {
        Ok(BenchmarkCase::new(self.name)?
            .with_group(self.group)
            .with_subgroup(self.bits)
            .with_description(self.info))
    }
}

/// Every generator, in report order.
pub const SUITE: &[SuiteEntry] = &[
    // snowflake
    SuiteEntry::new("snowflaked", "snowflake", "64-bit", "", snowflaked_generator),
    SuiteEntry::new(
        "snowflaked::sync",
        "snowflake",
        "64-bit",
        "thread-safe",
        snowflaked_sync_generator,
    ),
    // pseudo-snowflake
    SuiteEntry::new("xid", "pseudo-snowflake", "96-bit", "base32 hex encoded", xid_new),
    SuiteEntry::new("sonyflake", "pseudo-snowflake", "63-bit", "thread-safe", sonyflake_next),
    // uuid
    SuiteEntry::new("uuid", "uuid v1", "128-bit", "", uuid_v1),
    SuiteEntry::new("uuid", "uuid v3", "128-bit", "", uuid_v3),
    SuiteEntry::new("uuid", "uuid v4", "128-bit", "", uuid_v4),
    SuiteEntry::new(
        "uuid",
        "uuid v4",
        "128-bit",
        "formatted as a uuid string",
        uuid_v4_string,
    ),
    SuiteEntry::new(
        "uuid",
        "uuid v4",
        "128-bit",
        "formatted into a stack buffer",
        uuid_v4_encode,
    ),
    SuiteEntry::new("uuid", "uuid v5", "128-bit", "", uuid_v5),
    SuiteEntry::new("uuid", "uuid v6", "128-bit", "", uuid_v6),
    SuiteEntry::new("uuid", "uuid v7", "128-bit", "", uuid_v7),
    // pseudo-uuid
    SuiteEntry::new("ulid", "pseudo-uuid", "128-bit", "", ulid_new),
    SuiteEntry::new("ulid::Generator", "pseudo-uuid", "128-bit", "monotonic", ulid_monotonic),
    SuiteEntry::new("scru128", "pseudo-uuid", "128-bit", "monotonic", scru128_generator),
    SuiteEntry::new("nanoid", "pseudo-uuid", "126-bit", "21 url-safe characters", nanoid_new),
];

/// Node id used by the time-based UUID versions.
const NODE_ID: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Name hashed by the name-based UUID versions.
const NAME: &[u8] = b"name";

/// Instance id of the snowflake generators.
const INSTANCE: u16 = 42;

/// Registers every generator with the runner.
///
/// # Errors
///
/// Returns [`CaseError`] if an entry is described incorrectly.
pub fn register_all(runner: &mut BenchmarkRunner) -> Result<(), CaseError> {
    for entry in SUITE {
        runner.register(entry.case()?, entry.bench);
    }
    Ok(())
}

fn snowflaked_generator(b: &mut Bencher) -> Result<(), SetupError> {
    let mut generator = snowflaked::Generator::new(INSTANCE);
    b.reset_timer();
    b.iter(|| generator.generate::<u64>());
    Ok(())
}

fn snowflaked_sync_generator(b: &mut Bencher) -> Result<(), SetupError> {
    let generator = snowflaked::sync::Generator::new(INSTANCE);
    b.reset_timer();
    b.iter(|| generator.generate::<u64>());
    Ok(())
}

fn xid_new(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(xid::new);
    Ok(())
}

fn sonyflake_next(b: &mut Bencher) -> Result<(), SetupError> {
    // Machine id comes from a private IPv4 address; hosts without one skip
    let generator = Sonyflake::new().map_err(|e| SetupError::new(e.to_string()))?;
    b.reset_timer();
    b.iter(|| generator.next_id());
    Ok(())
}

fn uuid_v1(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| Uuid::now_v1(&NODE_ID));
    Ok(())
}

fn uuid_v3(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| Uuid::new_v3(&Uuid::NAMESPACE_DNS, NAME));
    Ok(())
}

fn uuid_v4(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(Uuid::new_v4);
    Ok(())
}

fn uuid_v4_string(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| Uuid::new_v4().to_string());
    Ok(())
}

fn uuid_v4_encode(b: &mut Bencher) -> Result<(), SetupError> {
    let mut buf = Uuid::encode_buffer();
    b.reset_timer();
    b.iter(|| Uuid::new_v4().hyphenated().encode_lower(&mut buf).len());
    Ok(())
}

fn uuid_v5(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| Uuid::new_v5(&Uuid::NAMESPACE_DNS, NAME));
    Ok(())
}

fn uuid_v6(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| Uuid::now_v6(&NODE_ID));
    Ok(())
}

fn uuid_v7(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(Uuid::now_v7);
    Ok(())
}

fn ulid_new(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(Ulid::new);
    Ok(())
}

fn ulid_monotonic(b: &mut Bencher) -> Result<(), SetupError> {
    let mut generator = ulid::Generator::new();
    b.reset_timer();
    b.iter(|| generator.generate());
    Ok(())
}

fn scru128_generator(b: &mut Bencher) -> Result<(), SetupError> {
    let mut generator = Scru128Generator::new();
    b.reset_timer();
    b.iter(|| generator.generate());
    Ok(())
}

fn nanoid_new(b: &mut Bencher) -> Result<(), SetupError> {
    b.iter(|| nanoid::nanoid!());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use idbench::core::MeasureConfig;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn test_groups_are_contiguous() {
        let mut seen = HashSet::new();
        let mut previous = "";
        for entry in SUITE {
            if entry.group != previous {
                assert!(seen.insert(entry.group), "group {} is split", entry.group);
                previous = entry.group;
            }
        }
    }

    #[test]
    fn test_group_order() {
        let mut groups: Vec<&str> = SUITE.iter().map(|e| e.group).collect();
        groups.dedup();
        assert_eq!(
            groups,
            vec![
                "snowflake",
                "pseudo-snowflake",
                "uuid v1",
                "uuid v3",
                "uuid v4",
                "uuid v5",
                "uuid v6",
                "uuid v7",
                "pseudo-uuid",
            ]
        );
    }

    #[test]
    fn test_entries_build_cases() {
        for entry in SUITE {
            let case = entry.case().unwrap();
            assert_eq!(case.name, entry.name);
            assert!(!case.subgroup.is_empty());
        }
    }

    #[test]
    fn test_register_all() {
        let mut runner = BenchmarkRunner::new(MeasureConfig::new());
        register_all(&mut runner).unwrap();
        assert_eq!(runner.len(), SUITE.len());
    }

    #[test]
    fn test_every_generator_runs() {
        let mut runner =
            BenchmarkRunner::new(MeasureConfig::new().with_min_time(Duration::from_millis(1)));
        register_all(&mut runner).unwrap();
        // sonyflake depends on the host network configuration
        runner.retain(|case| case.name != "sonyflake");
        let expected = runner.len();

        let results = runner.run_all();
        assert_eq!(results.len(), expected);
        assert!(results.iter().all(|r| r.result.iterations > 0));
    }
}
