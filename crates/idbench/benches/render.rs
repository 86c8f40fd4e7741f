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

//! Reporter throughput.
//!
//! Renders reports of increasing size in each format into a reused buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use idbench::core::{BenchmarkCase, BenchmarkRecord, BenchmarkResult};
use idbench::reporters::{OutputFormat, ReportConfig, Reporter};
use std::time::Duration;

const GROUPS: [&str; 4] = ["snowflake", "uuid v4", "uuid v7", "pseudo-uuid"];

fn build_reporter(format: OutputFormat, records: usize) -> Reporter {
    let mut reporter = Reporter::new(format);
    reporter.configure(ReportConfig::default().with_section_per_group(true));
    for i in 0..records {
        // Consecutive records share a group so sections hold several rows
        let group = GROUPS[(i * GROUPS.len()) / records.max(1)];
        let case = BenchmarkCase::new(format!("generator-{i}"))
            .unwrap()
            .with_group(group)
            .with_subgroup("128-bit")
            .with_description("thread-safe, \"quoted\"");
        let result = BenchmarkResult::new(1_000 + i as u64, Duration::from_micros(50 + i as u64));
        reporter.append(BenchmarkRecord::new(case, result));
    }
    reporter
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Markdown] {
        for records in [10usize, 100, 1_000] {
            let reporter = build_reporter(format, records);
            let mut buf = Vec::with_capacity(records * 128);

            group.throughput(Throughput::Elements(records as u64));
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), records),
                &reporter,
                |b, reporter| {
                    b.iter(|| {
                        buf.clear();
                        reporter.render(&mut buf).unwrap();
                        black_box(buf.len())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
