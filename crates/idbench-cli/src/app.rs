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

//! Run orchestration: open the sink, run the suite, render the report.

use crate::config::{AppConfig, OutputTarget};
use crate::error::CliError;
use crate::suites;
use idbench::harness::{BenchmarkRunner, Progress, ResultCollection};
use idbench::reporters::{Column, Reporter};
use idbench::system::SystemInfo;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

/// Column labels used by the binary's reports.
pub const COLUMN_LABELS: [(Column, &str); 4] = [
    (Column::Group, "id type"),
    (Column::SubGroup, "bits"),
    (Column::Name, "package"),
    (Column::Description, "info"),
];

/// Runs the configured benchmarks and writes the report.
///
/// The progress bar is cleared before rendering starts.
///
/// # Errors
///
/// - [`CliError::OutputOpen`] before any benchmark runs
/// - [`CliError::Render`] after all benchmarks ran
pub fn run(config: &AppConfig) -> Result<(), CliError> {
    let sink = open_output(&config.output)?;

    let mut runner = BenchmarkRunner::new(config.measure_config());
    suites::register_all(&mut runner)?;
    if let Some(filter) = &config.filter {
        runner.retain(|case| case.matches(filter));
        if runner.is_empty() {
            warn!(filter = %filter, "no benchmark matches the filter");
        }
    }

    let mut progress = if config.progress {
        Progress::stderr(runner.len())
    } else {
        Progress::hidden(runner.len())
    };
    let mut results = runner.run_all_with(&mut progress);
    progress.finish();

    if config.report.include_system_info {
        results.set_system_info(SystemInfo::collect());
    }

    info!("generating output...");
    let reporter = build_reporter(config, results);
    let mut out = BufWriter::new(sink);
    reporter.render(&mut out)?;
    Ok(())
}

/// Creates a reporter with the binary's column labels and layout.
pub fn build_reporter(config: &AppConfig, results: ResultCollection) -> Reporter {
    let mut reporter = Reporter::new(config.format);
    for (column, label) in COLUMN_LABELS {
        reporter.set_column_header(column, label);
    }
    reporter.configure(config.report);
    reporter.extend(results);
    reporter
}

fn open_output(target: &OutputTarget) -> Result<Box<dyn Write>, CliError> {
    match target {
        OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| CliError::output_open(path, e))?;
            Ok(Box::new(file))
        }
    }
}
