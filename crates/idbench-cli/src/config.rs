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

//! Immutable run configuration derived from the command line.

use crate::cli::Args;
use idbench::core::MeasureConfig;
use idbench::reporters::{OutputFormat, ReportConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Output name that selects standard output.
pub const STDOUT: &str = "stdout";

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    fn from_arg(arg: &str) -> Self {
        if arg == STDOUT {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

/// Everything one run needs, fixed before any benchmark starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Report destination.
    pub output: OutputTarget,
    /// Report encoding.
    pub format: OutputFormat,
    /// Report layout.
    pub report: ReportConfig,
    /// Minimum measured time per case.
    pub min_time: Duration,
    /// Case filter on name or group.
    pub filter: Option<String>,
    /// Draw a progress bar while running.
    pub progress: bool,
}

impl AppConfig {
    /// Builds the configuration from parsed arguments.
    ///
    /// An unknown format falls back to plain text with a warning.
    pub fn from_args(args: &Args) -> Self {
        let format = args.format.parse().unwrap_or_else(|err| {
            warn!("{err}; using {}", OutputFormat::Text);
            OutputFormat::Text
        });

        let report = ReportConfig::default()
            .with_section_per_group(args.sections)
            .with_section_headers(args.section_header)
            .with_name_sections(args.name_sections)
            .with_system_info(args.sysinfo);

        Self {
            output: OutputTarget::from_arg(&args.output),
            format,
            report,
            min_time: Duration::from_millis(args.benchtime),
            filter: args.filter.clone().filter(|f| !f.is_empty()),
            progress: !args.no_progress,
        }
    }

    /// Measurement settings for the runner.
    pub fn measure_config(&self) -> MeasureConfig {
        MeasureConfig::new().with_min_time(self.min_time)
    }
}
