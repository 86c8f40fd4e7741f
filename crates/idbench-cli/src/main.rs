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

//! idbench command line interface

use idbench::core::CountingAllocator;
use idbench_cli::cli::{self, Args};
use idbench_cli::config::AppConfig;
use idbench_cli::{app, CliError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator::system();

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "idbench=info,idbench_cli=info";

fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

fn main() -> ExitCode {
    let args: Args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if args.wants_help() {
        eprintln!("{}", cli::usage());
        return ExitCode::from(1);
    }

    if let Err(e) = init_logging() {
        eprintln!("Error: {e}");
        return ExitCode::from(e.exit_code());
    }

    let config = AppConfig::from_args(&args);
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
