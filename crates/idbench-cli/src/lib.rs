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

//! idbench CLI library.
//!
//! Everything the `idbench` binary does, split so it can be tested without
//! spawning a process.
//!
//! # Flags
//!
//! | Flag | Default | Effect |
//! |---|---|---|
//! | `-o`, `-output` | `stdout` | report destination |
//! | `-f`, `-format` | `txt` | `txt`, `csv` or `md` |
//! | `-s`, `-sections` | off | one section per group |
//! | `-n`, `-namesections` | off | title sections by group |
//! | `-r`, `-sectionheader` | off | header row per section |
//! | `-i`, `-sysinfo` | off | include host information |
//! | `-t`, `-benchtime` | `1000` | minimum milliseconds per benchmark |
//! | `-F`, `-filter` | none | only matching names or groups |
//! | `-q`, `-noprogress` | off | no progress bar |
//! | `-h`, `-help`, `help` | | print usage, exit 1 |
//!
//! # Examples
//!
//! ```no_run
//! use idbench_cli::{app, cli, config::AppConfig};
//!
//! let args = cli::parse_args(["idbench", "-format=md", "-sections"]).unwrap();
//! let config = AppConfig::from_args(&args);
//! app::run(&config).unwrap();
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod suites;

pub use error::CliError;
