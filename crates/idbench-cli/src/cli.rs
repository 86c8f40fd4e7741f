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

//! Command-line argument definitions.
//!
//! Long flags may be written Go-style with a single dash (`-format=csv`,
//! `-sysinfo`); [`normalize_args`] rewrites them before clap sees them.
//! Boolean flags take an optional `=true`/`=false`.

use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;

/// Long flag names accepted with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "output",
    "format",
    "namesections",
    "sections",
    "sectionheader",
    "sysinfo",
    "help",
    "benchtime",
    "filter",
    "noprogress",
];

/// Benchmark identifier generators and report the results.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "idbench", version, disable_help_flag = true)]
pub struct Args {
    /// Output destination: "stdout" or a file path
    #[arg(short = 'o', long, default_value = "stdout", value_name = "DEST")]
    pub output: String,

    /// Output format: txt, csv or md
    #[arg(short = 'f', long, default_value = "txt", value_name = "FORMAT")]
    pub format: String,

    /// Use the group as section name (requires each group to be contiguous)
    #[arg(
        short = 'n',
        long = "namesections",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub name_sections: bool,

    /// Separate groups of results into sections
    #[arg(
        short = 's',
        long = "sections",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub sections: bool,

    /// Add a header row to every section
    #[arg(
        short = 'r',
        long = "sectionheader",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub section_header: bool,

    /// Add the system information to the output
    #[arg(
        short = 'i',
        long = "sysinfo",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub sysinfo: bool,

    /// Print usage and exit
    #[arg(
        short = 'h',
        long = "help",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub help: bool,

    /// Minimum measured time per benchmark, in milliseconds
    #[arg(short = 't', long, default_value_t = 1000, value_name = "MS")]
    pub benchtime: u64,

    /// Only run benchmarks whose name or group contains TEXT
    #[arg(short = 'F', long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Do not draw the progress bar while benchmarking
    #[arg(
        short = 'q',
        long = "noprogress",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub no_progress: bool,

    /// Extra arguments; "help" prints usage
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Returns whether usage was requested by flag or bare `help` argument.
    pub fn wants_help(&self) -> bool {
        self.help || self.rest.iter().any(|a| a == "help")
    }
}

/// Parses arguments after Go-style normalisation.
///
/// # Errors
///
/// Returns the clap error for unknown flags or malformed values.
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(normalize_args(args))
}

/// Rewrites `-name` and `-name=value` to `--name` forms for known long flags.
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if past_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                past_separator = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Full usage text.
pub fn usage() -> String {
    Args::command().render_long_help().to_string()
}
