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

//! Structured error types for the idbench CLI.
//!
//! Every variant maps to one exit status through [`CliError::exit_code`].
//! Rendering failures keep the process successful: the benchmarks did run,
//! only the report could not be delivered.

use idbench::error::{CaseError, ReportError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for idbench CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The output destination could not be created.
    ///
    /// Raised before any benchmark runs.
    #[error("cannot open output '{path}': {message}")]
    OutputOpen {
        /// The requested output path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The report could not be written.
    #[error("error generating output: {0}")]
    Render(#[from] ReportError),

    /// A registered case was described incorrectly.
    #[error("invalid benchmark registration: {0}")]
    Case(#[from] CaseError),

    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl CliError {
    /// Create an output-open error from an I/O error.
    pub fn output_open(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::OutputOpen {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Create a logging error from any message.
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Render(_) => 0,
            CliError::OutputOpen { .. } | CliError::Case(_) | CliError::Logging(_) => 1,
        }
    }
}
