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

//! Error types for benchmark execution and reporting.
//!
//! Three failure families exist and each has its own policy:
//!
//! - [`SetupError`]: a generator could not be constructed. The runner skips
//!   the case and keeps going; it never reaches the report.
//! - [`CaseError`]: a benchmark case was described incorrectly.
//! - [`ReportError`]: the sink rejected a write, or the report configuration
//!   cannot be honoured for the collected records.

use std::io;
use thiserror::Error;

/// Result type for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// A generator failed to construct, so its case produces no data point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("benchmark setup failed: {message}")]
pub struct SetupError {
    /// What went wrong during setup
    pub message: String,
}

impl SetupError {
    /// Create a setup error from any message.
    ///
    /// # Examples
    ///
    /// ```
    /// use idbench::error::SetupError;
    ///
    /// let err = SetupError::new("no private ip address available");
    /// assert!(err.to_string().contains("private ip"));
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Invalid benchmark case description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Every case needs a display name.
    #[error("benchmark case name must not be empty")]
    EmptyName,
}

/// Errors raised while rendering a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The sink could not accept the write.
    #[error("I/O error writing report: {0}")]
    Io(#[from] io::Error),

    /// The CSV encoder failed.
    #[error("CSV error writing report: {0}")]
    Csv(#[from] csv::Error),

    /// Named sections were requested but a group label would title two
    /// separate sections.
    #[error("cannot name sections by group: group '{group}' appears in more than one section")]
    DuplicateSection {
        /// The colliding group label
        group: String,
    },
}

/// An output format name that no reporter understands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output format '{0}' (expected txt, csv or md)")]
pub struct UnknownFormatError(pub String);

impl ReportError {
    /// Create a duplicate-section error.
    pub fn duplicate_section(group: impl Into<String>) -> Self {
        Self::DuplicateSection {
            group: group.into(),
        }
    }

    /// Returns whether this error came from the output sink rather than
    /// from the report configuration.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, ReportError::Io(_) | ReportError::Csv(_))
    }
}
