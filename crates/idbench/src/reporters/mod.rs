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

//! Benchmark reporters for the supported output formats.
//!
//! A [`Reporter`] accumulates records, then renders them once or many times
//! into any [`Write`] sink. All formats share the same record order, column
//! set and sectioning rules; they differ only in how cells are written.
//!
//! # Modules
//!
//! - `format`: Human-readable durations
//! - `text`: Aligned plain-text table
//! - `csv`: Comma-separated values
//! - `markdown`: GitHub-flavoured Markdown tables
//!
//! # Example
//!
//! ```
//! use idbench::core::{BenchmarkCase, BenchmarkRecord, BenchmarkResult};
//! use idbench::reporters::{OutputFormat, Reporter};
//! use std::time::Duration;
//!
//! let mut reporter = Reporter::new(OutputFormat::Csv);
//! reporter.append(BenchmarkRecord::new(
//!     BenchmarkCase::new("xid").unwrap().with_group("pseudo-snowflake"),
//!     BenchmarkResult::new(1_000_000, Duration::from_millis(50)),
//! ));
//!
//! let mut out = Vec::new();
//! reporter.render(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("pseudo-snowflake,,xid,,1000000"));
//! ```

pub mod csv;
pub mod format;
pub mod markdown;
pub mod text;

pub use format::{format_duration, format_nanos};

use crate::core::BenchmarkRecord;
use crate::error::{ReportError, Result, UnknownFormatError};
use crate::harness::ResultCollection;
use crate::system::SystemInfo;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Supported report encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// Comma-separated values
    Csv,
    /// GitHub-flavoured Markdown
    Markdown,
}

impl OutputFormat {
    /// Short name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

/// The four descriptive columns whose header labels can be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// [`BenchmarkCase::group`](crate::core::BenchmarkCase::group)
    Group,
    /// [`BenchmarkCase::subgroup`](crate::core::BenchmarkCase::subgroup)
    SubGroup,
    /// [`BenchmarkCase::name`](crate::core::BenchmarkCase::name)
    Name,
    /// [`BenchmarkCase::description`](crate::core::BenchmarkCase::description)
    Description,
}

impl Column {
    /// Label used until [`Reporter::set_column_header`] changes it.
    pub fn default_label(self) -> &'static str {
        match self {
            Column::Group => "group",
            Column::SubGroup => "subgroup",
            Column::Name => "name",
            Column::Description => "description",
        }
    }
}

/// Header labels of the descriptive columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeaders {
    group: String,
    subgroup: String,
    name: String,
    description: String,
}

impl ColumnHeaders {
    /// Current label of `column`.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Group => &self.group,
            Column::SubGroup => &self.subgroup,
            Column::Name => &self.name,
            Column::Description => &self.description,
        }
    }

    /// Replaces the label of `column`.
    pub fn set(&mut self, column: Column, label: impl Into<String>) {
        let slot = match column {
            Column::Group => &mut self.group,
            Column::SubGroup => &mut self.subgroup,
            Column::Name => &mut self.name,
            Column::Description => &mut self.description,
        };
        *slot = label.into();
    }

    fn labels(&self) -> [&str; 4] {
        [
            self.group.as_str(),
            self.subgroup.as_str(),
            self.name.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Default for ColumnHeaders {
    fn default() -> Self {
        Self {
            group: Column::Group.default_label().to_string(),
            subgroup: Column::SubGroup.default_label().to_string(),
            name: Column::Name.default_label().to_string(),
            description: Column::Description.default_label().to_string(),
        }
    }
}

/// Rendering configuration.
///
/// # Example
///
/// ```
/// use idbench::reporters::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_section_per_group(true)
///     .with_name_sections(true);
/// assert!(config.section_per_group);
/// assert!(config.include_header);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Split records into one section per run of equal groups.
    pub section_per_group: bool,
    /// Repeat the header row inside every section (text only).
    pub section_headers: bool,
    /// Title sections by their group instead of "Section <n>".
    pub name_sections: bool,
    /// Emit the host description before the results.
    pub include_system_info: bool,
    /// Emit the CSV header row.
    pub include_header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            section_per_group: false,
            section_headers: false,
            name_sections: false,
            include_system_info: false,
            include_header: true,
        }
    }
}

impl ReportConfig {
    /// Set per-group sectioning
    pub fn with_section_per_group(mut self, enabled: bool) -> Self {
        self.section_per_group = enabled;
        self
    }

    /// Set per-section header rows
    pub fn with_section_headers(mut self, enabled: bool) -> Self {
        self.section_headers = enabled;
        self
    }

    /// Set group-titled sections
    pub fn with_name_sections(mut self, enabled: bool) -> Self {
        self.name_sections = enabled;
        self
    }

    /// Set the system information block
    pub fn with_system_info(mut self, enabled: bool) -> Self {
        self.include_system_info = enabled;
        self
    }

    /// Set the CSV header row
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.include_header = enabled;
        self
    }
}

/// Result columns written with human-readable values.
pub(crate) const DISPLAY_RESULT_HEADERS: [&str; 5] =
    ["ops", "total", "per op", "B/op", "allocs/op"];

/// Number of result columns without allocation data.
pub(crate) const TIMING_COLUMNS: usize = 3;

/// Number of descriptive columns.
pub(crate) const LABEL_COLUMNS: usize = 4;

/// A run of records printed under one title.
#[derive(Debug)]
pub(crate) struct Section<'a> {
    /// `None` when the report is not sectioned.
    pub title: Option<String>,
    pub records: Vec<&'a BenchmarkRecord>,
}

/// Everything a format needs to write a report, validated up front.
#[derive(Debug)]
pub(crate) struct Layout<'a> {
    pub headers: [&'a str; LABEL_COLUMNS],
    pub sections: Vec<Section<'a>>,
    pub system_info: Option<&'a SystemInfo>,
    pub with_allocations: bool,
    pub config: &'a ReportConfig,
}

impl<'a> Layout<'a> {
    /// Records of every section in report order.
    pub fn records(&self) -> impl Iterator<Item = &'a BenchmarkRecord> + '_ {
        self.sections.iter().flat_map(|s| s.records.iter().copied())
    }

    /// Number of result columns.
    pub fn result_columns(&self) -> usize {
        if self.with_allocations {
            DISPLAY_RESULT_HEADERS.len()
        } else {
            TIMING_COLUMNS
        }
    }

    /// Full header row using human-readable result labels.
    pub fn display_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .copied()
            .chain(DISPLAY_RESULT_HEADERS[..self.result_columns()].iter().copied())
            .map(str::to_string)
            .collect()
    }

    /// Full row of one record using human-readable values.
    pub fn display_cells(&self, record: &BenchmarkRecord) -> Vec<String> {
        let result = &record.result;
        let mut cells: Vec<String> = label_cells(record).iter().map(|c| c.to_string()).collect();
        cells.push(result.iterations.to_string());
        cells.push(format_duration(result.total));
        cells.push(format_nanos(result.per_op_nanos()));
        if self.with_allocations {
            cells.push(optional_count(result.bytes_per_op()));
            cells.push(optional_count(result.allocs_per_op()));
        }
        cells
    }

    /// Host description, if requested and available.
    pub fn visible_system_info(&self) -> Option<&'a SystemInfo> {
        if self.config.include_system_info {
            self.system_info.filter(|info| !info.is_empty())
        } else {
            None
        }
    }
}

/// Descriptive cells of a record, in column order.
pub(crate) fn label_cells(record: &BenchmarkRecord) -> [&str; LABEL_COLUMNS] {
    let case = &record.case;
    [
        case.group.as_str(),
        case.subgroup.as_str(),
        case.name.as_str(),
        case.description.as_str(),
    ]
}

fn optional_count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Splits records into sections and checks that titles stay unique.
fn build_sections<'a>(
    records: &[&'a BenchmarkRecord],
    config: &ReportConfig,
) -> Result<Vec<Section<'a>>> {
    if !config.section_per_group {
        return Ok(vec![Section {
            title: None,
            records: records.to_vec(),
        }]);
    }

    let mut runs: Vec<Vec<&'a BenchmarkRecord>> = Vec::new();
    for &record in records {
        match runs.last_mut() {
            Some(run) if run[0].group() == record.group() => run.push(record),
            _ => runs.push(vec![record]),
        }
    }

    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(runs.len());
    for (index, run) in runs.into_iter().enumerate() {
        let first: &'a BenchmarkRecord = run[0];
        let title = if config.name_sections {
            let group = first.group();
            if !seen.insert(group) {
                return Err(ReportError::duplicate_section(group));
            }
            group.to_string()
        } else {
            format!("Section {}", index + 1)
        };
        sections.push(Section {
            title: Some(title),
            records: run,
        });
    }
    Ok(sections)
}

/// Collects records and renders them in one output format.
#[derive(Debug, Clone)]
pub struct Reporter {
    format: OutputFormat,
    headers: ColumnHeaders,
    config: ReportConfig,
    records: Vec<BenchmarkRecord>,
    system_info: Option<SystemInfo>,
}

impl Reporter {
    /// Creates an empty reporter with default labels and configuration.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            headers: ColumnHeaders::default(),
            config: ReportConfig::default(),
            records: Vec::new(),
            system_info: None,
        }
    }

    /// The output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renames a descriptive column.
    pub fn set_column_header(&mut self, column: Column, label: impl Into<String>) {
        self.headers.set(column, label);
    }

    /// Current column labels.
    pub fn headers(&self) -> &ColumnHeaders {
        &self.headers
    }

    /// Replaces the rendering configuration.
    pub fn configure(&mut self, config: ReportConfig) {
        self.config = config;
    }

    /// Current rendering configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Appends one record.
    pub fn append(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Appends all records of `collection` and adopts its host description.
    pub fn extend(&mut self, collection: ResultCollection) {
        let (records, system_info) = collection.into_parts();
        self.records.extend(records);
        if system_info.is_some() {
            self.system_info = system_info;
        }
    }

    /// Attaches the host description.
    pub fn set_system_info(&mut self, info: SystemInfo) {
        self.system_info = Some(info);
    }

    /// Records appended so far.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Writes the report to `sink`.
    ///
    /// Records without iterations are left out. The layout is validated
    /// before anything is written, so a configuration error leaves the sink
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`ReportError::DuplicateSection`] when named sections would repeat
    ///   a title
    /// - [`ReportError::Io`] or [`ReportError::Csv`] when writing fails
    pub fn render<W: Write>(&self, sink: &mut W) -> Result<()> {
        let measured: Vec<&BenchmarkRecord> = self
            .records
            .iter()
            .filter(|r| r.result.iterations > 0)
            .collect();

        let layout = Layout {
            headers: self.headers.labels(),
            sections: build_sections(&measured, &self.config)?,
            system_info: self.system_info.as_ref(),
            with_allocations: measured.iter().any(|r| r.result.allocations.is_some()),
            config: &self.config,
        };

        match self.format {
            OutputFormat::Text => text::render(&layout, sink),
            OutputFormat::Csv => csv::render(&layout, sink),
            OutputFormat::Markdown => markdown::render(&layout, sink),
        }?;
        sink.flush()?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use std::time::Duration;

    fn render_to_string(reporter: &Reporter) -> String {
        let mut out = Vec::new();
        reporter.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert!("html".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Markdown.to_string(), "md");
    }

    #[test]
    fn test_column_headers() {
        let mut headers = ColumnHeaders::default();
        assert_eq!(headers.get(Column::SubGroup), "subgroup");
        headers.set(Column::Name, "package");
        assert_eq!(headers.labels(), ["group", "subgroup", "package", "description"]);
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert!(!config.section_per_group);
        assert!(!config.section_headers);
        assert!(!config.name_sections);
        assert!(!config.include_system_info);
        assert!(config.include_header);
    }

    #[test]
    fn test_sections_follow_runs() {
        let records = [
            record("a", "x", 1, Duration::from_nanos(1)),
            record("b", "x", 1, Duration::from_nanos(1)),
            record("c", "y", 1, Duration::from_nanos(1)),
            record("d", "x", 1, Duration::from_nanos(1)),
        ];
        let refs: Vec<&BenchmarkRecord> = records.iter().collect();
        let config = ReportConfig::default().with_section_per_group(true);

        let sections = build_sections(&refs, &config).unwrap();
        let titles: Vec<_> = sections.iter().map(|s| s.title.clone().unwrap()).collect();
        let sizes: Vec<_> = sections.iter().map(|s| s.records.len()).collect();
        assert_eq!(titles, vec!["Section 1", "Section 2", "Section 3"]);
        assert_eq!(sizes, vec![2, 1, 1]);
    }

    #[test]
    fn test_named_sections_reject_repeated_group() {
        let records = [
            record("a", "x", 1, Duration::from_nanos(1)),
            record("b", "y", 1, Duration::from_nanos(1)),
            record("c", "x", 1, Duration::from_nanos(1)),
        ];
        let refs: Vec<&BenchmarkRecord> = records.iter().collect();
        let config = ReportConfig::default()
            .with_section_per_group(true)
            .with_name_sections(true);

        let err = build_sections(&refs, &config).unwrap_err();
        assert!(matches!(err, ReportError::DuplicateSection { ref group } if group == "x"));
    }

    #[test]
    fn test_duplicate_section_writes_nothing() {
        for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Markdown] {
            let mut reporter = Reporter::new(format);
            reporter.configure(
                ReportConfig::default()
                    .with_section_per_group(true)
                    .with_name_sections(true),
            );
            reporter.append(xid());
            reporter.append(uuid());
            reporter.append(xid());

            let mut out = Vec::new();
            assert!(reporter.render(&mut out).is_err());
            assert!(out.is_empty(), "{format} wrote before failing");
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Markdown] {
            let mut reporter = Reporter::new(format);
            reporter.configure(ReportConfig::default().with_section_per_group(true));
            reporter.append(xid());
            reporter.append(uuid());
            assert_eq!(render_to_string(&reporter), render_to_string(&reporter));
        }
    }

    #[test]
    fn test_zero_iteration_records_are_omitted() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.append(xid());
        reporter.append(record("never-ran", "g", 0, Duration::ZERO));

        let out = render_to_string(&reporter);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("never-ran"));
    }

    #[test]
    fn test_extend_adopts_system_info() {
        let mut collection = ResultCollection::new();
        collection.push(xid());
        let mut info = SystemInfo::new();
        info.insert("cores", "8");
        collection.set_system_info(info);

        let mut reporter = Reporter::new(OutputFormat::Text);
        reporter.append(uuid());
        reporter.extend(collection);

        let names: Vec<&str> = reporter.records().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["google/uuid", "rs/xid"]);
        reporter.configure(ReportConfig::default().with_system_info(true));
        assert!(render_to_string(&reporter).starts_with("cores: 8\n\n"));
    }

    #[test]
    fn test_display_cells_with_allocations() {
        let records = [with_allocs(xid(), 24_000_000, 1_000_000), uuid()];
        let config = ReportConfig::default();
        let headers = ColumnHeaders::default();
        let layout = Layout {
            headers: headers.labels(),
            sections: Vec::new(),
            system_info: None,
            with_allocations: true,
            config: &config,
        };
        assert_eq!(layout.display_headers().len(), 9);
        assert_eq!(layout.display_cells(&records[0])[7..], ["24", "1"]);
        assert_eq!(layout.display_cells(&records[1])[7..], ["-", "-"]);
    }
}
