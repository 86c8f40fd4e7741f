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

//! CSV reporter.
//!
//! One flat table in report order. Result columns carry raw numbers so the
//! output can be loaded into a spreadsheet without unit parsing. Sections
//! only affect ordering; the group column tells them apart.
//!
//! Host information, when requested, precedes the table as `# key: value`
//! lines. Readers must enable comment handling to skip them; fields holding
//! the comment byte are always quoted so no record is mistaken for one.

use crate::core::BenchmarkRecord;
use crate::error::Result;
use crate::reporters::{label_cells, Layout, TIMING_COLUMNS};
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Result column names in CSV output.
pub const RESULT_HEADERS: [&str; 5] = ["ops", "total ns", "ns/op", "B/op", "allocs/op"];

/// Prefix of host information lines.
pub const COMMENT_PREFIX: u8 = b'#';

pub(crate) fn render<W: Write>(layout: &Layout<'_>, out: &mut W) -> Result<()> {
    if let Some(info) = layout.visible_system_info() {
        for (key, value) in info.entries() {
            writeln!(out, "{} {key}: {value}", COMMENT_PREFIX as char)?;
        }
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .comment(Some(COMMENT_PREFIX))
        .from_writer(&mut *out);

    if layout.config.include_header {
        let results = if layout.with_allocations {
            &RESULT_HEADERS[..]
        } else {
            &RESULT_HEADERS[..TIMING_COLUMNS]
        };
        writer.write_record(layout.headers.iter().chain(results))?;
    }

    for record in layout.records() {
        writer.write_record(&row(record, layout.with_allocations))?;
    }

    writer.flush()?;
    Ok(())
}

fn row(record: &BenchmarkRecord, with_allocations: bool) -> Vec<String> {
    let result = &record.result;
    let mut cells: Vec<String> = label_cells(record).iter().map(|c| c.to_string()).collect();
    cells.push(result.iterations.to_string());
    cells.push(result.total.as_nanos().to_string());
    cells.push(result.per_op_nanos().to_string());
    if with_allocations {
        cells.push(result.bytes_per_op().map(|v| v.to_string()).unwrap_or_default());
        cells.push(result.allocs_per_op().map(|v| v.to_string()).unwrap_or_default());
    }
    cells
}

#[cfg(test)]
mod tests {
    use crate::core::{BenchmarkCase, BenchmarkRecord, BenchmarkResult};
    use crate::reporters::test_support::*;
    use crate::reporters::{Column, OutputFormat, ReportConfig, Reporter};
    use crate::system::SystemInfo;
    use std::time::Duration;

    fn render(reporter: &Reporter) -> String {
        let mut out = Vec::new();
        reporter.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn five_records() -> Vec<BenchmarkRecord> {
        (1..=5)
            .map(|i| {
                record(
                    &format!("gen{i}"),
                    if i < 3 { "uuid v4" } else { "pseudo-uuid" },
                    1_000 * i,
                    Duration::from_micros(i),
                )
            })
            .collect()
    }

    #[test]
    fn test_five_records_six_lines() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        for r in five_records() {
            reporter.append(r);
        }

        let out = render(&reporter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert_eq!(lines[0], "group,subgroup,name,description,ops,total ns,ns/op");
        assert_eq!(lines[1], "uuid v4,,gen1,,1000,1000,1");
    }

    #[test]
    fn test_sections_add_no_separators() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(
            ReportConfig::default()
                .with_section_per_group(true)
                .with_section_headers(true),
        );
        for r in five_records() {
            reporter.append(r);
        }
        assert_eq!(render(&reporter).lines().count(), 6);
    }

    #[test]
    fn test_header_can_be_disabled() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(ReportConfig::default().with_header(false));
        reporter.append(xid());

        assert_eq!(
            render(&reporter),
            "pseudo-snowflake,96-bit,rs/xid,,1000000,50000000,50\n"
        );
    }

    #[test]
    fn test_fractional_ns_per_op() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(ReportConfig::default().with_header(false));
        reporter.append(record("frac", "g", 4, Duration::from_nanos(10)));
        assert!(render(&reporter).ends_with(",4,10,2.5\n"));
    }

    #[test]
    fn test_quotes_special_characters() {
        let case = BenchmarkCase::new("a,b")
            .unwrap()
            .with_group("say \"hi\"")
            .with_description("two\nlines");
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(ReportConfig::default().with_header(false));
        reporter.append(BenchmarkRecord::new(
            case,
            BenchmarkResult::new(1, Duration::from_nanos(5)),
        ));

        assert_eq!(
            render(&reporter),
            "\"say \"\"hi\"\"\",,\"a,b\",\"two\nlines\",1,5,5\n"
        );
    }

    #[test]
    fn test_custom_headers() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.set_column_header(Column::Group, "id type");
        reporter.set_column_header(Column::SubGroup, "bits");
        reporter.set_column_header(Column::Name, "package");
        reporter.set_column_header(Column::Description, "info");
        reporter.append(xid());

        assert!(render(&reporter).starts_with("id type,bits,package,info,ops"));
    }

    #[test]
    fn test_system_info_as_comments() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(ReportConfig::default().with_system_info(true));
        let mut info = SystemInfo::new();
        info.insert("os", "Linux");
        reporter.set_system_info(info);
        reporter.append(xid());

        let out = render(&reporter);
        assert!(out.starts_with("# os: Linux\ngroup,"));
    }

    #[test]
    fn test_leading_hash_is_quoted() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.configure(ReportConfig::default().with_header(false));
        reporter.append(record("#hashid", "#tagged", 10, Duration::from_nanos(100)));

        assert_eq!(render(&reporter), "\"#tagged\",,\"#hashid\",,10,100,10\n");
    }

    #[test]
    fn test_allocation_columns() {
        let mut reporter = Reporter::new(OutputFormat::Csv);
        reporter.append(with_allocs(xid(), 24_000_000, 1_000_000));
        reporter.append(uuid());

        let out = render(&reporter);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with(",B/op,allocs/op"));
        assert!(lines[1].ends_with(",50,24,1"));
        assert!(lines[2].ends_with(",160,,"));
    }
}
