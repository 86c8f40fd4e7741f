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

//! Markdown reporter producing GitHub-flavoured tables.

use crate::core::BenchmarkRecord;
use crate::error::Result;
use crate::reporters::{Layout, LABEL_COLUMNS};
use std::io::Write;

pub(crate) fn render<W: Write>(layout: &Layout<'_>, out: &mut W) -> Result<()> {
    if let Some(info) = layout.visible_system_info() {
        for (key, value) in info.entries() {
            writeln!(out, "- **{}:** {}", escape(key), escape(value))?;
        }
        writeln!(out)?;
    }

    for (i, section) in layout.sections.iter().enumerate() {
        if let Some(title) = &section.title {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "## {}", escape(title))?;
            writeln!(out)?;
        }
        write_table(layout, &section.records, out)?;
    }

    Ok(())
}

fn write_table<W: Write>(
    layout: &Layout<'_>,
    records: &[&BenchmarkRecord],
    out: &mut W,
) -> Result<()> {
    let header = layout.display_headers();
    write_row(out, &header)?;

    let delimiter: Vec<String> = (0..header.len())
        .map(|i| if i < LABEL_COLUMNS { "---" } else { "---:" }.to_string())
        .collect();
    write_row(out, &delimiter)?;

    for record in records {
        let cells: Vec<String> = layout
            .display_cells(record)
            .iter()
            .map(|c| escape(c))
            .collect();
        write_row(out, &cells)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String]) -> Result<()> {
    writeln!(out, "| {} |", cells.join(" | "))?;
    Ok(())
}

/// Escapes pipes and folds line breaks so a value stays inside its cell.
fn escape(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::escape;
    use crate::core::{BenchmarkCase, BenchmarkRecord, BenchmarkResult};
    use crate::reporters::test_support::*;
    use crate::reporters::{OutputFormat, ReportConfig, Reporter};
    use crate::system::SystemInfo;
    use std::time::Duration;

    fn render(reporter: &Reporter) -> String {
        let mut out = Vec::new();
        reporter.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unsectioned_table() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        for _ in 0..4 {
            reporter.append(xid());
        }

        let out = render(&reporter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "| group | subgroup | name | description | ops | total | per op |"
        );
        assert_eq!(lines[1], "| --- | --- | --- | --- | ---: | ---: | ---: |");
        assert_eq!(
            lines[2],
            "| pseudo-snowflake | 96-bit | rs/xid |  | 1000000 | 50ms | 50ns |"
        );
    }

    #[test]
    fn test_named_sections() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        reporter.configure(
            ReportConfig::default()
                .with_section_per_group(true)
                .with_name_sections(true),
        );
        reporter.append(xid());
        reporter.append(uuid());

        let out = render(&reporter);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "## pseudo-snowflake");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("| group"));
        assert!(lines[4].contains("rs/xid"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "## uuid v4");
        assert!(lines[10].ends_with("| 160ns |"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_numbered_sections() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        reporter.configure(ReportConfig::default().with_section_per_group(true));
        reporter.append(xid());
        reporter.append(uuid());

        let out = render(&reporter);
        assert!(out.starts_with("## Section 1\n"));
        assert!(out.contains("\n## Section 2\n"));
    }

    #[test]
    fn test_pipe_is_escaped() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        reporter.append(BenchmarkRecord::new(
            BenchmarkCase::new("a|b").unwrap().with_description("x\ny"),
            BenchmarkResult::new(1, Duration::from_nanos(3)),
        ));

        let out = render(&reporter);
        assert!(out.contains("| a\\|b | x y |"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_sub_nanosecond_per_op() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        reporter.append(record("counter", "g", 1_000_000, Duration::from_micros(700)));

        let out = render(&reporter);
        assert!(out.lines().nth(2).unwrap().ends_with("| 700µs | 0.7ns |"));
    }

    #[test]
    fn test_system_info_list() {
        let mut reporter = Reporter::new(OutputFormat::Markdown);
        reporter.configure(ReportConfig::default().with_system_info(true));
        let mut info = SystemInfo::new();
        info.insert("cpu", "Test CPU");
        reporter.set_system_info(info);
        reporter.append(xid());

        assert!(render(&reporter).starts_with("- **cpu:** Test CPU\n\n| group"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a|b|c"), "a\\|b\\|c");
        assert_eq!(escape("x\r\ny"), "x y");
    }
}
