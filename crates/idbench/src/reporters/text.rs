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

//! Plain-text reporter.
//!
//! Writes an aligned table: descriptive columns padded on the right, result
//! columns padded on the left, two spaces between columns.

use crate::error::Result;
use crate::reporters::{Layout, LABEL_COLUMNS};
use std::io::Write;

const COLUMN_GAP: &str = "  ";

pub(crate) fn render<W: Write>(layout: &Layout<'_>, out: &mut W) -> Result<()> {
    if let Some(info) = layout.visible_system_info() {
        for (key, value) in info.entries() {
            writeln!(out, "{key}: {value}")?;
        }
        writeln!(out)?;
    }

    let header = layout.display_headers();
    let sections: Vec<Vec<Vec<String>>> = layout
        .sections
        .iter()
        .map(|s| s.records.iter().map(|r| layout.display_cells(r)).collect())
        .collect();

    let widths = column_widths(&header, sections.iter().flatten());
    write_row(out, &header, &widths)?;

    for (section, rows) in layout.sections.iter().zip(&sections) {
        let mut section_widths = &widths;
        let own_widths;

        if let Some(title) = &section.title {
            writeln!(out)?;
            writeln!(out, "{title}")?;
            if layout.config.section_headers {
                own_widths = column_widths(&header, rows.iter());
                section_widths = &own_widths;
                write_row(out, &header, section_widths)?;
            }
        }

        for row in rows {
            write_row(out, row, section_widths)?;
        }
    }

    Ok(())
}

fn column_widths<'r, I>(header: &[String], rows: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'r Vec<String>>,
{
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        if i < LABEL_COLUMNS {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("{cell:>width$}"));
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}
