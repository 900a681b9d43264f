//! Excel workbook export.
//!
//! Two sheets: "Drug Information" (field/value metadata rows, one
//! bibliography line per row) and "PK-PD Table" (the structured table with
//! its header row as column titles). Column widths track the longest cell,
//! capped at a maximum width.

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use pkpd_core::AnalysisReport;

use crate::error::ExportResult;
use crate::validate_report;

/// Metadata sheet name.
pub const INFO_SHEET: &str = "Drug Information";
/// Table sheet name.
pub const TABLE_SHEET: &str = "PK-PD Table";

const MAX_COLUMN_WIDTH: f64 = 50.0;
const COLUMN_PADDING: f64 = 5.0;

/// Serialize a report into an `.xlsx` byte buffer.
pub fn write_workbook(report: &AnalysisReport) -> ExportResult<Vec<u8>> {
    validate_report(report)?;

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let info = workbook.add_worksheet();
    info.set_name(INFO_SHEET)?;
    write_info_sheet(info, report, &bold)?;

    let table = workbook.add_worksheet();
    table.set_name(TABLE_SHEET)?;
    write_table_sheet(table, report, &bold)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_info_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    bold: &Format,
) -> ExportResult<()> {
    sheet.write_string_with_format(0, 0, "Field", bold)?;
    sheet.write_string_with_format(0, 1, "Value", bold)?;

    let rows = info_rows(report);
    for (i, (field, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, field)?;
        sheet.write_string(row, 1, value)?;
    }

    let field_width = rows
        .iter()
        .map(|(field, _)| field.chars().count())
        .chain(["Field".len()])
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(["Value".len()])
        .max()
        .unwrap_or(0);
    sheet.set_column_width(0, fit_width(field_width))?;
    sheet.set_column_width(1, fit_width(value_width))?;

    Ok(())
}

/// Field/value rows for the metadata sheet, in display order.
fn info_rows(report: &AnalysisReport) -> Vec<(String, String)> {
    let mut rows = vec![
        ("Drug Information".to_string(), String::new()),
        ("Drug Name".to_string(), report.drug_name.clone()),
        ("Description".to_string(), report.explanation.clone()),
        (String::new(), String::new()),
        ("Best Release Recommendation".to_string(), String::new()),
        ("Recommendation".to_string(), report.recommendation.clone()),
        (String::new(), String::new()),
        ("References".to_string(), String::new()),
    ];
    // Skip the block's own "References:" heading; the marker row above
    // already announces the section.
    for line in report.references.lines().skip(1) {
        let line = line.trim();
        if !line.is_empty() {
            rows.push((String::new(), line.to_string()));
        }
    }
    rows
}

fn write_table_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    bold: &Format,
) -> ExportResult<()> {
    let grid = &report.table_data.structured_data;

    for (col, title) in grid[0].iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, title, bold)?;
    }
    for (i, row) in grid[1..].iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet.write_string((i + 1) as u32, col as u16, value)?;
        }
    }

    for col in 0..grid[0].len() {
        let longest = grid
            .iter()
            .filter_map(|row| row.get(col))
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);
        sheet.set_column_width(col as u16, fit_width(longest))?;
    }

    Ok(())
}

fn fit_width(longest_cell: usize) -> f64 {
    (longest_cell as f64 + COLUMN_PADDING).min(MAX_COLUMN_WIDTH)
}
