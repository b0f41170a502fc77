/*!
 * Workbook reading and output writing.
 *
 * Thin I/O glue around the sheet model: reads one sheet of an Excel/ODS
 * workbook into a `Sheet` (first row as headers), and writes a translated
 * sheet out as CSV next to the other run artifacts.
 */

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use log::debug;

use crate::errors::SheetError;
use crate::sheet::{CellValue, Column, Sheet};

/// List the sheet names of a workbook, in file order
pub fn sheet_names(path: &Path) -> Result<Vec<String>, SheetError> {
    let workbook = open_workbook_auto(path)
        .map_err(|e| SheetError::Workbook(format!("{}: {}", path.display(), e)))?;
    Ok(workbook.sheet_names().to_vec())
}

/// Read one sheet of a workbook into the in-memory model
pub fn read_sheet(path: &Path, sheet_name: &str) -> Result<Sheet, SheetError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SheetError::Workbook(format!("{}: {}", path.display(), e)))?;

    if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
        return Err(SheetError::SheetNotFound(sheet_name.to_string()));
    }

    let range = workbook.worksheet_range(sheet_name)
        .map_err(|e| SheetError::Workbook(format!("sheet '{}': {}", sheet_name, e)))?;

    Ok(sheet_from_range(sheet_name, &range))
}

/// Build a `Sheet` from a cell range, treating the first row as headers
///
/// Blank header cells get a positional fallback name so every column stays
/// addressable.
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter()
            .enumerate()
            .map(|(i, cell)| {
                let text = cell.to_string();
                if text.trim().is_empty() {
                    format!("Column {}", i + 1)
                } else {
                    text
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let mut cells_per_column: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(headers.len()) {
            cells_per_column[i].push(convert_cell(cell));
        }
    }

    let columns = headers.into_iter()
        .zip(cells_per_column)
        .map(|(header, cells)| Column::new(header, cells))
        .collect();

    debug!("Loaded sheet '{}'", name);
    Sheet::new(name, columns)
}

/// Convert a calamine cell into the sheet model
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(format_excel_datetime(dt.as_f64())),
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
    }
}

/// Format an Excel serial datetime (days since 1899-12-30) as ISO 8601
pub fn format_excel_datetime(serial: f64) -> String {
    let days = serial.floor() as i64;
    let day_fraction = serial.fract();

    let epoch = chrono::NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or_default();
    let mut date = epoch + chrono::Duration::days(days);

    // A fraction close enough to 1.0 rounds to a full day; carry it over
    // instead of printing a 24th hour.
    let mut total_seconds = (day_fraction * 86_400.0).round() as u32;
    if total_seconds >= 86_400 {
        date += chrono::Duration::days(1);
        total_seconds = 0;
    }
    if total_seconds == 0 {
        return date.format("%Y-%m-%d").to_string();
    }

    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{}T{:02}:{:02}:{:02}", date.format("%Y-%m-%d"), hours, minutes, seconds)
}

/// Path of the output file for a translated sheet
pub fn output_path(output_dir: &Path, sheet_name: &str) -> PathBuf {
    output_dir.join(format!("{}_translated.csv", sheet_name))
}

/// Write a sheet as CSV, creating the parent directory if needed
pub fn write_csv(sheet: &Sheet, path: &Path) -> Result<(), SheetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SheetError::Write(format!("{}: {}", parent.display(), e)))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| SheetError::Write(format!("{}: {}", path.display(), e)))?;

    writer.write_record(sheet.column_names())
        .map_err(|e| SheetError::Write(e.to_string()))?;

    for row_index in 0..sheet.row_count() {
        let row: Vec<String> = sheet.columns.iter()
            .map(|column| {
                column.cells.get(row_index)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)
            .map_err(|e| SheetError::Write(e.to_string()))?;
    }

    writer.flush()
        .map_err(|e| SheetError::Write(e.to_string()))?;

    Ok(())
}
