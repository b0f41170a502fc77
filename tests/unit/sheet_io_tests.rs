/*!
 * Tests for workbook range conversion and CSV output
 */

use std::fs;
use std::path::Path;

use calamine::{Data, Range};
use tempfile::TempDir;

use sheetlate::sheet::{CellValue, ColumnKind};
use sheetlate::sheet_io::{format_excel_datetime, output_path, sheet_from_range, write_csv};

use crate::common::sample_sheet;

fn sample_range() -> Range<Data> {
    let mut range = Range::new((0, 0), (3, 1));
    range.set_value((0, 0), Data::String("Name".to_string()));
    // Header cell (0, 1) left blank on purpose
    range.set_value((1, 0), Data::String("alpha".to_string()));
    range.set_value((1, 1), Data::Float(1.5));
    range.set_value((2, 0), Data::Int(7));
    range.set_value((2, 1), Data::Bool(true));
    range.set_value((3, 0), Data::String("beta".to_string()));
    range
}

#[test]
fn test_sheetFromRange_firstRow_shouldBecomeHeaders() {
    let sheet = sheet_from_range("Orders", &sample_range());

    assert_eq!(sheet.name, "Orders");
    assert_eq!(sheet.column_names(), vec!["Name", "Column 2"]);
}

#[test]
fn test_sheetFromRange_cells_shouldConvertTypes() {
    let sheet = sheet_from_range("Orders", &sample_range());

    let name = sheet.column("Name").unwrap();
    assert_eq!(name.kind, ColumnKind::Text);
    assert_eq!(name.cells, vec![
        CellValue::Text("alpha".to_string()),
        CellValue::Number(7.0),
        CellValue::Text("beta".to_string()),
    ]);

    let second = sheet.column("Column 2").unwrap();
    assert_eq!(second.cells, vec![
        CellValue::Number(1.5),
        CellValue::Bool(true),
        CellValue::Empty,
    ]);
}

#[test]
fn test_sheetFromRange_emptyRange_shouldProduceEmptySheet() {
    let range: Range<Data> = Range::empty();
    let sheet = sheet_from_range("Empty", &range);

    assert!(sheet.columns.is_empty());
    assert_eq!(sheet.row_count(), 0);
}

#[test]
fn test_formatExcelDatetime_wholeDay_shouldFormatDateOnly() {
    assert_eq!(format_excel_datetime(45322.0), "2024-01-31");
}

#[test]
fn test_formatExcelDatetime_midday_shouldFormatDateAndTime() {
    assert_eq!(format_excel_datetime(45322.5), "2024-01-31T12:00:00");
}

#[test]
fn test_formatExcelDatetime_fractionRoundingToFullDay_shouldRollToNextDate() {
    // 0.9999999 of a day rounds to 86400 seconds, which must become the
    // next date rather than a 24:00:00 time
    assert_eq!(format_excel_datetime(45322.9999999), "2024-02-01");
}

#[test]
fn test_writeCsv_sampleSheet_shouldWriteHeaderAndRows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    write_csv(&sample_sheet(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec![
        "Name,Amount",
        "a,1",
        "3,2",
        ",",
        "b,4",
    ]);
}

#[test]
fn test_writeCsv_missingParentDirectory_shouldCreateIt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("out.csv");

    write_csv(&sample_sheet(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_outputPath_sheetName_shouldAppendTranslatedSuffix() {
    let path = output_path(Path::new("translated"), "Sheet1");
    assert_eq!(path, Path::new("translated").join("Sheet1_translated.csv"));
}
