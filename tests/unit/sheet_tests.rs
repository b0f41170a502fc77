/*!
 * Tests for the sheet model and the column mapper
 */

use std::sync::atomic::Ordering;

use sheetlate::errors::SheetError;
use sheetlate::providers::mock::MockProvider;
use sheetlate::sheet::{CellValue, Column, ColumnKind, Sheet};

use crate::common::{sample_sheet, test_policy, test_translator};

#[test]
fn test_columnKind_mixedCells_shouldInferText() {
    let column = Column::new("mixed", vec![
        CellValue::Number(1.0),
        CellValue::Text("x".to_string()),
    ]);
    assert_eq!(column.kind, ColumnKind::Text);
}

#[test]
fn test_columnKind_onlyNumbers_shouldInferNumeric() {
    let column = Column::new("nums", vec![
        CellValue::Number(1.0),
        CellValue::Empty,
        CellValue::Number(2.5),
    ]);
    assert_eq!(column.kind, ColumnKind::Numeric);
}

#[test]
fn test_columnKind_noTextOrNumbers_shouldInferOther() {
    let column = Column::new("flags", vec![
        CellValue::Bool(true),
        CellValue::Empty,
    ]);
    assert_eq!(column.kind, ColumnKind::Other);
}

#[tokio::test]
async fn test_translateColumns_mixedCells_shouldOnlyTranslateTextCells() {
    let provider = MockProvider::uppercase();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let translated = sheet
        .translate_columns(&translator, &["Name".to_string()], |_, _| {})
        .await
        .unwrap();

    let name = translated.column("Name").unwrap();
    assert_eq!(name.cells, vec![
        CellValue::Text("A".to_string()),
        CellValue::Number(3.0),
        CellValue::Empty,
        CellValue::Text("B".to_string()),
    ]);
}

#[tokio::test]
async fn test_translateColumns_unselectedColumn_shouldPassThroughUntouched() {
    let provider = MockProvider::uppercase();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let translated = sheet
        .translate_columns(&translator, &["Name".to_string()], |_, _| {})
        .await
        .unwrap();

    assert_eq!(translated.column("Amount"), sheet.column("Amount"));
}

#[tokio::test]
async fn test_translateColumns_anySelection_shouldPreserveShape() {
    let provider = MockProvider::uppercase();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let translated = sheet
        .translate_columns(&translator, &["Name".to_string()], |_, _| {})
        .await
        .unwrap();

    assert_eq!(translated.row_count(), sheet.row_count());
    assert_eq!(translated.column_names(), sheet.column_names());
    assert_eq!(translated.name, sheet.name);
}

#[tokio::test]
async fn test_translateColumns_selectedNumericColumn_shouldPassThroughWithoutCalls() {
    let provider = MockProvider::uppercase();
    let counter = provider.counter();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let translated = sheet
        .translate_columns(&translator, &["Amount".to_string()], |_, _| {})
        .await
        .unwrap();

    assert_eq!(translated, sheet);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_translateColumns_unknownColumn_shouldReturnColumnNotFound() {
    let provider = MockProvider::uppercase();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let result = sheet
        .translate_columns(&translator, &["Missing".to_string()], |_, _| {})
        .await;

    match result {
        Err(SheetError::ColumnNotFound(name)) => assert_eq!(name, "Missing"),
        other => panic!("Expected ColumnNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_translateColumns_repeatedCellValues_shouldReuseCache() {
    let provider = MockProvider::uppercase();
    let counter = provider.counter();
    let (translator, _sleeps) = test_translator(provider, test_policy());

    let sheet = Sheet::new("Sheet1", vec![
        Column::new("Name", vec![
            CellValue::Text("dup".to_string()),
            CellValue::Text("dup".to_string()),
            CellValue::Text("dup".to_string()),
        ]),
    ]);

    let translated = sheet
        .translate_columns(&translator, &["Name".to_string()], |_, _| {})
        .await
        .unwrap();

    let name = translated.column("Name").unwrap();
    assert!(name.cells.iter().all(|c| *c == CellValue::Text("DUP".to_string())));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translateColumns_progressCallback_shouldCountSelectedColumns() {
    let provider = MockProvider::uppercase();
    let (translator, _sleeps) = test_translator(provider, test_policy());
    let sheet = sample_sheet();

    let mut calls = Vec::new();
    let _ = sheet
        .translate_columns(
            &translator,
            &["Name".to_string(), "Amount".to_string()],
            |completed, total| calls.push((completed, total)),
        )
        .await
        .unwrap();

    assert_eq!(calls, vec![(1, 2), (2, 2)]);
}

#[test]
fn test_cellValue_display_shouldMatchCsvExpectations() {
    assert_eq!(CellValue::Empty.to_string(), "");
    assert_eq!(CellValue::Text("abc".to_string()).to_string(), "abc");
    assert_eq!(CellValue::Number(3.0).to_string(), "3");
    assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    assert_eq!(CellValue::Bool(true).to_string(), "true");
    assert_eq!(CellValue::DateTime("2024-01-31".to_string()).to_string(), "2024-01-31");
}
