/*!
 * In-memory sheet model and the column mapper.
 *
 * A sheet is an ordered list of named columns; each column carries a declared
 * kind inferred at load time. The column mapper replaces every text cell of
 * the selected text-like columns with its translation and leaves everything
 * else untouched, preserving row count, column identity, and column order.
 */

use std::fmt;

use log::info;

use crate::errors::SheetError;
use crate::translation::Translator;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Text cell, the only kind the translator touches
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Boolean cell
    Bool(bool),
    /// Date or time cell, carried as an ISO 8601 string
    DateTime(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(s) => write!(f, "{}", s),
        }
    }
}

/// Declared kind of a column, inferred once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Contains at least one text cell; eligible for translation
    Text,
    /// Only numeric cells (and blanks)
    Numeric,
    /// Anything else: dates, booleans, all-empty
    Other,
}

/// A named, ordered column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header
    pub name: String,

    /// Declared kind
    pub kind: ColumnKind,

    /// Cell values, one per row
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Create a column, inferring its kind from the cells
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let kind = infer_kind(&cells);
        Self { name: name.into(), kind, cells }
    }
}

/// Infer a column kind the way a spreadsheet library types a column: any text
/// cell makes the whole column text-like
fn infer_kind(cells: &[CellValue]) -> ColumnKind {
    let mut saw_number = false;

    for cell in cells {
        match cell {
            CellValue::Text(_) => return ColumnKind::Text,
            CellValue::Number(_) => saw_number = true,
            _ => {}
        }
    }

    if saw_number {
        ColumnKind::Numeric
    } else {
        ColumnKind::Other
    }
}

/// An ordered collection of named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name from the workbook
    pub name: String,

    /// Columns in workbook order
    pub columns: Vec<Column>,
}

impl Sheet {
    /// Create a new sheet
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self { name: name.into(), columns }
    }

    /// Names of all columns, in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows (cells per column)
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Produce a new sheet with the selected text-like columns translated
    ///
    /// Every text cell of a selected `ColumnKind::Text` column goes through
    /// `translate_with_retry`; non-text cells in those columns pass through
    /// unchanged. Selected columns of any other kind, and unselected columns,
    /// are cloned wholesale. The callback receives (completed, total) over
    /// the selected columns after each one finishes, for progress reporting.
    pub async fn translate_columns<F>(
        &self,
        translator: &Translator,
        selected: &[String],
        mut on_column_done: F,
    ) -> Result<Sheet, SheetError>
    where
        F: FnMut(usize, usize),
    {
        for name in selected {
            if self.column(name).is_none() {
                return Err(SheetError::ColumnNotFound(name.clone()));
            }
        }

        let total = selected.len();
        let mut completed = 0;
        let mut columns = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            if !selected.contains(&column.name) {
                columns.push(column.clone());
                continue;
            }

            if column.kind != ColumnKind::Text {
                info!("Column '{}' is not text-like, passing through", column.name);
                columns.push(column.clone());
            } else {
                let mut cells = Vec::with_capacity(column.cells.len());
                for cell in &column.cells {
                    let translated = match cell {
                        CellValue::Text(text) => {
                            CellValue::Text(translator.translate_with_retry(text).await)
                        },
                        other => other.clone(),
                    };
                    cells.push(translated);
                }
                columns.push(Column {
                    name: column.name.clone(),
                    kind: column.kind,
                    cells,
                });
            }

            completed += 1;
            on_column_done(completed, total);
        }

        Ok(Sheet::new(self.name.clone(), columns))
    }
}
