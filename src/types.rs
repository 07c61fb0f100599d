//! Core data model types for the remap pipeline.
//!
//! A workbook sheet is read into a three-row [`HeaderSpec`] plus a [`RawTable`] of data
//! rows; the column builder turns those into an [`OutputTable`] ready for serialization.

use std::collections::HashMap;

use serde::Serialize;

/// A single typed cell value.
///
/// Cells arrive from the workbook as mixed string/number/date data; they stay typed
/// internally and are normalized to text only where text semantics (trimming, splitting,
/// case-folded lookup) are required.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing/empty cell.
    Empty,
    /// UTF-8 text.
    Text(String),
    /// Numeric cell (Excel stores all numbers as 64-bit floats).
    Number(f64),
    /// Boolean.
    Bool(bool),
    /// Date/time as an Excel serial number.
    DateTime(f64),
}

impl CellValue {
    /// True for [`CellValue::Empty`] only; an empty text cell is still a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text rendering of the cell, with empty cells as `""` and whole numbers rendered
    /// without a trailing `.0`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(f) => {
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(f) => f.to_string(),
        }
    }
}

/// Normalization applied to column names and mapping directives before lookup:
/// trim surrounding whitespace and case-fold.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A named source column with one value per data row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name with original casing preserved.
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<CellValue>,
}

/// In-memory table of the data rows (row 4 onward of the input sheet).
///
/// Columns are positional; name lookup goes through [`normalize_name`]. When two columns
/// normalize to the same name, the later one wins the lookup slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<Column>,
    lookup: HashMap<String, usize>,
    row_count: usize,
}

impl RawTable {
    /// Create a table from equal-length columns.
    pub fn new(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);
        debug_assert!(
            columns.iter().all(|c| c.values.len() == row_count),
            "all columns must have equal length"
        );

        let mut lookup = HashMap::new();
        for (idx, col) in columns.iter().enumerate() {
            let key = normalize_name(&col.name);
            if !key.is_empty() {
                lookup.insert(key, idx);
            }
        }

        Self {
            columns,
            lookup,
            row_count,
        }
    }

    /// Assemble a table from row-major data, naming columns from the first header row.
    ///
    /// Data rows wider than the header row get trailing unnamed columns (unreachable by
    /// lookup but kept positionally); short rows are padded with empty cells.
    pub fn from_rows(source_names: &[CellValue], data_rows: &[Vec<CellValue>]) -> Self {
        let width = data_rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(source_names.len());

        let mut columns: Vec<Column> = (0..width)
            .map(|i| Column {
                name: source_names.get(i).map(CellValue::to_text).unwrap_or_default(),
                values: Vec::with_capacity(data_rows.len()),
            })
            .collect();

        for row in data_rows {
            for (i, col) in columns.iter_mut().enumerate() {
                col.values.push(row.get(i).cloned().unwrap_or(CellValue::Empty));
            }
        }

        Self::new(columns)
    }

    /// Case-insensitive, trimmed column lookup.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(&normalize_name(name)).copied()
    }

    /// Column by positional index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn column(&self, idx: usize) -> &Column {
        &self.columns[idx]
    }

    /// All columns in positional order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// The three parsed header rows, padded to equal length.
///
/// Slots are positional indexes across all three rows. A slot whose desired name is empty
/// contributes no output column (but still occupies a cell in the serialized header row).
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSpec {
    /// Row 1: raw source column names.
    pub source_names: Vec<CellValue>,
    /// Row 2: per-slot mapping directives (empty, a source column reference, or a literal).
    pub mapping_directives: Vec<CellValue>,
    /// Row 3: desired output names.
    pub desired_names: Vec<CellValue>,
}

impl HeaderSpec {
    /// Number of slots (all three rows share this length after padding).
    pub fn slot_count(&self) -> usize {
        self.desired_names.len()
    }
}

/// Structured decomposition of one free-text address string.
///
/// Derived per input row and consumed immediately into output columns; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressComponents {
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A materialized output column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputColumn {
    /// Desired name, original casing preserved.
    pub name: String,
    /// Cell values, one per data row.
    pub values: Vec<CellValue>,
}

/// The reshaped table, ready for serialization.
///
/// `header_row` is the desired-header row verbatim (empty slots included); `columns` holds
/// only the resolved columns, in non-empty slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    /// Row 1 of the output: the raw desired-header row.
    pub header_row: Vec<CellValue>,
    /// Data columns in desired order, duplicates preserved.
    pub columns: Vec<OutputColumn>,
}

impl OutputTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Number of resolved output columns (excludes empty slots).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
