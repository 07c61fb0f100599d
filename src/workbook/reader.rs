use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{RemapError, RemapResult};
use crate::types::CellValue;

/// Which sheet of the input workbook to process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelection {
    /// The first sheet in workbook order (default).
    #[default]
    First,
    /// A single named sheet.
    Named(String),
}

/// Read the selected sheet of an in-memory workbook into typed cell rows.
///
/// Accepts any container `calamine` can auto-detect (`.xlsx`, `.xls`, `.ods`, ...). Rows
/// cover the sheet's used range; every row has the same width. Cell conversion is
/// lossless for text/number/bool and renders dates as Excel serial numbers.
pub fn read_sheet(bytes: &[u8], selection: &SheetSelection) -> RemapResult<Vec<Vec<CellValue>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let sheet = match selection {
        SheetSelection::First => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(RemapError::EmptyWorkbook)?,
        SheetSelection::Named(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(RemapError::SheetNotFound { name: name.clone() });
            }
            name.clone()
        }
    };

    let range = workbook.worksheet_range(&sheet)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect())
}

fn convert_cell(c: &Data) -> CellValue {
    match c {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("{e:?}")),
    }
}
