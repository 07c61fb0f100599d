use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::RemapResult;
use crate::types::{CellValue, OutputTable};

/// Serialize the output table to a single-sheet `.xlsx` buffer.
///
/// Row 1 is the desired-header row verbatim (empty slots stay blank); rows 2+ hold the
/// resolved data columns in desired order. Cells are written typed.
pub fn write_output(output: &OutputTable) -> RemapResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    for (col, cell) in output.header_row.iter().enumerate() {
        write_cell(sheet, 0, col as u16, cell)?;
    }

    for (col, column) in output.columns.iter().enumerate() {
        for (row, cell) in column.values.iter().enumerate() {
            write_cell(sheet, row as u32 + 1, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> RemapResult<()> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        CellValue::Number(f) => {
            sheet.write_number(row, col, *f)?;
        }
        CellValue::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        // Serial-number form; consumers apply their own date formats.
        CellValue::DateTime(f) => {
            sheet.write_number(row, col, *f)?;
        }
    }
    Ok(())
}
