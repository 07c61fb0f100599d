//! Header parser.
//!
//! The first three rows of the input sheet form the header block: source column names,
//! mapping directives, and desired output names. All three are padded with empty cells to
//! the longest observed row so that downstream code can index them by slot.

use crate::error::{RemapError, RemapResult};
use crate::types::{CellValue, HeaderSpec};

/// Parse the header block from the sheet's rows.
///
/// Only the first three rows are consumed; callers pass the full row set and use row 4
/// onward as data. Fails with [`RemapError::MalformedHeader`] when fewer than three rows
/// exist. No other validation happens here: duplicate or empty desired names are
/// tolerated and handled downstream by the column builder.
pub fn parse_header_spec(rows: &[Vec<CellValue>]) -> RemapResult<HeaderSpec> {
    if rows.len() < 3 {
        return Err(RemapError::MalformedHeader { rows: rows.len() });
    }

    let max_len = rows[..3].iter().map(Vec::len).max().unwrap_or(0);
    let pad = |row: &[CellValue]| {
        let mut padded = row.to_vec();
        padded.resize(max_len, CellValue::Empty);
        padded
    };

    Ok(HeaderSpec {
        source_names: pad(&rows[0]),
        mapping_directives: pad(&rows[1]),
        desired_names: pad(&rows[2]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::Text(c.to_string())).collect()
    }

    #[test]
    fn pads_all_three_rows_to_the_longest() {
        let rows = vec![
            text_row(&["Name", "Address"]),
            text_row(&["name"]),
            text_row(&["Consignee", "Receiver City", "Mode", "Weight"]),
        ];
        let spec = parse_header_spec(&rows).unwrap();
        assert_eq!(spec.slot_count(), 4);
        assert_eq!(spec.source_names.len(), 4);
        assert_eq!(spec.mapping_directives.len(), 4);
        assert_eq!(spec.source_names[3], CellValue::Empty);
        assert_eq!(spec.mapping_directives[1], CellValue::Empty);
    }

    #[test]
    fn ignores_rows_beyond_the_header_block() {
        let rows = vec![
            text_row(&["A"]),
            text_row(&["a"]),
            text_row(&["Out"]),
            text_row(&["data", "wider", "than", "headers"]),
        ];
        let spec = parse_header_spec(&rows).unwrap();
        assert_eq!(spec.slot_count(), 1);
    }

    #[test]
    fn fewer_than_three_rows_is_malformed() {
        for n in 0..3 {
            let rows: Vec<Vec<CellValue>> = (0..n).map(|_| text_row(&["x"])).collect();
            let err = parse_header_spec(&rows).unwrap_err();
            assert!(matches!(err, RemapError::MalformedHeader { rows } if rows == n));
        }
    }
}
