//! Per-slot classification of output value sources.
//!
//! Classification runs once per output slot, before any row processing, so that the
//! per-row hot path in the column builder is a plain `match` with no string inspection.
//!
//! Receiver and sender fields are recognized by marker phrases in the desired name
//! (case-insensitive substring match, checked in a fixed order, first match wins) and
//! override the slot's mapping directive. Everything else resolves through the directive:
//! a known source column, a repeated literal, or a blank column.

use crate::types::{CellValue, RawTable};

/// Where one output column's values come from. One variant per slot, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSource {
    /// First parsed address line.
    ReceiverLine1,
    /// Second parsed address line (city-filled when absent).
    ReceiverLine2,
    /// Third parsed address line (city-filled when absent).
    ReceiverLine3,
    /// Parsed state component.
    ReceiverState,
    /// Postal code; prefers an explicit `PinCode` source column when one exists.
    ReceiverPincode { source: Option<usize> },
    /// City; prefers an explicit `City` source column when one exists.
    ReceiverCity { source: Option<usize> },
    /// Fixed sender address line 1.
    SenderLine1,
    /// Fixed sender address line 2.
    SenderLine2,
    /// Fixed sender address line 3.
    SenderLine3,
    /// Verbatim copy of a source column.
    Mapped(usize),
    /// Directive literal repeated for every row.
    Literal(CellValue),
    /// Empty directive: blank column.
    Blank,
}

impl ColumnSource {
    /// True when the variant draws its values from the parsed address components.
    pub fn needs_address(&self) -> bool {
        matches!(
            self,
            ColumnSource::ReceiverLine1
                | ColumnSource::ReceiverLine2
                | ColumnSource::ReceiverLine3
                | ColumnSource::ReceiverState
                | ColumnSource::ReceiverPincode { source: None }
                | ColumnSource::ReceiverCity { source: None }
        )
    }
}

/// Classify one slot from its desired name and mapping directive.
pub fn classify_slot(
    desired: &CellValue,
    directive: &CellValue,
    table: &RawTable,
) -> ColumnSource {
    let desired_norm = crate::types::normalize_name(&desired.to_text());

    // Marker order matters: "receiver add line 1" must win before any looser match.
    if desired_norm.contains("receiver add line 1") {
        return ColumnSource::ReceiverLine1;
    }
    if desired_norm.contains("receiver add line 2") {
        return ColumnSource::ReceiverLine2;
    }
    if desired_norm.contains("receiver add line 3") {
        return ColumnSource::ReceiverLine3;
    }
    if desired_norm.contains("receiver state/ut") {
        return ColumnSource::ReceiverState;
    }
    if desired_norm.contains("receiver pincode") {
        return ColumnSource::ReceiverPincode {
            source: table.index_of("PinCode"),
        };
    }
    if desired_norm.contains("receiver city") {
        return ColumnSource::ReceiverCity {
            source: table.index_of("City"),
        };
    }
    if desired_norm.contains("sender add line 1") {
        return ColumnSource::SenderLine1;
    }
    if desired_norm.contains("sender add line 2") {
        return ColumnSource::SenderLine2;
    }
    if desired_norm.contains("sender add line 3") {
        return ColumnSource::SenderLine3;
    }

    match directive {
        CellValue::Empty => ColumnSource::Blank,
        other => match table.index_of(&other.to_text()) {
            Some(idx) => ColumnSource::Mapped(idx),
            None => ColumnSource::Literal(other.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn table(names: &[&str]) -> RawTable {
        RawTable::new(
            names
                .iter()
                .map(|n| Column {
                    name: n.to_string(),
                    values: vec![],
                })
                .collect(),
        )
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn receiver_markers_override_mapping_directives() {
        let t = table(&["Name", "Address"]);
        // Directive points at a real column, but the receiver marker wins.
        let src = classify_slot(&text("Receiver Add Line 1 *"), &text("Name"), &t);
        assert_eq!(src, ColumnSource::ReceiverLine1);
    }

    #[test]
    fn marker_match_is_case_insensitive_substring() {
        let t = table(&[]);
        let src = classify_slot(&text("  RECEIVER STATE/UT (code) "), &CellValue::Empty, &t);
        assert_eq!(src, ColumnSource::ReceiverState);
        let src = classify_slot(&text("sender add line 3"), &CellValue::Empty, &t);
        assert_eq!(src, ColumnSource::SenderLine3);
    }

    #[test]
    fn pincode_and_city_prefer_explicit_source_columns() {
        let t = table(&["PinCode", "City"]);
        assert_eq!(
            classify_slot(&text("Receiver Pincode"), &CellValue::Empty, &t),
            ColumnSource::ReceiverPincode { source: Some(0) }
        );
        assert_eq!(
            classify_slot(&text("Receiver City"), &CellValue::Empty, &t),
            ColumnSource::ReceiverCity { source: Some(1) }
        );

        let bare = table(&["Name"]);
        assert_eq!(
            classify_slot(&text("Receiver Pincode"), &CellValue::Empty, &bare),
            ColumnSource::ReceiverPincode { source: None }
        );
    }

    #[test]
    fn directive_resolution_falls_through_column_literal_blank() {
        let t = table(&["Order No"]);
        assert_eq!(
            classify_slot(&text("Ref"), &text(" order no "), &t),
            ColumnSource::Mapped(0)
        );
        assert_eq!(
            classify_slot(&text("Mode"), &text("COD"), &t),
            ColumnSource::Literal(text("COD"))
        );
        assert_eq!(
            classify_slot(&text("Notes"), &CellValue::Empty, &t),
            ColumnSource::Blank
        );
    }

    #[test]
    fn numeric_directive_can_reference_a_numeric_header() {
        let t = table(&["2024"]);
        assert_eq!(
            classify_slot(&text("Year"), &CellValue::Number(2024.0), &t),
            ColumnSource::Mapped(0)
        );
    }

    #[test]
    fn needs_address_excludes_column_backed_pincode_and_city() {
        assert!(ColumnSource::ReceiverLine2.needs_address());
        assert!(ColumnSource::ReceiverPincode { source: None }.needs_address());
        assert!(!ColumnSource::ReceiverPincode { source: Some(3) }.needs_address());
        assert!(!ColumnSource::SenderLine1.needs_address());
        assert!(!ColumnSource::Blank.needs_address());
    }
}
