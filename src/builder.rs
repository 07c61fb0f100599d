//! Column builder.
//!
//! Materializes the [`OutputTable`]: classifies every output slot once (see
//! [`crate::resolve`]), precomputes the per-row [`AddressComponents`] when an
//! address-bearing column exists, then fills each output column in desired order.
//!
//! Resolution never hard-fails. Slots that cannot be satisfied (no address source,
//! directive matching nothing) fall back to blanks or literals and are reported as
//! [`ColumnResolutionWarning`]s.

use std::collections::HashMap;

use crate::address::split_address;
use crate::error::ColumnResolutionWarning;
use crate::resolve::{classify_slot, ColumnSource};
use crate::types::{
    normalize_name, AddressComponents, CellValue, HeaderSpec, OutputColumn, OutputTable, RawTable,
};

/// Source column consulted for per-row address parsing unless overridden in options.
pub const DEFAULT_ADDRESS_COLUMN: &str = "Address";

/// Fixed sender address lines emitted for `sender add line 1/2/3` output fields.
///
/// Kept as a configuration table rather than inline literals so deployments can swap the
/// dispatch origin without touching resolution logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderAddress {
    pub line1: String,
    pub line2: String,
    pub line3: String,
}

impl Default for SenderAddress {
    fn default() -> Self {
        Self {
            line1: "SALES WING OF PUBLICATIONS".to_string(),
            line2: "TTD PRESS COMPOUND".to_string(),
            line3: "Tirupati - 517507".to_string(),
        }
    }
}

/// Build the output table from the parsed data rows and header spec.
///
/// Slots with an empty desired name are skipped (they still appear as blank cells in the
/// output header row). Column order follows the non-empty desired names; duplicate names
/// are preserved as distinct columns, in slot order, with a warning.
pub fn build_output(
    table: &RawTable,
    spec: &HeaderSpec,
    address_column: &str,
    sender: &SenderAddress,
) -> (OutputTable, Vec<ColumnResolutionWarning>) {
    let rows = table.row_count();
    let addr_idx = table.index_of(address_column);

    // One pass over the address column up front; every receiver slot reuses the result.
    let components: Vec<AddressComponents> = match addr_idx {
        Some(idx) => table
            .column(idx)
            .values
            .iter()
            .map(|v| split_address(&v.to_text()))
            .collect(),
        None => vec![AddressComponents::default(); rows],
    };

    let mut warnings = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(spec.slot_count());

    for (slot, desired) in spec.desired_names.iter().enumerate() {
        if desired.is_empty() {
            continue;
        }
        let name = desired.to_text();

        match first_seen.get(&normalize_name(&name)) {
            Some(&first_slot) => warnings.push(ColumnResolutionWarning::DuplicateDesiredName {
                slot,
                first_slot,
                desired: name.clone(),
            }),
            None => {
                first_seen.insert(normalize_name(&name), slot);
            }
        }

        let source = classify_slot(desired, &spec.mapping_directives[slot], table);
        if addr_idx.is_none() && source.needs_address() {
            warnings.push(ColumnResolutionWarning::MissingAddressSource {
                slot,
                desired: name.clone(),
            });
        }

        let values: Vec<CellValue> = match &source {
            ColumnSource::ReceiverLine1 => text_column(&components, |c| &c.line1),
            ColumnSource::ReceiverLine2 => text_column(&components, |c| &c.line2),
            ColumnSource::ReceiverLine3 => text_column(&components, |c| &c.line3),
            ColumnSource::ReceiverState => text_column(&components, |c| &c.state),
            ColumnSource::ReceiverPincode { source: Some(idx) } => {
                table.column(*idx).values.clone()
            }
            ColumnSource::ReceiverPincode { source: None } => {
                text_column(&components, |c| &c.postal_code)
            }
            ColumnSource::ReceiverCity { source: Some(idx) } => table.column(*idx).values.clone(),
            ColumnSource::ReceiverCity { source: None } => text_column(&components, |c| &c.city),
            ColumnSource::SenderLine1 => repeat_text(&sender.line1, rows),
            ColumnSource::SenderLine2 => repeat_text(&sender.line2, rows),
            ColumnSource::SenderLine3 => repeat_text(&sender.line3, rows),
            ColumnSource::Mapped(idx) => table.column(*idx).values.clone(),
            ColumnSource::Literal(value) => {
                warnings.push(ColumnResolutionWarning::UnmappedDirective {
                    slot,
                    directive: value.to_text(),
                });
                vec![value.clone(); rows]
            }
            ColumnSource::Blank => repeat_text("", rows),
        };

        columns.push(OutputColumn { name, values });
    }

    let output = OutputTable {
        header_row: spec.desired_names.clone(),
        columns,
    };
    (output, warnings)
}

fn text_column<F>(components: &[AddressComponents], pick: F) -> Vec<CellValue>
where
    F: Fn(&AddressComponents) -> &str,
{
    components
        .iter()
        .map(|c| CellValue::Text(pick(c).to_string()))
        .collect()
}

fn repeat_text(value: &str, rows: usize) -> Vec<CellValue> {
    vec![CellValue::Text(value.to_string()); rows]
}
