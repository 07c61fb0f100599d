use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Convenience result type for remap operations.
pub type RemapResult<T> = Result<T, RemapError>;

/// Fatal error type returned by the remap pipeline.
///
/// The pipeline is all-or-nothing per invocation: any of these aborts processing with no
/// partial output. Recoverable resolution issues are reported as
/// [`ColumnResolutionWarning`]s instead.
#[derive(Debug, Error)]
pub enum RemapError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input workbook container could not be read.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The output workbook could not be serialized.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The input sheet has fewer than the three required header rows
    /// (source names, mapping directives, desired names).
    #[error("malformed header: expected 3 header rows, found {rows}")]
    MalformedHeader { rows: usize },

    /// A sheet was requested by name but does not exist in the workbook.
    #[error("sheet '{name}' not found in workbook")]
    SheetNotFound { name: String },

    /// The workbook contains no sheets at all.
    #[error("workbook has no sheets")]
    EmptyWorkbook,
}

/// Non-fatal resolution issue encountered while building output columns.
///
/// Warnings never abort the pipeline; the affected column is filled with the documented
/// fallback (blank cells, the literal value, or the first-seen column). Callers may surface
/// them, forward them to a [`crate::observability::RemapObserver`], or ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnResolutionWarning {
    /// An address-derived output field was requested but no address-bearing source column
    /// exists; the field is filled with empty strings.
    MissingAddressSource { slot: usize, desired: String },

    /// A mapping directive matched no source column and was emitted as a repeated literal.
    UnmappedDirective { slot: usize, directive: String },

    /// Two output slots share the same desired name; both are kept, in slot order.
    DuplicateDesiredName {
        slot: usize,
        first_slot: usize,
        desired: String,
    },
}

impl fmt::Display for ColumnResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAddressSource { slot, desired } => write!(
                f,
                "slot {slot} ('{desired}'): no address-bearing column to derive from; filled with empty strings"
            ),
            Self::UnmappedDirective { slot, directive } => write!(
                f,
                "slot {slot}: directive '{directive}' matches no source column; emitted as a literal"
            ),
            Self::DuplicateDesiredName {
                slot,
                first_slot,
                desired,
            } => write!(
                f,
                "slot {slot} duplicates desired name '{desired}' first used at slot {first_slot}; both columns kept"
            ),
        }
    }
}
