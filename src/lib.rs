//! `sheet-remap` reshapes a spreadsheet according to a mapping embedded in the file
//! itself.
//!
//! The input sheet carries a three-row header block: row 1 names the raw source columns,
//! row 2 holds per-column mapping directives, row 3 names the desired output columns.
//! Data starts at row 4. The pipeline builds each output column in one of several modes
//! (direct copy of a source column, a component of a parsed free-text address, a repeated
//! constant, or blank) and serializes a new single-sheet workbook whose columns follow
//! the desired schema.
//!
//! The primary entrypoint is [`pipeline::remap_workbook`]: raw workbook bytes in, raw
//! `.xlsx` bytes out, plus the non-fatal [`ColumnResolutionWarning`]s collected while
//! resolving columns. [`pipeline::remap_from_path`] wraps it for files on disk.
//!
//! ## Resolution modes
//!
//! Per output slot, in precedence order:
//!
//! 1. **Receiver address fields** (`receiver add line 1/2/3`, `receiver state/ut`,
//!    `receiver pincode`, `receiver city` markers in the desired name): values come from
//!    the per-row address decomposition; pincode and city prefer explicit
//!    `PinCode`/`City` source columns when present.
//! 2. **Sender address fields** (`sender add line 1/2/3` markers): fixed lines from the
//!    configurable [`builder::SenderAddress`] table.
//! 3. **Mapped column**: the directive names a source column (trimmed, case-insensitive).
//! 4. **Literal**: a non-empty directive matching no column repeats for every row.
//! 5. **Blank**: an empty directive yields an empty-string column.
//!
//! ## Quick example
//!
//! ```no_run
//! use sheet_remap::{remap_workbook, RemapOptions};
//!
//! # fn main() -> Result<(), sheet_remap::RemapError> {
//! let input = std::fs::read("orders.xlsx")?;
//! let outcome = remap_workbook(&input, &RemapOptions::default())?;
//! std::fs::write("orders_remapped.xlsx", &outcome.bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: unified entrypoints and invocation options
//! - [`header`]: three-row header block parsing
//! - [`address`]: the positional address splitter
//! - [`resolve`] / [`builder`]: slot classification and column materialization
//! - [`workbook`]: byte-level workbook reading/writing
//! - [`observability`]: observer hooks for logging and alerting
//! - [`types`] / [`error`]: data model and error/warning types

pub mod address;
pub mod builder;
pub mod error;
pub mod header;
pub mod observability;
pub mod pipeline;
pub mod resolve;
pub mod types;
pub mod workbook;

pub use error::{ColumnResolutionWarning, RemapError, RemapResult};
pub use pipeline::{remap_from_path, remap_workbook, RemapOptions, RemapOutcome};
