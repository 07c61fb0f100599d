//! Workbook I/O boundary.
//!
//! The core operates on in-memory bytes at both ends: [`reader`] opens an input workbook
//! buffer with `calamine` and produces typed cell rows, [`writer`] serializes the built
//! [`crate::types::OutputTable`] to `.xlsx` bytes with `rust_xlsxwriter`.

pub mod reader;
pub mod writer;

pub use reader::{read_sheet, SheetSelection};
pub use writer::write_output;
