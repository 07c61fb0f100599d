//! Unified remap entrypoints.
//!
//! Most callers should use [`remap_workbook`], which takes raw input workbook bytes and
//! returns raw output workbook bytes plus the non-fatal warnings collected along the way.
//! [`remap_from_path`] is a filesystem convenience wrapper over the same pipeline.
//!
//! Each invocation is independent: one pass over the header block, one pass per row for
//! address splitting, one pass per output slot for column building. No state is shared
//! across invocations.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::builder::{build_output, SenderAddress, DEFAULT_ADDRESS_COLUMN};
use crate::error::{ColumnResolutionWarning, RemapError, RemapResult};
use crate::header::parse_header_spec;
use crate::observability::{RemapContext, RemapObserver, RemapStats, Severity};
use crate::types::RawTable;
use crate::workbook::{read_sheet, write_output, SheetSelection};

/// Options controlling one remap invocation.
///
/// Use [`Default`] for common cases: first sheet, `Address` as the address-bearing
/// column, the stock sender address, no observer.
#[derive(Clone)]
pub struct RemapOptions {
    /// Which sheet of the input workbook to process.
    pub sheet: SheetSelection,
    /// Name of the source column whose values get address-split (matched trimmed,
    /// case-insensitive).
    pub address_column: String,
    /// Sender address configuration table for `sender add line` output fields.
    pub sender: SenderAddress,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn RemapObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for RemapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemapOptions")
            .field("sheet", &self.sheet)
            .field("address_column", &self.address_column)
            .field("sender", &self.sender)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for RemapOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelection::default(),
            address_column: DEFAULT_ADDRESS_COLUMN.to_string(),
            sender: SenderAddress::default(),
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Result of a successful remap invocation.
#[derive(Debug, Clone)]
pub struct RemapOutcome {
    /// Serialized single-sheet `.xlsx` output.
    pub bytes: Vec<u8>,
    /// Non-fatal resolution warnings, in slot order.
    pub warnings: Vec<ColumnResolutionWarning>,
}

/// Remap an in-memory workbook.
///
/// This is the boundary contract with any host layer: raw input file bytes in, raw output
/// file bytes (plus warnings) out.
///
/// # Examples
///
/// ```no_run
/// use sheet_remap::{remap_workbook, RemapOptions};
///
/// # fn main() -> Result<(), sheet_remap::RemapError> {
/// let input = std::fs::read("orders.xlsx")?;
/// let outcome = remap_workbook(&input, &RemapOptions::default())?;
/// for w in &outcome.warnings {
///     eprintln!("warning: {w}");
/// }
/// std::fs::write("orders_remapped.xlsx", &outcome.bytes)?;
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sheet_remap::observability::{Severity, StdErrObserver};
/// use sheet_remap::{remap_workbook, RemapOptions};
///
/// # fn main() -> Result<(), sheet_remap::RemapError> {
/// let opts = RemapOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: Severity::Critical,
///     ..Default::default()
/// };
/// let outcome = remap_workbook(&std::fs::read("orders.xlsx")?, &opts)?;
/// # let _ = outcome;
/// # Ok(())
/// # }
/// ```
pub fn remap_workbook(bytes: &[u8], options: &RemapOptions) -> RemapResult<RemapOutcome> {
    run_pipeline("<memory>".to_string(), options, || {
        remap_inner(bytes, options)
    })
}

/// Remap a workbook file from disk.
///
/// Reads the file and delegates to the same pipeline as [`remap_workbook`]; the path is
/// used as the observer context source.
pub fn remap_from_path(
    path: impl AsRef<Path>,
    options: &RemapOptions,
) -> RemapResult<RemapOutcome> {
    let path = path.as_ref();
    run_pipeline(path.display().to_string(), options, || {
        let bytes = std::fs::read(path)?;
        remap_inner(&bytes, options)
    })
}

fn run_pipeline<F>(source: String, options: &RemapOptions, f: F) -> RemapResult<RemapOutcome>
where
    F: FnOnce() -> RemapResult<(RemapOutcome, RemapStats)>,
{
    let ctx = RemapContext {
        source,
        sheet: options.sheet.clone(),
    };

    let result = f();

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((outcome, stats)) => {
                for warning in &outcome.warnings {
                    obs.on_warning(&ctx, warning);
                }
                obs.on_success(&ctx, *stats);
            }
            Err(e) => {
                let severity = severity_for_error(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result.map(|(outcome, _)| outcome)
}

fn remap_inner(bytes: &[u8], options: &RemapOptions) -> RemapResult<(RemapOutcome, RemapStats)> {
    let rows = read_sheet(bytes, &options.sheet)?;
    let spec = parse_header_spec(&rows)?;
    let table = RawTable::from_rows(&spec.source_names, rows.get(3..).unwrap_or(&[]));

    let (output, warnings) =
        build_output(&table, &spec, &options.address_column, &options.sender);
    let stats = RemapStats {
        rows: output.row_count(),
        columns: output.column_count(),
    };
    let bytes = write_output(&output)?;

    Ok((RemapOutcome { bytes, warnings }, stats))
}

fn severity_for_error(e: &RemapError) -> Severity {
    match e {
        RemapError::Io(_) => Severity::Critical,
        RemapError::Workbook(_)
        | RemapError::Xlsx(_)
        | RemapError::MalformedHeader { .. }
        | RemapError::SheetNotFound { .. }
        | RemapError::EmptyWorkbook => Severity::Error,
    }
}
