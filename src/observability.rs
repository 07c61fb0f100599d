//! Observer hooks for remap outcomes.
//!
//! The pipeline itself is silent; callers that want logging or alerting attach a
//! [`RemapObserver`] through [`crate::pipeline::RemapOptions`]. Observers receive the
//! non-fatal [`ColumnResolutionWarning`]s, a success callback with [`RemapStats`], and
//! failure/alert callbacks with a computed [`Severity`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::{ColumnResolutionWarning, RemapError};
use crate::workbook::SheetSelection;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (invocation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about one remap invocation.
#[derive(Debug, Clone)]
pub struct RemapContext {
    /// Input description: a path, or `<memory>` for byte-buffer invocations.
    pub source: String,
    /// Sheet selection in effect.
    pub sheet: SheetSelection,
}

/// Shape stats reported on successful invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemapStats {
    /// Number of output data rows.
    pub rows: usize,
    /// Number of resolved output columns.
    pub columns: usize,
}

/// Observer interface for remap outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait RemapObserver: Send + Sync {
    /// Called when an invocation succeeds.
    fn on_success(&self, _ctx: &RemapContext, _stats: RemapStats) {}

    /// Called once per non-fatal resolution warning, before `on_success`.
    fn on_warning(&self, _ctx: &RemapContext, _warning: &ColumnResolutionWarning) {}

    /// Called when an invocation fails.
    fn on_failure(&self, _ctx: &RemapContext, _severity: Severity, _error: &RemapError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RemapObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RemapObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RemapObserver for CompositeObserver {
    fn on_success(&self, ctx: &RemapContext, stats: RemapStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_warning(&self, ctx: &RemapContext, warning: &ColumnResolutionWarning) {
        for o in &self.observers {
            o.on_warning(ctx, warning);
        }
    }

    fn on_failure(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs remap events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RemapObserver for StdErrObserver {
    fn on_success(&self, ctx: &RemapContext, stats: RemapStats) {
        eprintln!(
            "[remap][ok] source={} rows={} columns={}",
            ctx.source, stats.rows, stats.columns
        );
    }

    fn on_warning(&self, ctx: &RemapContext, warning: &ColumnResolutionWarning) {
        eprintln!("[remap][warn] source={} {warning}", ctx.source);
    }

    fn on_failure(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        eprintln!("[remap][{severity:?}] source={} err={error}", ctx.source);
    }

    fn on_alert(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        eprintln!("[ALERT][remap][{severity:?}] source={} err={error}", ctx.source);
    }
}

/// Appends remap events to a local log file as JSON lines.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl RemapObserver for FileObserver {
    fn on_success(&self, ctx: &RemapContext, stats: RemapStats) {
        self.append_line(
            &serde_json::json!({
                "ts": unix_ts(),
                "event": "ok",
                "source": ctx.source,
                "rows": stats.rows,
                "columns": stats.columns,
            })
            .to_string(),
        );
    }

    fn on_warning(&self, ctx: &RemapContext, warning: &ColumnResolutionWarning) {
        self.append_line(
            &serde_json::json!({
                "ts": unix_ts(),
                "event": "warning",
                "source": ctx.source,
                "warning": warning,
            })
            .to_string(),
        );
    }

    fn on_failure(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        self.append_line(
            &serde_json::json!({
                "ts": unix_ts(),
                "event": "fail",
                "source": ctx.source,
                "severity": format!("{severity:?}"),
                "err": error.to_string(),
            })
            .to_string(),
        );
    }

    fn on_alert(&self, ctx: &RemapContext, severity: Severity, error: &RemapError) {
        self.append_line(
            &serde_json::json!({
                "ts": unix_ts(),
                "event": "alert",
                "source": ctx.source,
                "severity": format!("{severity:?}"),
                "err": error.to_string(),
            })
            .to_string(),
        );
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
