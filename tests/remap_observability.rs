use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::Workbook;
use sheet_remap::observability::{FileObserver, RemapContext, RemapObserver, RemapStats, Severity};
use sheet_remap::{remap_from_path, remap_workbook, ColumnResolutionWarning, RemapError, RemapOptions};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<RemapStats>>,
    warnings: Mutex<Vec<ColumnResolutionWarning>>,
    failures: Mutex<Vec<Severity>>,
    alerts: Mutex<Vec<Severity>>,
}

impl RemapObserver for RecordingObserver {
    fn on_success(&self, _ctx: &RemapContext, stats: RemapStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_warning(&self, _ctx: &RemapContext, warning: &ColumnResolutionWarning) {
        self.warnings.lock().unwrap().push(warning.clone());
    }

    fn on_failure(&self, _ctx: &RemapContext, severity: Severity, _error: &RemapError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &RemapContext, severity: Severity, _error: &RemapError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn fixture_with_literal_directive() -> Vec<u8> {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Name").unwrap();
    ws.write_string(1, 0, "name").unwrap();
    ws.write_string(1, 1, "COD").unwrap();
    ws.write_string(2, 0, "Consignee").unwrap();
    ws.write_string(2, 1, "Mode").unwrap();
    ws.write_string(3, 0, "Asha").unwrap();
    wb.save_to_buffer().unwrap()
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("sheet-remap-{name}-{nanos}"))
}

#[test]
fn observer_receives_warnings_then_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = RemapOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let outcome = remap_workbook(&fixture_with_literal_directive(), &opts).unwrap();

    let warnings = obs.warnings.lock().unwrap().clone();
    assert_eq!(warnings, outcome.warnings);
    assert_eq!(
        warnings,
        vec![ColumnResolutionWarning::UnmappedDirective {
            slot: 1,
            directive: "COD".to_string(),
        }]
    );
    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![RemapStats { rows: 1, columns: 2 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = RemapOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    // Missing file -> Io error -> Critical
    let _ = remap_from_path("does/not/exist.xlsx", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![Severity::Critical]);
    assert_eq!(alerts, vec![Severity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = RemapOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Severity::Critical,
        ..Default::default()
    };

    // Two rows only -> MalformedHeader -> Error severity (not Critical) -> no alert
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "A").unwrap();
    ws.write_string(1, 0, "a").unwrap();
    let bytes = wb.save_to_buffer().unwrap();

    let _ = remap_workbook(&bytes, &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![Severity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn file_observer_appends_json_lines() {
    let log = tmp_path("observer.log");
    let opts = RemapOptions {
        observer: Some(Arc::new(FileObserver::new(&log))),
        ..Default::default()
    };

    let _ = remap_workbook(&fixture_with_literal_directive(), &opts).unwrap();

    let contents = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    // One warning line, one success line.
    assert_eq!(lines.len(), 2);
    let warning: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(warning["event"], "warning");
    assert_eq!(warning["warning"]["kind"], "unmapped_directive");
    let ok: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(ok["event"], "ok");
    assert_eq!(ok["rows"], 1);

    let _ = std::fs::remove_file(&log);
}
