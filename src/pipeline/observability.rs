use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PipelineError;

use super::PipelineStage;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Context about a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Path of the input CSV file.
    pub input: PathBuf,
    /// Path the cleaned CSV is written to.
    pub output: PathBuf,
}

/// Stats reported on a successful pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    /// Number of data rows in the table.
    pub rows: usize,
    /// Number of columns in the table.
    pub columns: usize,
    /// Number of missing cells replaced with zero.
    pub cells_filled: usize,
}

/// Observer interface for pipeline outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PipelineObserver: Send + Sync {
    /// Called when the pipeline succeeds.
    fn on_success(&self, _ctx: &PipelineContext, _stats: PipelineStats) {}

    /// Called when a pipeline stage fails.
    fn on_failure(
        &self,
        _ctx: &PipelineContext,
        _stage: PipelineStage,
        _severity: PipelineSeverity,
        _error: &PipelineError,
    ) {
    }

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        self.on_failure(ctx, stage, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
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

impl PipelineObserver for CompositeObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        for o in &self.observers {
            o.on_failure(ctx, stage, severity, error);
        }
    }

    fn on_alert(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        for o in &self.observers {
            o.on_alert(ctx, stage, severity, error);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        eprintln!(
            "[clean][ok] input={} output={} rows={} cells_filled={}",
            ctx.input.display(),
            ctx.output.display(),
            stats.rows,
            stats.cells_filled
        );
    }

    fn on_failure(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        eprintln!(
            "[clean][{:?}] stage={:?} input={} output={} err={}",
            severity,
            stage,
            ctx.input.display(),
            ctx.output.display(),
            error
        );
    }

    fn on_alert(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        eprintln!(
            "[ALERT][clean][{:?}] stage={:?} input={} output={} err={}",
            severity,
            stage,
            ctx.input.display(),
            ctx.output.display(),
            error
        );
    }
}

/// Appends pipeline events to a local log file.
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

impl PipelineObserver for FileObserver {
    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        self.append_line(&format!(
            "{} ok input={} output={} rows={} cells_filled={}",
            unix_ts(),
            ctx.input.display(),
            ctx.output.display(),
            stats.rows,
            stats.cells_filled
        ));
    }

    fn on_failure(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        self.append_line(&format!(
            "{} fail severity={:?} stage={:?} input={} output={} err={}",
            unix_ts(),
            severity,
            stage,
            ctx.input.display(),
            ctx.output.display(),
            error
        ));
    }

    fn on_alert(
        &self,
        ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        error: &PipelineError,
    ) {
        self.append_line(&format!(
            "{} ALERT severity={:?} stage={:?} input={} output={} err={}",
            unix_ts(),
            severity,
            stage,
            ctx.input.display(),
            ctx.output.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
