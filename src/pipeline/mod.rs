//! End-to-end pipeline entrypoint.
//!
//! Most callers should use [`clean_csv_file`], which:
//!
//! - loads the input CSV into an in-memory [`crate::types::Table`]
//! - fills every missing cell with zero
//! - saves the table to the output path
//! - optionally reports success/failure/alerts to a [`PipelineObserver`]
//!
//! The individual stages are also available under [`crate::ingestion`],
//! [`crate::processing`], and [`crate::export`].

pub mod observability;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PipelineError, PipelineResult};
use crate::export::csv::save_csv_to_path;
use crate::ingestion::csv::load_csv_from_path;
use crate::processing::fill::fill_missing;

pub use observability::{
    CompositeObserver, FileObserver, PipelineContext, PipelineObserver, PipelineSeverity,
    PipelineStats, StdErrObserver,
};

/// Stages of the cleaning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Read the input CSV into a table.
    Load,
    /// Replace missing cells with zero.
    Fill,
    /// Write the table to the output CSV.
    Save,
}

/// Options controlling pipeline behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct PipelineOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PipelineSeverity,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: PipelineSeverity::Critical,
        }
    }
}

/// Run the full cleaning pipeline: load `input`, fill missing cells with zero, save the
/// result to `output`.
///
/// On success, returns [`PipelineStats`] describing the table and how many cells were
/// filled. The output file is created or overwritten.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the stats
/// - `on_failure` on failure, with the failed stage and a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ## Clean a file
///
/// ```no_run
/// use csv_data_cleaning::pipeline::{clean_csv_file, PipelineOptions};
///
/// # fn main() -> Result<(), csv_data_cleaning::PipelineError> {
/// let stats = clean_csv_file("data.csv", "cleaned.csv", &PipelineOptions::default())?;
/// println!("rows={} cells_filled={}", stats.rows, stats.cells_filled);
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use csv_data_cleaning::pipeline::{
///     clean_csv_file, PipelineOptions, PipelineSeverity, StdErrObserver,
/// };
///
/// # fn main() -> Result<(), csv_data_cleaning::PipelineError> {
/// let opts = PipelineOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: PipelineSeverity::Critical,
/// };
///
/// // A missing input file is Critical and will trigger `on_alert` at this threshold.
/// let _err = clean_csv_file("does_not_exist.csv", "cleaned.csv", &opts).unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn clean_csv_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &PipelineOptions,
) -> PipelineResult<PipelineStats> {
    let ctx = PipelineContext {
        input: input.as_ref().to_path_buf(),
        output: output.as_ref().to_path_buf(),
    };

    let result = run_stages(&ctx);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(stats) => obs.on_success(&ctx, *stats),
            Err((stage, e)) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, *stage, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, *stage, sev, e);
                }
            }
        }
    }

    result.map_err(|(_, e)| e)
}

fn run_stages(ctx: &PipelineContext) -> Result<PipelineStats, (PipelineStage, PipelineError)> {
    let mut table = load_csv_from_path(&ctx.input).map_err(|e| (PipelineStage::Load, e))?;
    // Fill is infallible; it only rewrites cells in place.
    let cells_filled = fill_missing(&mut table);
    save_csv_to_path(&table, &ctx.output).map_err(|e| (PipelineStage::Save, e))?;

    Ok(PipelineStats {
        rows: table.row_count(),
        columns: table.column_count(),
        cells_filled,
    })
}

fn severity_for_error(e: &PipelineError) -> PipelineSeverity {
    match e {
        PipelineError::FileAccess(_) => PipelineSeverity::Critical,
        PipelineError::Parse(_) => PipelineSeverity::Error,
    }
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to enqueue cleaning work in a job system.
#[derive(Clone)]
pub struct CleanRequest {
    /// Path to the input CSV file.
    pub input: PathBuf,
    /// Path the cleaned CSV is written to.
    pub output: PathBuf,
    /// Options controlling the run.
    pub options: PipelineOptions,
}

impl fmt::Debug for CleanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanRequest")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("options", &self.options)
            .finish()
    }
}

impl CleanRequest {
    /// Execute the request by calling [`clean_csv_file`].
    pub fn run(&self) -> PipelineResult<PipelineStats> {
        clean_csv_file(&self.input, &self.output, &self.options)
    }
}
