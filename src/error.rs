use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by the load/fill/save pipeline.
///
/// This is a single error enum shared across loading, filling, and saving. Every failure
/// propagates directly to the caller; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Underlying I/O error (e.g. input file missing or unreadable, destination unwritable).
    #[error("file access error: {0}")]
    FileAccess(#[from] std::io::Error),

    /// Malformed delimited content (e.g. rows with inconsistent field counts).
    #[error("parse error: {0}")]
    Parse(#[source] csv::Error),
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        // I/O failures surfaced through the csv crate (missing input file, unwritable
        // destination) are file-access errors, not parse errors.
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => Self::FileAccess(io),
                _ => unreachable!("is_io_error guarantees an Io kind"),
            }
        } else {
            Self::Parse(err)
        }
    }
}
