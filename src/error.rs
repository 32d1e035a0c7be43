use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no samples")]
    NoSamples,

    #[error("malformed sample #{index}: threads = {thread_count}, time = {elapsed_ms} ms")]
    MalformedSample {
        index: usize,
        thread_count: u32,
        elapsed_ms: f64,
    },

    #[error(
        "samples must be sorted by ascending thread count \
         (sample #{index}: {current} threads after {previous})"
    )]
    Unsorted {
        index: usize,
        previous: u32,
        current: u32,
    },

    #[error(
        "unknown dataset '{0}' (expected one of: {names})",
        names = crate::perf_data::DATASET_NAMES.join(", ")
    )]
    UnknownDataset(String),

    #[error("unsupported output format for {0} (only .svg is written)")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("failed to plot: {0}")]
    Plot(String),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(err.to_string())
    }
}
