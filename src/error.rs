use std::path::PathBuf;

/// Fatal errors raised while loading the catalog artifacts at startup.
///
/// None of these are recoverable: the process cannot serve queries without
/// a consistent catalog, so the host is expected to log the error and exit.
#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reference table has {reference} rows but display table has {display}")]
    RowCountMismatch { reference: usize, display: usize },

    #[error("similarity matrix has {found} rows, expected {expected}")]
    MatrixDimension { expected: usize, found: usize },

    #[error("similarity matrix row {row} has {found} columns, expected {expected}")]
    MatrixRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("display row {row} has negative popularity {value}")]
    InvalidPopularity { row: usize, value: f64 },
}

/// Recoverable errors from the query functions.
///
/// These are returned as values so the presentation layer can render a
/// degraded state (error banner, empty grid) without crashing. Empty
/// results are not errors on either query path.
#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    /// The requested title has no row in the catalog. The message carries
    /// the caller's string verbatim so it can be surfaced to the user.
    #[error("'{0}' was not found in the catalog")]
    TitleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog failed an internal consistency check mid-query (short
    /// similarity row, display index out of range). Should be impossible
    /// after load-time validation; surfaced instead of panicking.
    #[error("Catalog inconsistency: {0}")]
    Corrupt(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
