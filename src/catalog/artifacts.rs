use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::StartupError;
use crate::models::{DisplayRow, ReferenceRow};

/// Reads one JSON artifact into memory, keeping the offending path in the
/// error so startup failures name the file that broke.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StartupError> {
    let file = File::open(path).map_err(|source| StartupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| StartupError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the reference table artifact (matching/lookup columns).
pub fn read_reference(path: &Path) -> Result<Vec<ReferenceRow>, StartupError> {
    read_json(path)
}

/// Reads the display table artifact (rendering columns).
pub fn read_display(path: &Path) -> Result<Vec<DisplayRow>, StartupError> {
    read_json(path)
}

/// Reads the precomputed pairwise similarity matrix artifact.
pub fn read_similarity(path: &Path) -> Result<Vec<Vec<f64>>, StartupError> {
    read_json(path)
}
