use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::artifacts;
use crate::config::Config;
use crate::error::StartupError;
use crate::models::{DisplayRecord, ReferenceRecord};

/// Immutable catalog snapshot: the reference table, the display table, the
/// precomputed pairwise similarity matrix, and a lowercase-title lookup
/// index, all positionally aligned by row.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across threads (e.g. behind an `Arc`) without locking. Queries derive
/// any per-request data into their own locals instead of writing it back
/// here.
#[derive(Debug, Clone)]
pub struct Catalog {
    reference: Vec<ReferenceRecord>,
    display: Vec<DisplayRecord>,
    similarity: Vec<Vec<f64>>,
    /// lowercase title → first row bearing it
    title_index: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

/// Serializable diagnostics snapshot of a loaded catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub rows: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Loads and validates the catalog from the three artifacts named by
    /// `config`. Any failure here is fatal by policy: the host cannot serve
    /// queries without a consistent catalog.
    pub fn load(config: &Config) -> Result<Self, StartupError> {
        let reference = artifacts::read_reference(&config.reference_path())?;
        let display = artifacts::read_display(&config.display_path())?;
        let similarity = artifacts::read_similarity(&config.similarity_path())?;

        let catalog = Self::from_parts(
            reference.into_iter().map(Into::into).collect(),
            display.into_iter().map(Into::into).collect(),
            similarity,
        )?;

        tracing::info!(
            rows = catalog.row_count(),
            data_dir = %config.data_dir.display(),
            loaded_at = %catalog.loaded_at,
            "Loaded catalog artifacts"
        );

        Ok(catalog)
    }

    /// Validating constructor over in-memory tables. Checks that the three
    /// structures are positionally consistent and builds the title index.
    pub fn from_parts(
        reference: Vec<ReferenceRecord>,
        display: Vec<DisplayRecord>,
        similarity: Vec<Vec<f64>>,
    ) -> Result<Self, StartupError> {
        if reference.len() != display.len() {
            return Err(StartupError::RowCountMismatch {
                reference: reference.len(),
                display: display.len(),
            });
        }

        if similarity.len() != reference.len() {
            return Err(StartupError::MatrixDimension {
                expected: reference.len(),
                found: similarity.len(),
            });
        }

        for (row, scores) in similarity.iter().enumerate() {
            if scores.len() != reference.len() {
                return Err(StartupError::MatrixRow {
                    row,
                    expected: reference.len(),
                    found: scores.len(),
                });
            }
        }

        for (row, record) in display.iter().enumerate() {
            if let Some(popularity) = record.popularity {
                if popularity < 0.0 {
                    return Err(StartupError::InvalidPopularity {
                        row,
                        value: popularity,
                    });
                }
            }
        }

        // First occurrence wins when titles collide after lowercasing,
        // matching the original lookup behavior.
        let mut title_index = HashMap::with_capacity(reference.len());
        for (i, record) in reference.iter().enumerate() {
            title_index.entry(record.title.to_lowercase()).or_insert(i);
        }

        Ok(Self {
            reference,
            display,
            similarity,
            title_index,
            loaded_at: Utc::now(),
        })
    }

    /// Case-insensitive exact title lookup via the precomputed index.
    pub fn row_by_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    pub fn row_count(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    pub fn reference(&self, i: usize) -> Option<&ReferenceRecord> {
        self.reference.get(i)
    }

    pub fn display(&self, i: usize) -> Option<&DisplayRecord> {
        self.display.get(i)
    }

    /// Similarity scores from item `i` to every item, including `i` itself.
    pub fn similarity_row(&self, i: usize) -> Option<&[f64]> {
        self.similarity.get(i).map(Vec::as_slice)
    }

    /// Aligned view of the full reference table, for row scans.
    pub fn reference_rows(&self) -> &[ReferenceRecord] {
        &self.reference
    }

    /// Aligned view of the full display table, for row scans.
    pub fn display_rows(&self) -> &[DisplayRecord] {
        &self.display
    }

    /// Display-table titles in row order, first occurrence only. Feeds the
    /// front end's title selector.
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut titles = Vec::with_capacity(self.display.len());
        for record in &self.display {
            if seen.insert(record.title.as_str()) {
                titles.push(record.title.as_str());
            }
        }
        titles
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            rows: self.row_count(),
            loaded_at: self.loaded_at,
        }
    }
}
