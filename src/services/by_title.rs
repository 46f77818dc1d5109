use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::error::{QueryError, QueryResult};
use crate::models::{AnnotatedRecord, Annotation};

/// Recommends up to `n` catalog items similar to `title`, using the
/// precomputed similarity matrix.
///
/// The query title is resolved case-insensitively and must match exactly;
/// an unknown title is a recoverable `TitleNotFound`, not a failure of the
/// store. The queried item itself is never part of the result.
///
/// Ordering is two-phase: all other rows are sorted by similarity score
/// descending (stable, so original row order breaks ties) and truncated to
/// `n`, then that window alone is re-sorted by (score, popularity). The
/// second pass only reorders within the window; it never changes which
/// items were selected. Missing popularity sorts lowest.
pub fn recommend_by_title(
    catalog: &Catalog,
    title: &str,
    n: usize,
) -> QueryResult<Vec<AnnotatedRecord>> {
    if title.trim().is_empty() {
        return Err(QueryError::InvalidInput(
            "title must not be empty".to_string(),
        ));
    }

    let idx = catalog
        .row_by_title(title)
        .ok_or_else(|| QueryError::TitleNotFound(title.to_string()))?;

    let scores = catalog
        .similarity_row(idx)
        .ok_or_else(|| QueryError::Corrupt(format!("no similarity row for index {}", idx)))?;
    if scores.len() != catalog.row_count() {
        return Err(QueryError::Corrupt(format!(
            "similarity row {} has {} columns for a {}-row catalog",
            idx,
            scores.len(),
            catalog.row_count()
        )));
    }

    // Phase 1: every candidate but the queried row, best score first.
    let mut candidates: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != idx)
        .map(|(k, &score)| (k, score))
        .collect();
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    candidates.truncate(n);

    // Phase 2: within the selected window, popularity breaks score ties.
    let mut ranked = Vec::with_capacity(candidates.len());
    for (k, score) in candidates {
        let record = catalog
            .display(k)
            .ok_or_else(|| QueryError::Corrupt(format!("no display row for index {}", k)))?;
        ranked.push((score, record.popularity, record.clone()));
    }
    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                let pa = a.1.unwrap_or(f64::NEG_INFINITY);
                let pb = b.1.unwrap_or(f64::NEG_INFINITY);
                pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
            })
    });

    let results: Vec<AnnotatedRecord> = ranked
        .into_iter()
        .map(|(score, _, record)| AnnotatedRecord {
            record,
            annotation: Annotation::SimilarityScore(score),
        })
        .collect();

    tracing::debug!(
        title = %title,
        row = idx,
        results = results.len(),
        "Ranked recommendations by title similarity"
    );

    Ok(results)
}
