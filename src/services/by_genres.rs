use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{AnnotatedRecord, Annotation};

/// Recommends up to `n` catalog items matching the selected genre tags.
///
/// Each row is scored by how many of the selected tags appear in its parsed
/// genre list (set intersection, case-sensitive exact match). Rows with no
/// overlap are dropped; survivors sort by (match count, popularity), both
/// descending, missing popularity lowest. An empty selection or a selection
/// nothing matches yields an empty result, which is a valid outcome rather
/// than an error, so this path has no error channel at all.
///
/// Match counts live in locals owned by this call; nothing is written back
/// to the catalog, so concurrent callers sharing it are safe.
pub fn recommend_by_genres(
    catalog: &Catalog,
    selected_genres: &[String],
    n: usize,
) -> Vec<AnnotatedRecord> {
    let selected: HashSet<&str> = selected_genres.iter().map(String::as_str).collect();
    if selected.is_empty() {
        return Vec::new();
    }

    // Score every row, keeping only those with at least one matching tag.
    let mut matched: Vec<(usize, usize)> = Vec::new();
    for (i, record) in catalog.reference_rows().iter().enumerate() {
        let tags: HashSet<&str> = record.genres.iter().map(String::as_str).collect();
        let count = tags.intersection(&selected).count();
        if count > 0 {
            matched.push((i, count));
        }
    }

    matched.sort_by(|a, b| {
        b.1.cmp(&a.1).then_with(|| {
            let pa = popularity_key(catalog, a.0);
            let pb = popularity_key(catalog, b.0);
            pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
        })
    });
    matched.truncate(n);

    let results: Vec<AnnotatedRecord> = matched
        .into_iter()
        .filter_map(|(i, count)| {
            catalog.display(i).map(|record| AnnotatedRecord {
                record: record.clone(),
                annotation: Annotation::MatchingGenres(count),
            })
        })
        .collect();

    tracing::debug!(
        selected = selected.len(),
        results = results.len(),
        "Ranked recommendations by genre match"
    );

    results
}

fn popularity_key(catalog: &Catalog, i: usize) -> f64 {
    catalog
        .display(i)
        .and_then(|record| record.popularity)
        .unwrap_or(f64::NEG_INFINITY)
}
