//! Data-contract helpers for the presentation layer.
//!
//! The grid renderer itself lives outside this crate; these are the pure
//! formatting and grouping rules it consumes, so any front end renders the
//! same numbers, placeholders and row shape.

use crate::models::{AnnotatedRecord, DisplayRecord};

/// Genre tags the front end offers for selection.
pub const GENRE_OPTIONS: [&str; 18] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Horror",
    "Mahou Shoujo",
    "Mecha",
    "Music",
    "Mystery",
    "Psychological",
    "Romance",
    "Sci-Fi",
    "Slice Of Life",
    "Sports",
    "Supernatural",
    "Thriller",
];

/// Caller-side cap on how many genres a single query may select.
pub const MAX_SELECTED_GENRES: usize = 5;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 5;

/// Formats a popularity value for display: `-` when absent, thousands
/// separators once the integer part reaches 1000, plain integer below.
pub fn format_popularity(popularity: Option<f64>) -> String {
    match popularity {
        None => "-".to_string(),
        Some(value) => {
            let value = value as i64;
            if value >= 1000 {
                with_thousands_separators(value)
            } else {
                value.to_string()
            }
        }
    }
}

fn with_thousands_separators(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The cover URL when it is present and renderable; `None` means the front
/// end shows its placeholder. Acceptance rule is an http(s)-prefix check,
/// matching what the grid has always rendered.
pub fn renderable_cover(record: &DisplayRecord) -> Option<&str> {
    record
        .cover_image
        .as_deref()
        .filter(|url| url.starts_with("http"))
}

/// Groups results into grid rows of [`GRID_COLUMNS`], last row possibly
/// shorter.
pub fn grid_rows(records: &[AnnotatedRecord]) -> impl Iterator<Item = &[AnnotatedRecord]> {
    records.chunks(GRID_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Annotation;

    fn annotated(title: &str) -> AnnotatedRecord {
        AnnotatedRecord {
            record: DisplayRecord {
                title: title.to_string(),
                cover_image: None,
                popularity: None,
                genres: String::new(),
            },
            annotation: Annotation::MatchingGenres(1),
        }
    }

    fn with_cover(cover: Option<&str>) -> DisplayRecord {
        DisplayRecord {
            title: "X".to_string(),
            cover_image: cover.map(str::to_string),
            popularity: None,
            genres: String::new(),
        }
    }

    #[test]
    fn test_format_popularity_below_threshold_is_plain() {
        assert_eq!(format_popularity(Some(0.0)), "0");
        assert_eq!(format_popularity(Some(999.0)), "999");
    }

    #[test]
    fn test_format_popularity_separates_thousands() {
        assert_eq!(format_popularity(Some(1000.0)), "1,000");
        assert_eq!(format_popularity(Some(184023.0)), "184,023");
        assert_eq!(format_popularity(Some(1234567.0)), "1,234,567");
    }

    #[test]
    fn test_format_popularity_truncates_fraction() {
        assert_eq!(format_popularity(Some(1500.9)), "1,500");
    }

    #[test]
    fn test_format_popularity_missing_is_dash() {
        assert_eq!(format_popularity(None), "-");
    }

    #[test]
    fn test_renderable_cover_requires_http_prefix() {
        assert_eq!(
            renderable_cover(&with_cover(Some("https://cdn.example.com/a.png"))),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            renderable_cover(&with_cover(Some("http://cdn.example.com/a.png"))),
            Some("http://cdn.example.com/a.png")
        );
        assert_eq!(renderable_cover(&with_cover(Some("not a url"))), None);
        assert_eq!(renderable_cover(&with_cover(None)), None);
    }

    #[test]
    fn test_grid_rows_chunking() {
        let empty: Vec<AnnotatedRecord> = Vec::new();
        assert_eq!(grid_rows(&empty).count(), 0);

        let exact: Vec<AnnotatedRecord> = (0..10).map(|i| annotated(&i.to_string())).collect();
        let rows: Vec<_> = grid_rows(&exact).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));

        let remainder: Vec<AnnotatedRecord> = (0..7).map(|i| annotated(&i.to_string())).collect();
        let rows: Vec<_> = grid_rows(&remainder).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_genre_options_fit_selection_cap() {
        assert!(MAX_SELECTED_GENRES <= GENRE_OPTIONS.len());
    }
}
