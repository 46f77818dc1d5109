use serde::{Deserialize, Serialize};

/// Catalog row used for matching and lookup: the title plus its parsed
/// genre tags. Row position in the reference table is the join key into
/// the similarity matrix and the display table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRecord {
    pub title: String,
    /// Genre tags in artifact order. Parsed once at load time from the
    /// comma-separated artifact field; empty when the field was missing.
    pub genres: Vec<String>,
}

/// Catalog row used for rendering: cover art, popularity and the raw
/// genre string exactly as the front end displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRecord {
    pub title: String,
    pub cover_image: Option<String>,
    pub popularity: Option<f64>,
    pub genres: String,
}

/// The ranking-specific annotation attached to a returned display row.
///
/// Serializes as a single key next to the display fields, so consumers
/// see `"similarity_score": 0.93` or `"matching_genres": 2` inline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// Precomputed similarity to the query title, straight from the matrix.
    SimilarityScore(f64),
    /// Number of selected genre tags this row matched.
    MatchingGenres(usize),
}

/// A display row annotated with how it ranked, in final presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: DisplayRecord,
    #[serde(flatten)]
    pub annotation: Annotation,
}

// ============================================================================
// Raw artifact rows (upstream pipeline export)
// ============================================================================

/// Reference-table row as exported by the upstream pandas pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genres", default)]
    pub genres: Option<String>,
}

/// Display-table row as exported by the upstream pandas pipeline. Numeric
/// NaNs come through as nulls, hence the optional fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Cover Image", default)]
    pub cover_image: Option<String>,
    #[serde(rename = "Popularity", default)]
    pub popularity: Option<f64>,
    #[serde(rename = "Genres", default)]
    pub genres: Option<String>,
}

/// Splits a comma-separated genre field into trimmed tags, dropping empty
/// fragments (so a missing or blank field parses to no tags at all).
fn parse_genres(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<ReferenceRow> for ReferenceRecord {
    fn from(row: ReferenceRow) -> Self {
        let genres = parse_genres(row.genres.as_deref());
        ReferenceRecord {
            title: row.title,
            genres,
        }
    }
}

impl From<DisplayRow> for DisplayRecord {
    fn from(row: DisplayRow) -> Self {
        DisplayRecord {
            title: row.title,
            cover_image: row.cover_image,
            popularity: row.popularity,
            genres: row.genres.unwrap_or_default(),
        }
    }
}
