pub mod by_genres;
pub mod by_title;

pub use by_genres::recommend_by_genres;
pub use by_title::recommend_by_title;

/// Default result count for both query paths.
pub const DEFAULT_RECOMMENDATIONS: usize = 10;
