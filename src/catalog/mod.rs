pub mod artifacts;
pub mod store;

pub use store::{Catalog, CatalogSummary};
