//! In-process manhwa recommendation library.
//!
//! Loads a read-only catalog (reference table, display table, precomputed
//! similarity matrix) once at startup, then answers two stateless queries
//! over it: recommendations by similarity to a chosen title, and
//! recommendations by selected genre tags. Results come back as display
//! rows annotated with their ranking score, in final presentation order.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod services;

pub use catalog::{Catalog, CatalogSummary};
pub use config::Config;
pub use error::{QueryError, QueryResult, StartupError};
pub use models::{AnnotatedRecord, Annotation, DisplayRecord, ReferenceRecord};
pub use services::{recommend_by_genres, recommend_by_title, DEFAULT_RECOMMENDATIONS};
