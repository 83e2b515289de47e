//! HarvestX store: seed catalog loading and consistency audit.
mod audit;
mod catalog;

pub use audit::{audit, CatalogIssue};
pub use catalog::{load_catalog, Catalog, CatalogError, EMBEDDED_SEED};
