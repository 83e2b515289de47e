use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use harvestx_core::{CropListing, InvestmentRequest, MarketLedger};
use harvestx_logging::{harvest_info, harvest_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audit::audit;

/// Seed data compiled into the binary.
pub const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
}

/// Listings and requests loaded once at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub listings: Vec<CropListing>,
    #[serde(default)]
    pub requests: Vec<InvestmentRequest>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        ensure_unique("listing", catalog.listings.iter().map(|l| l.id.as_str()))?;
        ensure_unique("request", catalog.requests.iter().map(|r| r.id.as_str()))?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_ledger(self) -> MarketLedger {
        MarketLedger::from_seed(self.listings, self.requests)
    }
}

/// Loads the catalog from `path`, or the embedded seed when `None`.
///
/// Audit findings are logged but never reject the catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::embedded()?,
    };

    for issue in audit(&catalog) {
        harvest_warn!("Catalog issue: {}", issue);
    }
    harvest_info!(
        "Loaded catalog from {}: {} listings, {} requests",
        path.map_or_else(|| "embedded seed".to_string(), |p| format!("{p:?}")),
        catalog.listings.len(),
        catalog.requests.len()
    );
    Ok(catalog)
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
