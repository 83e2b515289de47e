use std::collections::HashSet;
use std::fmt;

use crate::Catalog;

/// Non-fatal inconsistency found in seed data.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    AvailableExceedsTotal {
        listing_id: String,
        available: u64,
        total: u64,
    },
    InconsistentTotal {
        request_id: String,
        stored: f64,
        computed: f64,
    },
    UnknownOffer {
        request_id: String,
        offer_id: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::AvailableExceedsTotal {
                listing_id,
                available,
                total,
            } => write!(
                f,
                "listing {listing_id} has {available} available of {total} total"
            ),
            CatalogIssue::InconsistentTotal {
                request_id,
                stored,
                computed,
            } => write!(
                f,
                "request {request_id} stores total {stored:.2} but quantity x price is {computed:.2}"
            ),
            CatalogIssue::UnknownOffer {
                request_id,
                offer_id,
            } => write!(f, "request {request_id} references unknown listing {offer_id}"),
        }
    }
}

/// Checks the invariants the seed format cannot express.
pub fn audit(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for listing in &catalog.listings {
        if !listing.quantity_invariant_holds() {
            issues.push(CatalogIssue::AvailableExceedsTotal {
                listing_id: listing.id.clone(),
                available: listing.available_quantity,
                total: listing.total_quantity,
            });
        }
    }

    let listing_ids: HashSet<&str> = catalog.listings.iter().map(|l| l.id.as_str()).collect();
    for request in &catalog.requests {
        if !request.total_is_consistent() {
            issues.push(CatalogIssue::InconsistentTotal {
                request_id: request.id.clone(),
                stored: request.total_offered,
                computed: request.computed_total(),
            });
        }
        if !listing_ids.contains(request.offer_id.as_str()) {
            issues.push(CatalogIssue::UnknownOffer {
                request_id: request.id.clone(),
                offer_id: request.offer_id.clone(),
            });
        }
    }

    issues
}
