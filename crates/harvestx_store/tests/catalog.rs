use std::fs;
use std::sync::Once;

use harvestx_core::{filter_listings, ListingQuery, ListingStatus, RequestStatus};
use harvestx_store::{audit, load_catalog, Catalog, CatalogError, CatalogIssue};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(harvestx_logging::initialize_for_tests);
}

#[test]
fn embedded_seed_matches_marketplace_mock_data() {
    init_logging();
    let catalog = Catalog::embedded().unwrap();

    assert_eq!(catalog.listings.len(), 6);
    assert_eq!(catalog.requests.len(), 3);
    assert!(catalog
        .listings
        .iter()
        .all(|l| l.status == ListingStatus::Active));
    let avocados = &catalog.listings[1];
    assert_eq!(avocados.product_name, "Avocados");
    assert!(avocados.is_fully_available());
    assert_eq!(catalog.requests[1].status, RequestStatus::Accepted);
    assert_eq!(catalog.requests[1].total_offered, 1200.0);
    assert!(audit(&catalog).is_empty());
}

#[test]
fn embedded_seed_filters_like_the_marketplace() {
    init_logging();
    let catalog = Catalog::embedded().unwrap();
    let query = ListingQuery {
        text: "india".to_string(),
        ..ListingQuery::default()
    };
    let hits = filter_listings(&catalog.listings, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].product_name, "Basmati Rice");
}

#[test]
fn loads_catalog_file_from_disk() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.json");
    let mut catalog = Catalog::embedded().unwrap();
    catalog.listings.truncate(2);
    catalog.requests.clear();
    fs::write(&path, catalog.to_json_pretty().unwrap()).unwrap();

    let loaded = load_catalog(Some(path.as_path())).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn requests_section_is_optional() {
    let catalog = Catalog::from_json(r#"{ "listings": [] }"#).unwrap();
    assert!(catalog.listings.is_empty());
    assert!(catalog.requests.is_empty());
}

#[test]
fn missing_file_reports_path() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");
    match load_catalog(Some(path.as_path())) {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_json("{ listings: "),
        Err(CatalogError::Parse(_))
    ));
    let unknown_grade = Catalog::embedded()
        .unwrap()
        .to_json_pretty()
        .unwrap()
        .replacen("\"Organic\"", "\"Bio\"", 1);
    assert!(matches!(
        Catalog::from_json(&unknown_grade),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut catalog = Catalog::embedded().unwrap();
    catalog.listings[3].id = "1".to_string();
    let text = catalog.to_json_pretty().unwrap();
    match Catalog::from_json(&text) {
        Err(CatalogError::DuplicateId { kind, id }) => {
            assert_eq!(kind, "listing");
            assert_eq!(id, "1");
        }
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn audit_flags_inconsistent_seed_records() {
    let mut catalog = Catalog::embedded().unwrap();
    catalog.listings[0].available_quantity = 600;
    catalog.requests[0].total_offered = 500.0;
    catalog.requests[2].offer_id = "99".to_string();

    let issues = audit(&catalog);
    assert_eq!(
        issues,
        vec![
            CatalogIssue::AvailableExceedsTotal {
                listing_id: "1".to_string(),
                available: 600,
                total: 500,
            },
            CatalogIssue::InconsistentTotal {
                request_id: "req1".to_string(),
                stored: 500.0,
                computed: 450.0,
            },
            CatalogIssue::UnknownOffer {
                request_id: "req3".to_string(),
                offer_id: "99".to_string(),
            },
        ]
    );
    assert_eq!(
        issues[0].to_string(),
        "listing 1 has 600 available of 500 total"
    );
}

#[test]
fn catalog_seeds_a_ledger() {
    init_logging();
    let ledger = Catalog::embedded().unwrap().into_ledger();
    let stats = ledger.platform_stats();
    assert_eq!(stats.total_offers, 6);
    assert_eq!(stats.active_offers, 6);
    assert_eq!(stats.total_requests, 3);
    assert_eq!(stats.total_transactions, 0);
}
