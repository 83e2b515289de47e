#![allow(dead_code)]

use std::sync::Once;

use chrono::NaiveDate;
use harvestx_core::{
    CropListing, InvestmentRequest, ListingStatus, ProductType, QualityGrade, RequestStatus,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(harvestx_logging::initialize_for_tests);
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn listing(
    id: &str,
    farmer_name: &str,
    product_name: &str,
    product_type: ProductType,
    quality_grade: QualityGrade,
    total_quantity: u64,
    available_quantity: u64,
    price_per_kg: f64,
    minimum_investment: u64,
    location: &str,
) -> CropListing {
    CropListing {
        id: id.to_string(),
        farmer_name: farmer_name.to_string(),
        farmer_principal: format!("principal-{id}"),
        product_name: product_name.to_string(),
        product_type,
        quality_grade,
        description: format!("{product_name} from {location}"),
        total_quantity,
        available_quantity,
        price_per_kg,
        minimum_investment,
        location: location.to_string(),
        harvest_date: date("2024-09-15"),
        status: ListingStatus::Active,
        created_at: date("2024-08-20"),
        image_url: None,
    }
}

pub fn sample_listings() -> Vec<CropListing> {
    vec![
        listing("1", "Sarah Johnson", "Organic Tomatoes", ProductType::Vegetables, QualityGrade::Organic, 500, 350, 4.50, 100, "California, USA"),
        listing("2", "Miguel Rodriguez", "Avocados", ProductType::Fruits, QualityGrade::Premium, 800, 800, 6.25, 250, "Mexico"),
        listing("3", "David Chen", "Quinoa", ProductType::Grains, QualityGrade::Grade1, 300, 180, 8.75, 150, "Peru"),
        listing("4", "Emma Wilson", "Soybeans", ProductType::Legumes, QualityGrade::Standard, 1200, 950, 2.30, 200, "Iowa, USA"),
        listing("5", "Jean-Pierre Dubois", "Lavender", ProductType::Herbs, QualityGrade::Premium, 150, 75, 12.50, 80, "Provence, France"),
        listing("6", "Kumar Patel", "Basmati Rice", ProductType::Grains, QualityGrade::Premium, 600, 420, 3.80, 120, "Punjab, India"),
    ]
}

/// Sample listings plus two non-active ones that must never surface.
pub fn listings_with_inactive() -> Vec<CropListing> {
    let mut listings = sample_listings();
    let mut sold_out = listing("7", "Ana Souza", "Cashews", ProductType::Nuts, QualityGrade::Certified, 400, 0, 9.10, 100, "Ceara, Brazil");
    sold_out.status = ListingStatus::Completed;
    let mut withdrawn = listing("8", "Sarah Johnson", "Cherry Tomatoes", ProductType::Vegetables, QualityGrade::Organic, 90, 90, 5.00, 50, "California, USA");
    withdrawn.status = ListingStatus::Cancelled;
    listings.insert(2, sold_out);
    listings.push(withdrawn);
    listings
}

pub fn request(
    id: &str,
    offer_id: &str,
    requested_quantity: u64,
    offered_price_per_kg: f64,
    status: RequestStatus,
) -> InvestmentRequest {
    InvestmentRequest {
        id: id.to_string(),
        offer_id: offer_id.to_string(),
        investor_name: format!("Investor {id}"),
        investor_principal: format!("investor-{id}"),
        requested_quantity,
        offered_price_per_kg,
        total_offered: requested_quantity as f64 * offered_price_per_kg,
        message: String::new(),
        status,
        created_at: date("2024-08-20"),
        expires_at: date("2024-08-27"),
    }
}

pub fn sample_requests() -> Vec<InvestmentRequest> {
    vec![
        request("req1", "1", 100, 4.50, RequestStatus::Pending),
        request("req2", "2", 200, 6.00, RequestStatus::Accepted),
        request("req3", "3", 50, 8.50, RequestStatus::Pending),
    ]
}
