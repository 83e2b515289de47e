use chrono::NaiveDate;

use crate::{
    CropListing, FormField, InvestmentRequest, ListingStatus, ProductType, QualityGrade,
    RequestStatus, RequestSummary, Selector, View,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub view: View,
    pub search_text: String,
    pub product_type: Selector<ProductType>,
    pub quality_grade: Selector<QualityGrade>,
    /// Marketplace results for the current query.
    pub listings: Vec<ListingCardView>,
    pub result_count: usize,
    pub active_listings: usize,
    /// Dashboard highlights.
    pub featured: Vec<ListingCardView>,
    pub form_fields: Vec<FormFieldView>,
    pub summary: RequestSummary,
    pub requests: Vec<RequestRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingCardView {
    pub id: String,
    pub product_name: String,
    pub farmer_name: String,
    pub location: String,
    pub product_type: ProductType,
    pub quality_grade: QualityGrade,
    pub status: ListingStatus,
    pub available_quantity: u64,
    pub total_quantity: u64,
    pub price_per_kg: f64,
    pub minimum_investment: u64,
    pub harvest_date: NaiveDate,
}

impl ListingCardView {
    pub(crate) fn from_listing(listing: &CropListing) -> Self {
        Self {
            id: listing.id.clone(),
            product_name: listing.product_name.clone(),
            farmer_name: listing.farmer_name.clone(),
            location: listing.location.clone(),
            product_type: listing.product_type,
            quality_grade: listing.quality_grade,
            status: listing.status,
            available_quantity: listing.available_quantity,
            total_quantity: listing.total_quantity,
            price_per_kg: listing.price_per_kg,
            minimum_investment: listing.minimum_investment,
            harvest_date: listing.harvest_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub field: FormField,
    pub value: String,
    /// Flagged by the last failed submission.
    pub missing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestRowView {
    pub id: String,
    pub offer_id: String,
    pub investor_name: String,
    pub requested_quantity: u64,
    pub offered_price_per_kg: f64,
    pub total_offered: f64,
    pub status: RequestStatus,
    pub expires_at: NaiveDate,
}

impl RequestRowView {
    pub(crate) fn from_request(request: &InvestmentRequest) -> Self {
        Self {
            id: request.id.clone(),
            offer_id: request.offer_id.clone(),
            investor_name: request.investor_name.clone(),
            requested_quantity: request.requested_quantity,
            offered_price_per_kg: request.offered_price_per_kg,
            total_offered: request.total_offered,
            status: request.status,
            expires_at: request.expires_at,
        }
    }
}
