use std::fmt;
use std::str::FromStr;

use crate::{CropListing, ProductType, QualityGrade};

/// Dropdown value: either "all" or one exact enumerated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

/// Marketplace search inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub text: String,
    pub product_type: Selector<ProductType>,
    pub quality_grade: Selector<QualityGrade>,
}

impl ListingQuery {
    pub fn matches(&self, listing: &CropListing) -> bool {
        self.matches_lowered(&self.text.to_lowercase(), listing)
    }

    fn matches_lowered(&self, needle: &str, listing: &CropListing) -> bool {
        text_matches(needle, listing)
            && self.product_type.admits(&listing.product_type)
            && self.quality_grade.admits(&listing.quality_grade)
            && listing.is_active()
    }
}

/// Active listings matching the query, in input order.
pub fn filter_listings<'a>(listings: &'a [CropListing], query: &ListingQuery) -> Vec<&'a CropListing> {
    let needle = query.text.to_lowercase();
    listings
        .iter()
        .filter(|listing| query.matches_lowered(&needle, listing))
        .collect()
}

/// First `count` active listings, used for the dashboard highlights.
pub fn featured_listings(listings: &[CropListing], count: usize) -> Vec<&CropListing> {
    listings
        .iter()
        .filter(|listing| listing.is_active())
        .take(count)
        .collect()
}

// `needle` must already be lowercased.
fn text_matches(needle: &str, listing: &CropListing) -> bool {
    listing.product_name.to_lowercase().contains(needle)
        || listing.farmer_name.to_lowercase().contains(needle)
        || listing.location.to_lowercase().contains(needle)
}
