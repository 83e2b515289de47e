use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Enumerations whose wire form is the bare variant name.
macro_rules! wire_enum {
    ($name:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum!(
    ProductType,
    "product type",
    [Vegetables, Fruits, Grains, Legumes, Herbs, Nuts, Other]
);

wire_enum!(
    QualityGrade,
    "quality grade",
    [Premium, Grade1, Grade2, Standard, Organic, Certified]
);

wire_enum!(
    ListingStatus,
    "listing status",
    [Active, Completed, Cancelled, Expired]
);

wire_enum!(
    RequestStatus,
    "request status",
    [Pending, Accepted, Rejected, Cancelled, Expired]
);

wire_enum!(TransactionStatus, "transaction status", [Confirmed, Completed]);

/// A farmer's published offer of a crop quantity at a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropListing {
    pub id: String,
    pub farmer_name: String,
    pub farmer_principal: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quality_grade: QualityGrade,
    pub description: String,
    pub total_quantity: u64,
    pub available_quantity: u64,
    pub price_per_kg: f64,
    pub minimum_investment: u64,
    pub location: String,
    pub harvest_date: NaiveDate,
    pub status: ListingStatus,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CropListing {
    /// Quantity already taken by accepted requests.
    ///
    /// Saturates at zero when the seed data breaks the
    /// `available <= total` invariant.
    pub fn consumed_quantity(&self) -> u64 {
        self.total_quantity.saturating_sub(self.available_quantity)
    }

    pub fn is_fully_available(&self) -> bool {
        self.available_quantity == self.total_quantity
    }

    pub fn quantity_invariant_holds(&self) -> bool {
        self.available_quantity <= self.total_quantity
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

/// An investor's proposal to buy part of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRequest {
    pub id: String,
    pub offer_id: String,
    pub investor_name: String,
    pub investor_principal: String,
    pub requested_quantity: u64,
    pub offered_price_per_kg: f64,
    pub total_offered: f64,
    pub message: String,
    pub status: RequestStatus,
    pub created_at: NaiveDate,
    pub expires_at: NaiveDate,
}

/// Tolerance when comparing the stored total against quantity × price.
const TOTAL_EPSILON: f64 = 0.005;

impl InvestmentRequest {
    pub fn computed_total(&self) -> f64 {
        self.requested_quantity as f64 * self.offered_price_per_kg
    }

    /// `total_offered` is stored redundantly; this checks it still agrees.
    pub fn total_is_consistent(&self) -> bool {
        (self.total_offered - self.computed_total()).abs() < TOTAL_EPSILON
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.expires_at
    }
}

/// Settlement record written when a farmer accepts a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub offer_id: String,
    pub request_id: String,
    pub farmer_principal: String,
    pub investor_principal: String,
    pub quantity: u64,
    pub price_per_kg: f64,
    pub total_amount: f64,
    pub status: TransactionStatus,
    pub created_at: NaiveDate,
}
