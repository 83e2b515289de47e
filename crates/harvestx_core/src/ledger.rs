//! In-memory marketplace ledger.
//!
//! Holds listings, investment requests and settled transactions, and enforces
//! the request lifecycle (`Pending -> Accepted | Rejected | Cancelled | Expired`)
//! together with the quantity reservation that keeps `available_quantity`
//! from ever going negative. Every operation takes the acting principal and
//! the current date explicitly so the ledger stays deterministic.

use chrono::{Days, NaiveDate};
use harvestx_logging::{harvest_debug, harvest_info};
use thiserror::Error;

use crate::{
    CropListing, InvestmentRequest, ListingStatus, PlatformStats, ProductType, QualityGrade,
    RequestStatus, Transaction, TransactionStatus,
};

/// Days a pending request stays open.
pub const REQUEST_TTL_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketError {
    #[error("offer {0} not found")]
    UnknownOffer(String),
    #[error("investment request {0} not found")]
    UnknownRequest(String),
    #[error("offer {offer_id} is {status}, not Active")]
    OfferNotActive {
        offer_id: String,
        status: ListingStatus,
    },
    #[error("access denied: not the owner of offer {0}")]
    NotOfferOwner(String),
    #[error("farmers cannot invest in their own offer {0}")]
    OwnOffer(String),
    #[error("access denied: not the investor of request {0}")]
    NotRequestOwner(String),
    #[error("request {request_id} already processed ({status})")]
    RequestNotPending {
        request_id: String,
        status: RequestStatus,
    },
    #[error("request {0} has expired")]
    RequestExpired(String),
    #[error("insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u64, available: u64 },
    #[error("offer of {offered:.2} is below the minimum investment of {minimum}")]
    BelowMinimumInvestment { offered: f64, minimum: u64 },
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
}

/// Listing fields supplied by a farmer.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOfferRequest {
    pub product_name: String,
    pub product_type: ProductType,
    pub quality_grade: QualityGrade,
    pub description: String,
    pub total_quantity: u64,
    pub price_per_kg: f64,
    pub minimum_investment: u64,
    pub location: String,
    pub harvest_date: NaiveDate,
}

/// Purchase proposal supplied by an investor.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInvestmentRequest {
    pub offer_id: String,
    pub requested_quantity: u64,
    pub offered_price_per_kg: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketLedger {
    listings: Vec<CropListing>,
    requests: Vec<InvestmentRequest>,
    transactions: Vec<Transaction>,
    next_seq: u64,
}

impl MarketLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-populated with catalog records.
    pub fn from_seed(listings: Vec<CropListing>, requests: Vec<InvestmentRequest>) -> Self {
        Self {
            listings,
            requests,
            transactions: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn create_offer(
        &mut self,
        farmer_name: &str,
        farmer_principal: &str,
        request: CreateOfferRequest,
        today: NaiveDate,
    ) -> Result<CropListing, MarketError> {
        if request.total_quantity == 0 {
            return Err(MarketError::ZeroQuantity);
        }
        validate_price(request.price_per_kg)?;

        let id = self.fresh_id("offer");
        let listing = CropListing {
            id,
            farmer_name: farmer_name.to_string(),
            farmer_principal: farmer_principal.to_string(),
            product_name: request.product_name,
            product_type: request.product_type,
            quality_grade: request.quality_grade,
            description: request.description,
            total_quantity: request.total_quantity,
            available_quantity: request.total_quantity,
            price_per_kg: request.price_per_kg,
            minimum_investment: request.minimum_investment,
            location: request.location,
            harvest_date: request.harvest_date,
            status: ListingStatus::Active,
            created_at: today,
            image_url: None,
        };
        harvest_info!(
            "Offer {} created by {} ({} kg of {})",
            listing.id,
            farmer_principal,
            listing.total_quantity,
            listing.product_name
        );
        self.listings.push(listing.clone());
        Ok(listing)
    }

    pub fn create_request(
        &mut self,
        investor_name: &str,
        investor_principal: &str,
        request: CreateInvestmentRequest,
        today: NaiveDate,
    ) -> Result<InvestmentRequest, MarketError> {
        if request.requested_quantity == 0 {
            return Err(MarketError::ZeroQuantity);
        }
        validate_price(request.offered_price_per_kg)?;

        let listing = self.offer(&request.offer_id)?;
        if listing.farmer_principal == investor_principal {
            return Err(MarketError::OwnOffer(request.offer_id));
        }
        ensure_active(listing)?;
        if request.requested_quantity > listing.available_quantity {
            return Err(MarketError::InsufficientQuantity {
                requested: request.requested_quantity,
                available: listing.available_quantity,
            });
        }
        let total_offered = request.requested_quantity as f64 * request.offered_price_per_kg;
        if total_offered < listing.minimum_investment as f64 {
            return Err(MarketError::BelowMinimumInvestment {
                offered: total_offered,
                minimum: listing.minimum_investment,
            });
        }

        let id = self.fresh_id("req");
        let expires_at = today
            .checked_add_days(Days::new(REQUEST_TTL_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let created = InvestmentRequest {
            id,
            offer_id: request.offer_id,
            investor_name: investor_name.to_string(),
            investor_principal: investor_principal.to_string(),
            requested_quantity: request.requested_quantity,
            offered_price_per_kg: request.offered_price_per_kg,
            total_offered,
            message: request.message,
            status: RequestStatus::Pending,
            created_at: today,
            expires_at,
        };
        harvest_info!(
            "Request {} on offer {} by {} ({} kg, total {:.2})",
            created.id,
            created.offer_id,
            investor_principal,
            created.requested_quantity,
            created.total_offered
        );
        self.requests.push(created.clone());
        Ok(created)
    }

    /// Farmer decision on a pending request.
    ///
    /// An overdue request is marked `Expired` before the error is returned.
    pub fn respond(
        &mut self,
        caller: &str,
        request_id: &str,
        accept: bool,
        today: NaiveDate,
    ) -> Result<InvestmentRequest, MarketError> {
        let request_idx = self.request_index(request_id)?;
        let offer_id = self.requests[request_idx].offer_id.clone();
        let listing_idx = self.listing_index(&offer_id)?;

        if self.listings[listing_idx].farmer_principal != caller {
            return Err(MarketError::NotOfferOwner(offer_id));
        }
        ensure_pending(&self.requests[request_idx])?;
        if self.requests[request_idx].is_overdue(today) {
            self.requests[request_idx].status = RequestStatus::Expired;
            harvest_info!("Request {} expired before a response", request_id);
            return Err(MarketError::RequestExpired(request_id.to_string()));
        }

        if !accept {
            self.requests[request_idx].status = RequestStatus::Rejected;
            harvest_info!("Request {} rejected", request_id);
            return Ok(self.requests[request_idx].clone());
        }

        ensure_active(&self.listings[listing_idx])?;
        let requested = self.requests[request_idx].requested_quantity;
        let available = self.listings[listing_idx].available_quantity;
        let remaining = available
            .checked_sub(requested)
            .ok_or(MarketError::InsufficientQuantity {
                requested,
                available,
            })?;

        let transaction_id = self.fresh_id("txn");
        let listing = &mut self.listings[listing_idx];
        listing.available_quantity = remaining;
        if remaining == 0 {
            listing.status = ListingStatus::Completed;
        }
        let request = &mut self.requests[request_idx];
        request.status = RequestStatus::Accepted;

        let transaction = Transaction {
            id: transaction_id,
            offer_id: listing.id.clone(),
            request_id: request.id.clone(),
            farmer_principal: listing.farmer_principal.clone(),
            investor_principal: request.investor_principal.clone(),
            quantity: request.requested_quantity,
            price_per_kg: request.offered_price_per_kg,
            total_amount: request.total_offered,
            status: TransactionStatus::Confirmed,
            created_at: today,
        };
        let accepted = request.clone();
        harvest_info!(
            "Request {} accepted; transaction {} for {} kg",
            request_id,
            transaction.id,
            transaction.quantity
        );
        self.transactions.push(transaction);
        if remaining == 0 {
            let dropped = self.cancel_pending_for(&offer_id);
            harvest_info!(
                "Offer {} sold out; {} pending request(s) dropped",
                offer_id,
                dropped
            );
        }
        Ok(accepted)
    }

    pub fn cancel_request(
        &mut self,
        caller: &str,
        request_id: &str,
    ) -> Result<InvestmentRequest, MarketError> {
        let idx = self.request_index(request_id)?;
        let request = &mut self.requests[idx];
        if request.investor_principal != caller {
            return Err(MarketError::NotRequestOwner(request_id.to_string()));
        }
        ensure_pending(request)?;
        request.status = RequestStatus::Cancelled;
        harvest_info!("Request {} cancelled by investor", request_id);
        Ok(request.clone())
    }

    /// Withdraws an active offer; its pending requests are cancelled with it.
    pub fn cancel_offer(&mut self, caller: &str, offer_id: &str) -> Result<CropListing, MarketError> {
        let idx = self.listing_index(offer_id)?;
        let listing = &mut self.listings[idx];
        if listing.farmer_principal != caller {
            return Err(MarketError::NotOfferOwner(offer_id.to_string()));
        }
        ensure_active(listing)?;
        listing.status = ListingStatus::Cancelled;
        let cancelled = listing.clone();

        let dropped = self.cancel_pending_for(offer_id);
        harvest_info!(
            "Offer {} cancelled; {} pending request(s) dropped",
            offer_id,
            dropped
        );
        Ok(cancelled)
    }

    /// Marks every pending request past its expiry date as `Expired`.
    pub fn expire_overdue(&mut self, today: NaiveDate) -> usize {
        let mut expired = 0;
        for request in self
            .requests
            .iter_mut()
            .filter(|r| r.status == RequestStatus::Pending && r.is_overdue(today))
        {
            request.status = RequestStatus::Expired;
            expired += 1;
        }
        if expired > 0 {
            harvest_info!("Expired {} overdue request(s) as of {}", expired, today);
        } else {
            harvest_debug!("No overdue requests as of {}", today);
        }
        expired
    }

    pub fn offer(&self, offer_id: &str) -> Result<&CropListing, MarketError> {
        self.listings
            .iter()
            .find(|l| l.id == offer_id)
            .ok_or_else(|| MarketError::UnknownOffer(offer_id.to_string()))
    }

    pub fn request(&self, request_id: &str) -> Result<&InvestmentRequest, MarketError> {
        self.requests
            .iter()
            .find(|r| r.id == request_id)
            .ok_or_else(|| MarketError::UnknownRequest(request_id.to_string()))
    }

    pub fn listings(&self) -> &[CropListing] {
        &self.listings
    }

    pub fn requests(&self) -> &[InvestmentRequest] {
        &self.requests
    }

    pub fn available_offers(&self) -> Vec<&CropListing> {
        self.listings.iter().filter(|l| l.is_active()).collect()
    }

    pub fn offers_by_farmer(&self, farmer_principal: &str) -> Vec<&CropListing> {
        self.listings
            .iter()
            .filter(|l| l.farmer_principal == farmer_principal)
            .collect()
    }

    /// Requests on an offer; only its owner may list them.
    pub fn requests_for_offer(
        &self,
        caller: &str,
        offer_id: &str,
    ) -> Result<Vec<&InvestmentRequest>, MarketError> {
        let listing = self.offer(offer_id)?;
        if listing.farmer_principal != caller {
            return Err(MarketError::NotOfferOwner(offer_id.to_string()));
        }
        Ok(self
            .requests
            .iter()
            .filter(|r| r.offer_id == offer_id)
            .collect())
    }

    pub fn requests_by_investor(&self, investor_principal: &str) -> Vec<&InvestmentRequest> {
        self.requests
            .iter()
            .filter(|r| r.investor_principal == investor_principal)
            .collect()
    }

    /// Transactions where `principal` is either side.
    pub fn transactions_for(&self, principal: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.farmer_principal == principal || t.investor_principal == principal)
            .collect()
    }

    pub fn platform_stats(&self) -> PlatformStats {
        PlatformStats {
            total_offers: self.listings.len(),
            active_offers: self.listings.iter().filter(|l| l.is_active()).count(),
            total_requests: self.requests.len(),
            total_transactions: self.transactions.len(),
        }
    }

    /// Cancels every pending request on `offer_id` once it can no longer be filled.
    fn cancel_pending_for(&mut self, offer_id: &str) -> usize {
        let mut dropped = 0;
        for request in self
            .requests
            .iter_mut()
            .filter(|r| r.offer_id == offer_id && r.status == RequestStatus::Pending)
        {
            request.status = RequestStatus::Cancelled;
            dropped += 1;
        }
        dropped
    }

    fn listing_index(&self, offer_id: &str) -> Result<usize, MarketError> {
        self.listings
            .iter()
            .position(|l| l.id == offer_id)
            .ok_or_else(|| MarketError::UnknownOffer(offer_id.to_string()))
    }

    fn request_index(&self, request_id: &str) -> Result<usize, MarketError> {
        self.requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| MarketError::UnknownRequest(request_id.to_string()))
    }

    // Seed ids are arbitrary strings, so skip any sequence value already taken.
    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            self.next_seq += 1;
            let candidate = format!("{prefix}-{}", self.next_seq);
            let taken = self.listings.iter().any(|l| l.id == candidate)
                || self.requests.iter().any(|r| r.id == candidate)
                || self.transactions.iter().any(|t| t.id == candidate);
            if !taken {
                return candidate;
            }
        }
    }
}

fn validate_price(price: f64) -> Result<(), MarketError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(MarketError::InvalidPrice(price))
    }
}

fn ensure_active(listing: &CropListing) -> Result<(), MarketError> {
    if listing.is_active() {
        Ok(())
    } else {
        Err(MarketError::OfferNotActive {
            offer_id: listing.id.clone(),
            status: listing.status,
        })
    }
}

fn ensure_pending(request: &InvestmentRequest) -> Result<(), MarketError> {
    if request.status == RequestStatus::Pending {
        Ok(())
    } else {
        Err(MarketError::RequestNotPending {
            request_id: request.id.clone(),
            status: request.status,
        })
    }
}
