//! HarvestX core: marketplace records, pure filtering/validation, the
//! in-memory market ledger, and the view state machine.
mod effect;
mod filter;
mod form;
pub mod ledger;
mod msg;
mod record;
mod state;
mod stats;
mod update;
mod view_model;

pub use effect::{Effect, Notification, Severity};
pub use filter::{featured_listings, filter_listings, ListingQuery, Selector};
pub use form::{
    missing_fields, FormError, FormField, ListingForm, Validation, REQUIRED_LISTING_FIELDS,
};
pub use ledger::{CreateInvestmentRequest, CreateOfferRequest, MarketError, MarketLedger};
pub use msg::Msg;
pub use record::{
    CropListing, InvestmentRequest, ListingStatus, ParseEnumError, ProductType, QualityGrade,
    RequestStatus, Transaction, TransactionStatus,
};
pub use state::{AppState, CoreSettings, View, FEATURED_COUNT, REDIRECT_DELAY};
pub use stats::{summarize_requests, PlatformStats, RequestSummary};
pub use update::update;
pub use view_model::{AppViewModel, FormFieldView, ListingCardView, RequestRowView};
