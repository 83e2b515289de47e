use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::filter::{featured_listings, filter_listings};
use crate::stats::summarize_requests;
use crate::view_model::{AppViewModel, FormFieldView, ListingCardView, RequestRowView};
use crate::{
    CropListing, FormField, InvestmentRequest, ListingForm, ListingQuery, ParseEnumError,
};

/// Delay between a successful listing submission and the marketplace redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Number of active listings highlighted on the investor dashboard.
pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Marketplace,
    CreateListing,
    InvestorDashboard,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Home,
        View::Marketplace,
        View::CreateListing,
        View::InvestorDashboard,
    ];

    pub fn route(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Marketplace => "marketplace",
            View::CreateListing => "create-listing",
            View::InvestorDashboard => "dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for View {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.route() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "view",
                value: s.to_string(),
            })
    }
}

/// Tunables the shell may override from its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreSettings {
    pub redirect_delay: Duration,
    pub featured_count: usize,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            redirect_delay: REDIRECT_DELAY,
            featured_count: FEATURED_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    listings: Vec<CropListing>,
    requests: Vec<InvestmentRequest>,
    settings: CoreSettings,
    view: View,
    query: ListingQuery,
    form: ListingForm,
    missing_fields: Vec<FormField>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State bound to a fixed catalog; the records are never written back.
    pub fn with_catalog(listings: Vec<CropListing>, requests: Vec<InvestmentRequest>) -> Self {
        Self {
            listings,
            requests,
            ..Self::default()
        }
    }

    pub fn with_settings(mut self, settings: CoreSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> CoreSettings {
        self.settings
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn listings(&self) -> &[CropListing] {
        &self.listings
    }

    pub fn requests(&self) -> &[InvestmentRequest] {
        &self.requests
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn form(&self) -> &ListingForm {
        &self.form
    }

    /// Builds the view model; derived data is recomputed on every call.
    pub fn view(&self) -> AppViewModel {
        let listings: Vec<ListingCardView> = filter_listings(&self.listings, &self.query)
            .into_iter()
            .map(ListingCardView::from_listing)
            .collect();
        let featured = featured_listings(&self.listings, self.settings.featured_count)
            .into_iter()
            .map(ListingCardView::from_listing)
            .collect();
        let form_fields = FormField::ALL
            .into_iter()
            .map(|field| FormFieldView {
                field,
                value: self.form.get(field).to_string(),
                missing: self.missing_fields.contains(&field),
            })
            .collect();

        AppViewModel {
            view: self.view,
            search_text: self.query.text.clone(),
            product_type: self.query.product_type,
            quality_grade: self.query.quality_grade,
            result_count: listings.len(),
            active_listings: self.listings.iter().filter(|l| l.is_active()).count(),
            listings,
            featured,
            form_fields,
            summary: summarize_requests(&self.requests),
            requests: self.requests.iter().map(RequestRowView::from_request).collect(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn query_mut(&mut self) -> &mut ListingQuery {
        &mut self.query
    }

    pub(crate) fn form_mut(&mut self) -> &mut ListingForm {
        &mut self.form
    }

    pub(crate) fn set_missing_fields(&mut self, missing: Vec<FormField>) {
        self.missing_fields = missing;
    }

    pub(crate) fn clear_missing_field(&mut self, field: FormField) {
        self.missing_fields.retain(|missing| *missing != field);
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.view = view;
    }
}
