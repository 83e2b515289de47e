use crate::{InvestmentRequest, RequestStatus};

/// Dashboard totals derived from an investor's requests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RequestSummary {
    pub total_invested: f64,
    pub pending_requests: usize,
    pub active_investments: usize,
}

pub fn summarize_requests(requests: &[InvestmentRequest]) -> RequestSummary {
    requests
        .iter()
        .fold(RequestSummary::default(), |mut summary, request| {
            match request.status {
                RequestStatus::Accepted => {
                    summary.total_invested += request.total_offered;
                    summary.active_investments += 1;
                }
                RequestStatus::Pending => summary.pending_requests += 1,
                RequestStatus::Rejected | RequestStatus::Cancelled | RequestStatus::Expired => {}
            }
            summary
        })
}

/// Marketplace-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformStats {
    pub total_offers: usize,
    pub active_offers: usize,
    pub total_requests: usize,
    pub total_transactions: usize,
}
