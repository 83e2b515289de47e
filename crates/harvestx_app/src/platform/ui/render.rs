use harvestx_core::{
    AppViewModel, FormFieldView, ListingCardView, Notification, RequestRowView, RequestStatus,
    Severity, View,
};

/// Full screen for the current view.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(view.view)];
    match view.view {
        View::Home => render_home(view, &mut lines),
        View::Marketplace => render_marketplace(view, &mut lines),
        View::CreateListing => render_form(&view.form_fields, &mut lines),
        View::InvestorDashboard => render_dashboard(view, &mut lines),
    }
    lines
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Info => "[ok]",
        Severity::Destructive => "[!!]",
    };
    format!(
        "{marker} {}: {}",
        notification.title, notification.description
    )
}

fn header(current: View) -> String {
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|view| {
            if *view == current {
                format!("[{}]", view.route())
            } else {
                view.route().to_string()
            }
        })
        .collect();
    format!("== HarvestX == {}", tabs.join(" | "))
}

fn render_home(view: &AppViewModel, lines: &mut Vec<String>) {
    lines.push("Invest in agriculture, straight from the farm.".to_string());
    lines.push(format!(
        "Active listings: {} | Open requests: {}",
        view.active_listings, view.summary.pending_requests
    ));
    lines.push("Type `help` for commands.".to_string());
}

fn render_marketplace(view: &AppViewModel, lines: &mut Vec<String>) {
    lines.push(format!(
        "Search: {:?} | Type: {} | Grade: {}",
        view.search_text, view.product_type, view.quality_grade
    ));
    lines.push(format!("Found {} active listings", view.result_count));
    for card in &view.listings {
        lines.push(format_card(card));
    }
}

fn render_form(fields: &[FormFieldView], lines: &mut Vec<String>) {
    lines.push("Create Crop Listing".to_string());
    for field in fields {
        let flag = if field.missing { "  <- required" } else { "" };
        lines.push(format!(
            "  {:<24} ({}) = {:?}{flag}",
            format!("{} *", field.field.label()),
            field.field.name(),
            field.value
        ));
    }
}

fn render_dashboard(view: &AppViewModel, lines: &mut Vec<String>) {
    lines.push(format!(
        "Total invested: {} | Pending requests: {} | Active investments: {}",
        format_money(view.summary.total_invested),
        view.summary.pending_requests,
        view.summary.active_investments
    ));
    lines.push("My requests:".to_string());
    if view.requests.is_empty() {
        lines.push("  (none yet)".to_string());
    }
    for request in &view.requests {
        lines.push(format_request(request));
    }
    lines.push("Featured opportunities:".to_string());
    for card in &view.featured {
        lines.push(format_card(card));
    }
}

fn format_card(card: &ListingCardView) -> String {
    format!(
        "  [#{id}] {product} ({kind}, {grade}) by {farmer} - {location} | {available}/{total} kg @ {price}/kg | min {min} | harvest {harvest}",
        id = card.id,
        product = card.product_name,
        kind = card.product_type,
        grade = card.quality_grade,
        farmer = card.farmer_name,
        location = card.location,
        available = format_with_commas(card.available_quantity),
        total = format_with_commas(card.total_quantity),
        price = format_money(card.price_per_kg),
        min = format_money(card.minimum_investment as f64),
        harvest = card.harvest_date,
    )
}

fn format_request(request: &RequestRowView) -> String {
    let status = match request.status {
        RequestStatus::Accepted => "ACCEPTED",
        RequestStatus::Pending => "PENDING",
        RequestStatus::Rejected => "REJECTED",
        RequestStatus::Cancelled => "CANCELLED",
        RequestStatus::Expired => "EXPIRED",
    };
    format!(
        "  [{id}] {status} listing #{offer} - {qty} kg @ {price}/kg = {total} (expires {expires})",
        id = request.id,
        offer = request.offer_id,
        qty = format_with_commas(request.requested_quantity),
        price = format_money(request.offered_price_per_kg),
        total = format_money(request.total_offered),
        expires = request.expires_at,
    )
}

fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    format!("${}.{:02}", format_with_commas(cents / 100), cents % 100)
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvestx_core::{AppState, FormField, RequestSummary};

    #[test]
    fn money_and_quantities_are_grouped() {
        assert_eq!(format_money(1200.0), "$1,200.00");
        assert_eq!(format_money(4.5), "$4.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_with_commas(1234567), "1,234,567");
        assert_eq!(format_with_commas(950), "950");
    }

    #[test]
    fn header_marks_current_view() {
        assert_eq!(
            header(View::Marketplace),
            "== HarvestX == home | [marketplace] | create-listing | dashboard"
        );
    }

    #[test]
    fn dashboard_shows_summary() {
        let view = AppViewModel {
            view: View::InvestorDashboard,
            summary: RequestSummary {
                total_invested: 1200.0,
                pending_requests: 2,
                active_investments: 1,
            },
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert_eq!(
            lines[1],
            "Total invested: $1,200.00 | Pending requests: 2 | Active investments: 1"
        );
        assert!(lines.contains(&"  (none yet)".to_string()));
    }

    #[test]
    fn form_flags_missing_fields() {
        let mut view = AppState::new().view();
        view.view = View::CreateListing;
        view.form_fields[0].missing = true;
        let lines = render(&view);
        assert_eq!(lines.len(), 2 + FormField::ALL.len());
        assert!(lines[2].contains("productName"));
        assert!(lines[2].ends_with("<- required"));
        assert!(!lines[3].ends_with("<- required"));
    }

    #[test]
    fn notifications_show_severity() {
        let warning = Notification::destructive("Missing Information", "Fill it in.");
        assert_eq!(
            render_notification(&warning),
            "[!!] Missing Information: Fill it in."
        );
    }
}
