use harvestx_logging::harvest_debug;

use crate::{AppState, Effect, FormField, Msg, Notification, Validation, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(text) => {
            if state.query().text != text {
                state.query_mut().text = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ProductTypeSelected(selector) => {
            if state.query().product_type != selector {
                state.query_mut().product_type = selector;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GradeSelected(selector) => {
            if state.query().quality_grade != selector {
                state.query_mut().quality_grade = selector;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FormFieldChanged { field, value } => {
            if state.form().get(field) != value {
                state.form_mut().set(field, value);
                state.clear_missing_field(field);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ListingSubmitted => submit_listing(&mut state),
        Msg::Navigate(view) => {
            if state.current_view() != view {
                harvest_debug!("Navigating {} -> {}", state.current_view(), view);
                state.set_view(view);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

// Submission is simulated: nothing is written to the catalog.
fn submit_listing(state: &mut AppState) -> Vec<Effect> {
    match state.form().validate() {
        Validation::Missing(missing) => {
            harvest_debug!("Listing submission rejected; missing {:?}", missing);
            state.set_missing_fields(missing);
            state.mark_dirty();
            vec![Effect::Notify(Notification::destructive(
                "Missing Information",
                "Please fill in all required fields.",
            ))]
        }
        Validation::Passed => {
            harvest_debug!(
                "Listing submitted: {}",
                state.form().get(FormField::ProductName)
            );
            state.form_mut().reset();
            state.set_missing_fields(Vec::new());
            state.mark_dirty();
            vec![
                Effect::Notify(Notification::info(
                    "Crop Listed Successfully!",
                    "Your crop listing has been created and is now visible to investors.",
                )),
                Effect::NavigateAfter {
                    view: View::Marketplace,
                    delay: state.settings().redirect_delay,
                },
            ]
        }
    }
}
