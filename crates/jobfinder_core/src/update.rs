use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Filter edits only narrow the page already loaded; fetches happen on
/// `SearchSubmitted` and pagination.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchTextChanged(text) => {
            state.set_search_text(text);
            Vec::new()
        }
        Msg::SourceChanged(source) => {
            state.set_source(source);
            Vec::new()
        }
        Msg::CountryChanged(country) => {
            state.set_country(country);
            Vec::new()
        }
        Msg::RegionChanged(region) => {
            state.set_region(region.as_deref());
            Vec::new()
        }
        Msg::ExperienceChanged(experience) => {
            state.set_experience(experience);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            state.set_page(1);
            vec![state.begin_fetch()]
        }
        Msg::NextPage => {
            if state.is_loading() {
                return (state, Vec::new());
            }
            let next = state.page().saturating_add(1);
            state.set_page(next);
            vec![state.begin_fetch()]
        }
        Msg::PreviousPage => {
            if state.is_loading() || state.page() <= 1 {
                return (state, Vec::new());
            }
            let previous = state.page() - 1;
            state.set_page(previous);
            vec![state.begin_fetch()]
        }
        Msg::PageRequested { page } => {
            if state.is_loading() || page == 0 {
                return (state, Vec::new());
            }
            state.set_page(page);
            vec![state.begin_fetch()]
        }
        Msg::JobsLoaded { request_id, result } => {
            state.apply_loaded(request_id, result);
            Vec::new()
        }
        Msg::JobSelected { job_id } => {
            state.select(&job_id);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::SaveToggled { job_id } => {
            state.toggle_saved(job_id);
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::HealthCheckRequested => vec![Effect::CheckHealth],
        Msg::HealthChecked { healthy } => {
            state.set_api_health(healthy);
            Vec::new()
        }
    };

    (state, effects)
}
