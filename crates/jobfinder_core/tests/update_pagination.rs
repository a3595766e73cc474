mod common;

use common::{init_logging, loaded, request_id, sample_jobs};
use jobfinder_core::{update, AppState, Effect, Msg};

fn page_of(effects: &[Effect]) -> u32 {
    match effects {
        [Effect::FetchJobs { query, .. }] => query.page,
        other => panic!("expected one fetch, got {other:?}"),
    }
}

#[test]
fn next_increments_and_fetches() {
    init_logging();
    let state = loaded(AppState::new(), sample_jobs());
    let (state, effects) = update(state, Msg::NextPage);

    assert_eq!(state.page(), 2);
    assert_eq!(page_of(&effects), 2);
    assert!(state.is_loading());
}

#[test]
fn previous_on_first_page_is_ignored() {
    init_logging();
    let state = loaded(AppState::new(), sample_jobs());
    let before = state.clone();

    let (state, effects) = update(state, Msg::PreviousPage);
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.view().can_go_previous);
}

#[test]
fn previous_decrements_and_fetches() {
    init_logging();
    let state = loaded(AppState::new(), sample_jobs());
    let (state, effects) = update(state, Msg::NextPage);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            request_id: request_id(&effects),
            result: Ok(sample_jobs()),
        },
    );
    assert!(state.view().can_go_previous);

    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.page(), 1);
    assert_eq!(page_of(&effects), 1);
}

#[test]
fn pagination_disabled_while_loading() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchSubmitted);
    let view = state.view();
    assert!(!view.can_go_next);
    assert!(!view.can_go_previous);

    let (state, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);

    let (_, effects) = update(state, Msg::PreviousPage);
    assert!(effects.is_empty());
}

#[test]
fn search_resets_to_first_page() {
    init_logging();
    let state = loaded(AppState::new(), sample_jobs());
    let (state, effects) = update(state, Msg::NextPage);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            request_id: request_id(&effects),
            result: Ok(sample_jobs()),
        },
    );
    assert_eq!(state.page(), 2);

    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert_eq!(state.page(), 1);
    assert_eq!(page_of(&effects), 1);
}

#[test]
fn page_requested_jumps_and_fetches() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PageRequested { page: 5 });
    assert_eq!(state.page(), 5);
    assert_eq!(page_of(&effects), 5);

    let (state, effects) = update(state, Msg::PageRequested { page: 2 });
    assert!(effects.is_empty());
    assert_eq!(state.page(), 5);
}

#[test]
fn page_zero_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PageRequested { page: 0 });
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);
}
