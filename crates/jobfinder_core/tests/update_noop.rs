use jobfinder_core::{update, AppState, Msg, SourceFilter};

#[test]
fn redundant_messages_leave_state_untouched() {
    let state = AppState::new();
    for msg in [
        Msg::SearchTextChanged(String::new()),
        Msg::SourceChanged(SourceFilter::All),
        Msg::CountryChanged(None),
        Msg::SelectionCleared,
        Msg::ErrorDismissed,
        Msg::JobSelected {
            job_id: "missing".to_string(),
        },
        Msg::PreviousPage,
        Msg::PageRequested { page: 0 },
    ] {
        let (next, effects) = update(state.clone(), msg.clone());
        assert_eq!(state, next, "{msg:?} changed state");
        assert!(effects.is_empty(), "{msg:?} emitted effects");
    }
}

#[test]
fn repeated_health_result_does_not_mark_dirty() {
    let (mut state, _) = update(AppState::new(), Msg::HealthChecked { healthy: true });
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::HealthChecked { healthy: true });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
