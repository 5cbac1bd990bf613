use std::time::{Duration, Instant};

use curator_core::{update, AppState, Msg};
use pretty_assertions::assert_eq;

#[test]
fn tick_without_pending_edits_changes_nothing() {
    let start = Instant::now();
    let (mut state, _) = update(
        AppState::new(),
        Msg::Mounted {
            query: "?category=DSA".into(),
            at: start,
        },
    );
    state.consume_dirty();

    let (mut next, effects) = update(
        state.clone(),
        Msg::Tick {
            now: start + Duration::from_secs(2),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next.view(), state.view());
    assert_eq!(next.filters(), state.filters());
}
