use super::*;

fn doc(id: i64, status: &str) -> DocumentSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "filename": format!("doc_{id}.pdf"),
        "status": status
    }))
    .expect("document fixture should deserialize")
}

#[test]
fn inventory_defaults_to_empty() {
    let state = DocumentsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert!(!state.has_pending());
}

#[test]
fn settle_ok_replaces_items_and_clears_a_previous_error() {
    let mut state = DocumentsState::default();
    let seq = state.begin();
    state.settle_err(seq, &ApiError::Transport("offline".to_owned()));
    assert!(state.error.is_some());
    let seq = state.begin();
    state.settle_ok(seq, vec![doc(1, "processed")]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn has_pending_tracks_pipeline_statuses() {
    let mut state = DocumentsState::default();
    let seq = state.begin();
    state.settle_ok(seq, vec![doc(1, "processed"), doc(2, "failed")]);
    assert!(!state.has_pending());
    let seq = state.begin();
    state.settle_ok(seq, vec![doc(1, "processed"), doc(2, "processing")]);
    assert!(state.has_pending());
    let seq = state.begin();
    state.settle_ok(seq, vec![doc(3, "uploaded")]);
    assert!(state.has_pending());
}

#[test]
fn stale_settles_are_ignored() {
    let mut state = DocumentsState::default();
    let stale = state.begin();
    let current = state.begin();
    state.settle_ok(stale, vec![doc(1, "processed")]);
    assert!(state.loading);
    assert!(state.items.is_empty());
    state.settle_ok(current, vec![doc(2, "processed")]);
    assert!(!state.loading);
    assert_eq!(state.items[0].id, 2);
}
