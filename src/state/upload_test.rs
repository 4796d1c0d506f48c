use super::*;

// =============================================================
// Defaults and file selection
// =============================================================

#[test]
fn upload_state_defaults_to_idle() {
    let state = UploadState::default();
    assert_eq!(state.status, UploadStatus::Idle);
    assert_eq!(state.file_name, None);
    assert!(state.message.is_empty());
}

#[test]
fn selecting_a_file_clears_a_previous_outcome() {
    let mut state = UploadState::default();
    state.select_file("old.pdf".to_owned());
    let seq = state.begin();
    state.settle_err(seq, &ApiError::Transport("offline".to_owned()));
    state.select_file("paper.pdf".to_owned());
    assert_eq!(state.file_name.as_deref(), Some("paper.pdf"));
    assert_eq!(state.status, UploadStatus::Idle);
    assert!(state.message.is_empty());
}

// =============================================================
// Submit guard
// =============================================================

#[test]
fn submit_requires_a_selected_file() {
    let state = UploadState::default();
    assert!(!state.can_submit());
}

#[test]
fn submit_is_refused_while_uploading() {
    let mut state = UploadState::default();
    state.select_file("paper.pdf".to_owned());
    assert!(state.can_submit());
    state.begin();
    assert!(!state.can_submit());
}

#[test]
fn resubmit_is_allowed_from_both_terminal_states() {
    let mut state = UploadState::default();
    state.select_file("paper.pdf".to_owned());
    let seq = state.begin();
    state.settle_ok(seq, "paper.pdf");
    assert!(state.can_submit());
    let seq = state.begin();
    state.settle_err(seq, &ApiError::Transport("offline".to_owned()));
    assert!(state.can_submit());
}

// =============================================================
// Status machine
// =============================================================

#[test]
fn begin_always_passes_through_uploading() {
    let mut state = UploadState::default();
    state.select_file("paper.pdf".to_owned());
    state.begin();
    assert_eq!(state.status, UploadStatus::Uploading);
    assert!(state.message.is_empty());
}

#[test]
fn settle_ok_reports_the_echoed_filename() {
    let mut state = UploadState::default();
    state.select_file("paper.pdf".to_owned());
    let seq = state.begin();
    state.settle_ok(seq, "paper.pdf");
    assert_eq!(state.status, UploadStatus::Success);
    assert!(state.message.contains("paper.pdf"));
}

#[test]
fn settle_err_surfaces_the_server_detail() {
    let mut state = UploadState::default();
    state.select_file("paper.txt".to_owned());
    let seq = state.begin();
    let error = ApiError::Status {
        status: 400,
        detail: "unsupported format".to_owned(),
    };
    state.settle_err(seq, &error);
    assert_eq!(state.status, UploadStatus::Error);
    assert!(state.message.contains("unsupported format"));
}

#[test]
fn stale_settles_are_ignored() {
    let mut state = UploadState::default();
    state.select_file("a.pdf".to_owned());
    let stale = state.begin();
    state.select_file("b.pdf".to_owned());
    let current = state.begin();
    state.settle_ok(stale, "a.pdf");
    assert_eq!(state.status, UploadStatus::Uploading);
    state.settle_ok(current, "b.pdf");
    assert_eq!(state.status, UploadStatus::Success);
    assert!(state.message.contains("b.pdf"));
}

#[test]
fn button_label_tracks_the_inflight_state() {
    assert_eq!(UploadStatus::Idle.button_label(), "Upload PDF");
    assert_eq!(UploadStatus::Uploading.button_label(), "Uploading...");
    assert_eq!(UploadStatus::Success.button_label(), "Upload PDF");
    assert_eq!(UploadStatus::Error.button_label(), "Upload PDF");
}
