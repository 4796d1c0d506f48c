use super::*;

fn report(concept: &str) -> SynthesisReport {
    serde_json::from_value(serde_json::json!({ "concept": concept, "decades": [] }))
        .expect("report fixture should deserialize")
}

// =============================================================
// Defaults and submit guard
// =============================================================

#[test]
fn synthesis_state_defaults_to_marga() {
    let state = SynthesisState::default();
    assert_eq!(state.term, "Marga");
    assert_eq!(state.report, None);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn preset_terms_match_the_primary_concepts() {
    assert_eq!(PRESET_TERMS, ["Marga", "Raagas", "Taala", "Prabandha", "Desi", "Vaadya"]);
}

#[test]
fn empty_terms_may_submit() {
    let mut state = SynthesisState::default();
    state.term.clear();
    assert!(state.can_submit());
}

#[test]
fn submit_is_refused_while_loading() {
    let mut state = SynthesisState::default();
    state.begin();
    assert!(!state.can_submit());
}

// =============================================================
// Exactly one of report / error after settling
// =============================================================

#[test]
fn settle_ok_clears_a_previous_error() {
    let mut state = SynthesisState::default();
    let seq = state.begin();
    state.settle_err(seq, &ApiError::Transport("offline".to_owned()));
    let seq = state.begin();
    state.settle_ok(seq, report("Taala"));
    assert!(state.report.is_some());
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn settle_err_clears_a_previous_report() {
    let mut state = SynthesisState::default();
    let seq = state.begin();
    state.settle_ok(seq, report("Taala"));
    let seq = state.begin();
    let error = ApiError::Status {
        status: 500,
        detail: "Synthesis failed".to_owned(),
    };
    state.settle_err(seq, &error);
    assert_eq!(state.report, None);
    assert!(state.error.as_deref().is_some_and(|e| e.contains("Synthesis failed")));
    assert!(!state.loading);
}

#[test]
fn begin_keeps_the_previous_report_visible_until_settling() {
    let mut state = SynthesisState::default();
    let seq = state.begin();
    state.settle_ok(seq, report("Taala"));
    state.begin();
    assert!(state.report.is_some());
    assert_eq!(state.error, None);
}

#[test]
fn stale_settles_are_ignored() {
    let mut state = SynthesisState::default();
    let stale = state.begin();
    let current = state.begin();
    state.settle_ok(stale, report("Desi"));
    assert!(state.loading);
    assert_eq!(state.report, None);
    state.settle_ok(current, report("Taala"));
    assert!(!state.loading);
    assert_eq!(state.report.map(|r| r.concept), Some("Taala".to_owned()));
}
