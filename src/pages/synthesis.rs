//! Synthesis page: concept selection and the multi-decade report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generation can take the backend tens of seconds, so the screen keeps a
//! distinct loading state with explanatory copy and re-enters it cleanly
//! from either terminal state.

use leptos::prelude::*;

use crate::components::decade_card::DecadeCard;
use crate::state::synthesis::{PRESET_TERMS, SynthesisState};

/// Term selection and report generation for the research synthesis screen.
#[component]
pub fn SynthesisPage() -> impl IntoView {
    let synthesis = RwSignal::new(SynthesisState::default());

    let on_generate = move |_| {
        if !synthesis.get().can_submit() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut seq = 0;
            let mut term = String::new();
            synthesis.update(|s| {
                seq = s.begin();
                term = s.term.clone();
            });
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_synthesis(&term).await;
                let _ = synthesis.try_update(|s| match result {
                    Ok(report) => s.settle_ok(seq, report),
                    Err(error) => {
                        log::error!("synthesis failed: {error}");
                        s.settle_err(seq, &error);
                    }
                });
            });
        }
    };

    let show_empty = move || {
        let state = synthesis.get();
        state.report.is_none() && !state.loading && state.error.is_none()
    };

    view! {
        <div class="synthesis-container">
            <div class="synthesis-controls">
                <h2>"Rigorous Academic Synthesis"</h2>
                <div class="term-selector">
                    {PRESET_TERMS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    class:active=move || synthesis.get().term == preset
                                    on:click=move |_| synthesis.update(|s| s.term = preset.to_owned())
                                >
                                    {preset}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="custom-input">
                        <input
                            type="text"
                            placeholder="Custom term..."
                            prop:value=move || synthesis.get().term
                            on:input=move |ev| synthesis.update(|s| s.term = event_target_value(&ev))
                        />
                        <button on:click=on_generate disabled=move || synthesis.get().loading>
                            "Generate Synthesis"
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || synthesis.get().error.is_some()>
                <div class="error-banner" role="alert">
                    <p>{move || synthesis.get().error.unwrap_or_default()}</p>
                </div>
            </Show>

            <Show when=move || synthesis.get().loading>
                <div class="loading-state">
                    <p>"Performing rigorous multi-document analysis..."</p>
                    <p class="subtext">
                        "This may take 30-60 seconds as we process all available decade data."
                    </p>
                </div>
            </Show>

            <Show when=move || synthesis.get().report.is_some() && !synthesis.get().loading>
                {move || {
                    synthesis.get().report.map(|report| {
                        view! {
                            <div class="report-display">
                                <header class="report-header">
                                    <h3>{format!("Research Report: {}", report.concept)}</h3>
                                    <div class="badge">"Academic Synthesis"</div>
                                </header>
                                <div class="decades-list">
                                    {report
                                        .decades
                                        .into_iter()
                                        .map(|entry| view! { <DecadeCard entry=entry/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                }}
            </Show>

            <Show when=show_empty>
                <div class="empty-state">
                    <p>"Select a term and click \"Generate Synthesis\" to start the analysis."</p>
                </div>
            </Show>
        </div>
    }
}
