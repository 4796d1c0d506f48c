//! Research dashboard page: keyword search over the processed archive.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits one search at a time, flattens the backend's nested-array
//! envelope through `net::types`, and surfaces every failure in a banner
//! instead of degrading to an empty list.

use leptos::prelude::*;

use crate::components::result_card::ResultCard;
use crate::state::search::SearchState;

/// Search form and result grid.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let search = RwSignal::new(SearchState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !search.get().can_submit() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let mut seq = 0;
            let mut query = String::new();
            search.update(|s| {
                seq = s.begin();
                query = s.query.clone();
            });
            leptos::task::spawn_local(async move {
                let result = crate::net::api::search_documents(&query).await;
                let _ = search.try_update(|s| match result {
                    Ok(hits) => s.settle_ok(seq, hits),
                    Err(error) => {
                        log::error!("search failed: {error}");
                        s.settle_err(seq, &error);
                    }
                });
            });
        }
    };

    view! {
        <div class="dashboard">
            <div class="search-section">
                <form class="search-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Search for terms (e.g., 'Mārga', 'Tāla evolution')..."
                        prop:value=move || search.get().query
                        on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || search.get().loading>
                        "Search"
                    </button>
                </form>
            </div>

            <div class="results-section">
                <h3>"Results"</h3>
                <Show when=move || search.get().error.is_some()>
                    <div class="error-banner" role="alert">
                        <p>{move || search.get().error.unwrap_or_default()}</p>
                    </div>
                </Show>
                <Show
                    when=move || !search.get().loading
                    fallback=move || view! { <p>"Searching..."</p> }
                >
                    <div class="results-grid">
                        {move || {
                            search
                                .get()
                                .hits
                                .into_iter()
                                .map(|hit| view! { <ResultCard hit=hit/> })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || search.get().hits.is_empty()>
                            <p>"No results found or search not initiated."</p>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
