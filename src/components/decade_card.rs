//! Card for one decade section of a synthesis report.

use leptos::prelude::*;

use crate::net::types::DecadeEntry;

/// One decade of the synthesis report: mentions, discussions, and whatever
/// the decade newly introduced. Quiet decades render their new-discussion
/// line de-emphasized.
#[component]
pub fn DecadeCard(entry: DecadeEntry) -> impl IntoView {
    let quiet = entry.is_quiet();
    let emphasized = !quiet;
    let new_discussion = entry.new_discussion_text();

    view! {
        <section class="decade-card">
            <div class="decade-sidebar">
                <span class="decade-tag">{entry.decade.clone()}</span>
            </div>
            <div class="decade-content">
                <div class="section">
                    <h4>"What was spoken about"</h4>
                    <ul>
                        {entry
                            .what_spoken
                            .iter()
                            .map(|item| view! { <li>{item.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="section">
                    <h4>"What was discussed"</h4>
                    <ul>
                        {entry
                            .what_discussed
                            .iter()
                            .map(|item| view! { <li>{item.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="section">
                    <h4>"New discussion"</h4>
                    <p class:muted=quiet class:highlight=emphasized>{new_discussion}</p>
                </div>
            </div>
        </section>
    }
}
