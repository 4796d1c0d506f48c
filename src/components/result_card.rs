//! Card for one search hit on the research dashboard.
//!
//! DESIGN
//! ======
//! Keeps result presentation (metadata fallbacks, excerpt truncation) in one
//! place so the dashboard grid stays a plain map over hits.

use leptos::prelude::*;

use crate::net::types::SearchHit;
use crate::util::text::snippet;

/// Fixed confidence value shown on every hit.
// TODO: surface the backend's relevance score here once the search service
// returns one per result.
const PLACEHOLDER_SCORE: f64 = 1.0;

/// One search result with source metadata and an excerpt.
#[component]
pub fn ResultCard(hit: SearchHit) -> impl IntoView {
    let title = hit.meta.title.clone().unwrap_or_else(|| "Untitled Document".to_owned());
    let author = hit.meta.author.clone().unwrap_or_else(|| "Unknown Author".to_owned());
    let year = hit.meta.year.clone().unwrap_or_else(|| "n.d.".to_owned());
    let excerpt = format!("...{}...", snippet(&hit.text, 200));

    view! {
        <div class="result-card">
            <h4>{title}</h4>
            <p class="metadata">{format!("{author} ({year})")}</p>
            <p class="snippet">{excerpt}</p>
            <div class="tags">
                <span class="tag">{format!("Score: {PLACEHOLDER_SCORE:.2}")}</span>
            </div>
        </div>
    }
}
