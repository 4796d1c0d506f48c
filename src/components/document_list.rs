//! Stored-document inventory list for the ingestion screen.
//!
//! DESIGN
//! ======
//! Presentation only; the ingestion page owns fetching and the
//! pending-status refresh poll.

use leptos::prelude::*;

use crate::state::documents::DocumentsState;

/// Inventory of uploaded documents and their pipeline status.
#[component]
pub fn DocumentList(documents: RwSignal<DocumentsState>) -> impl IntoView {
    view! {
        <div class="document-list">
            <h3>"Archive"</h3>
            <Show when=move || documents.get().error.is_some()>
                <p class="document-list__error">{move || documents.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !documents.get().loading || !documents.get().items.is_empty()
                fallback=move || view! { <p>"Loading documents..."</p> }
            >
                {move || {
                    let items = documents.get().items;
                    if items.is_empty() {
                        return view! {
                            <p class="document-list__empty">"No documents ingested yet."</p>
                        }
                        .into_any();
                    }
                    view! {
                        <ul class="document-list__items">
                            {items
                                .into_iter()
                                .map(|doc| {
                                    let badge_class = format!("status-badge status-badge--{}", doc.status);
                                    view! {
                                        <li class="document-list__item">
                                            <span class="document-list__name">{doc.filename}</span>
                                            <span class="document-list__decade">
                                                {doc.decade.unwrap_or_default()}
                                            </span>
                                            <span class=badge_class>{doc.status}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}
