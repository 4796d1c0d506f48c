//! Ingestion page: PDF upload plus the stored-document inventory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the upload state machine and the inventory refresh. The selected
//! file is re-read from the input element at submit time so the DOM stays
//! the single source of truth for the file handle.

use leptos::prelude::*;

use crate::components::document_list::DocumentList;
use crate::state::documents::DocumentsState;
use crate::state::upload::{UploadState, UploadStatus};

/// Upload card and document inventory.
#[component]
pub fn IngestionPage() -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let documents = RwSignal::new(DocumentsState::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    {
        refresh_documents(documents);

        // Re-check pipeline progress while any document is mid-ingestion.
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !documents.try_get_untracked().is_some_and(|d| d.has_pending()) {
                    continue;
                }
                refresh_documents(documents);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get() {
                if let Some(file) = input.files().and_then(|list| list.get(0)) {
                    upload.update(|u| u.select_file(file.name()));
                }
            }
        }
    };

    let on_upload = move |_| {
        if !upload.get().can_submit() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let mut seq = 0;
            upload.update(|u| seq = u.begin());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_document(&file).await;
                let _ = upload.try_update(|u| match &result {
                    Ok(receipt) => u.settle_ok(seq, &receipt.filename),
                    Err(error) => u.settle_err(seq, error),
                });
                if result.is_ok() {
                    refresh_documents(documents);
                }
            });
        }
    };

    let status_message = move || {
        let state = upload.get();
        match state.status {
            UploadStatus::Success => Some(("status success", state.message)),
            UploadStatus::Error => Some(("status error", state.message)),
            UploadStatus::Idle | UploadStatus::Uploading => None,
        }
    };

    view! {
        <div class="card">
            <h2>"Ingestion"</h2>
            <div class="upload-area">
                <input type="file" accept=".pdf" node_ref=file_ref on:change=on_file_change/>
                <button on:click=on_upload disabled=move || !upload.get().can_submit()>
                    {move || upload.get().status.button_label()}
                </button>
            </div>
            {move || {
                status_message()
                    .map(|(status_class, message)| view! { <div class=status_class>{message}</div> })
            }}
            <DocumentList documents=documents/>
        </div>
    }
}

/// Fetch the inventory; stale or post-unmount completions are dropped.
#[cfg(feature = "hydrate")]
fn refresh_documents(documents: RwSignal<DocumentsState>) {
    let mut seq = 0;
    documents.update(|d| seq = d.begin());
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_documents().await;
        let _ = documents.try_update(|d| match result {
            Ok(items) => d.settle_ok(seq, items),
            Err(error) => {
                log::error!("document inventory fetch failed: {error}");
                d.settle_err(seq, &error);
            }
        });
    });
}
