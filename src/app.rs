//! Root application shell: header, tab navigation, and screen mounting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tabs are plain local state rather than routes. Switching tabs unmounts
//! the previous screen, which drops its signals and resets it, so no state
//! survives navigation.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::dashboard::DashboardPage;
use crate::pages::ingestion::IngestionPage;
use crate::pages::synthesis::SynthesisPage;
use crate::state::ui::ActiveTab;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let active_tab = RwSignal::new(ActiveTab::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/musicology-client.css"/>
        <Title text="Musicology Research Assistant"/>

        <div class="app-container">
            <header class="app-header">
                <h1>"Musicology Research Assistant"</h1>
                <nav>
                    {ActiveTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class:active=move || active_tab.get() == tab
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>

            <main class="app-content">
                <Show when=move || active_tab.get() == ActiveTab::Ingestion>
                    <IngestionPage/>
                </Show>
                <Show when=move || active_tab.get() == ActiveTab::Dashboard>
                    <DashboardPage/>
                </Show>
                <Show when=move || active_tab.get() == ActiveTab::Synthesis>
                    <SynthesisPage/>
                </Show>
            </main>
        </div>
    }
}
