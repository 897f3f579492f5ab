//! Docs Hub Page
//!
//! Owns all page state and data fetching. Child components are stateless
//! and communicate back through the shared context or callbacks; every
//! backend call funnels through [`crate::api`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, PLUS};

use crate::api::{self, Doc, DocSummary};
use super::design_system::{Button, LoadingSpinner, Modal};
use super::doc_card::DocCard;
use super::editor::Editor;
use super::search_bar::SearchBar;
use super::viewer::Viewer;

/// Quiescence window for search-driven reloads, in milliseconds. Only the
/// last filter state within a burst of changes triggers a fetch.
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Shared page state provided to child components.
#[derive(Clone, Copy)]
pub struct HubState {
    pub query: RwSignal<String>,
    pub category: RwSignal<String>,
    pub docs: RwSignal<Vec<DocSummary>>,
    pub loading: RwSignal<bool>,
    pub editor_open: RwSignal<bool>,
    pub active: RwSignal<Option<Doc>>,
}

impl HubState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            docs: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            editor_open: RwSignal::new(false),
            active: RwSignal::new(None),
        }
    }
}

impl Default for HubState {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the hub state from context.
pub fn use_hub_state() -> HubState {
    expect_context::<HubState>()
}

/// Replace the document list with a fresh query against the current
/// filters. Failures are logged and leave the previous list on screen.
/// Responses are not sequenced: overlapping reloads resolve last-write-wins.
async fn reload(state: HubState) {
    state.loading.set(true);

    let q = state.query.get_untracked();
    let category = state.category.get_untracked();
    match api::list_docs(&q, &category).await {
        Ok(docs) => state.docs.set(docs),
        Err(e) => log::warn!("Failed to load documents: {}", e),
    }

    state.loading.set(false);
}

/// Page header with the brand mark and the new-document action.
#[component]
fn HubHeader() -> impl IntoView {
    let state = use_hub_state();

    view! {
        <header class="sticky top-0 z-10 backdrop-blur bg-white/60 border-b border-gray-100">
            <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-9 h-9 rounded-xl bg-gradient-to-br from-indigo-500 to-fuchsia-500"></div>
                    <h1 class="text-xl font-semibold text-gray-800">"Docs Hub"</h1>
                </div>
                <Button on_click=move |_| state.editor_open.set(true)>
                    <Icon icon=PLUS size="18px" />
                    "Nuevo documento"
                </Button>
            </div>
        </header>
    }
}

#[component]
pub fn DocsHub() -> impl IntoView {
    let state = HubState::new();
    provide_context(state);

    // Single-slot debounce timer: each filter change bumps the epoch, and a
    // scheduled reload only fires if its epoch is still the latest.
    let reload_epoch = RwSignal::new(0_u64);

    // Initial load on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            reload(state).await;
        });
    });

    // Debounced reload whenever the search filters change. The first run
    // only subscribes to the signals.
    Effect::new(move |prev: Option<()>| {
        let _ = state.query.get();
        let _ = state.category.get();
        if prev.is_none() {
            return;
        }

        let epoch = reload_epoch.get_untracked() + 1;
        reload_epoch.set(epoch);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if reload_epoch.get_untracked() == epoch {
                reload(state).await;
            }
        });
    });

    // Selecting a card fetches the full document; the viewer modal opens
    // once it arrives (visibility derives from `active`).
    let open_doc = Callback::new(move |doc: DocSummary| {
        spawn_local(async move {
            match api::get_doc(&doc.slug).await {
                Ok(full) => state.active.set(Some(full)),
                Err(e) => log::warn!("Failed to load document '{}': {}", doc.slug, e),
            }
        });
    });

    let on_saved = Callback::new(move |_: ()| {
        state.editor_open.set(false);
        // Always refresh from the backend so its sort/filter order stays
        // authoritative; the created document is never inserted locally.
        spawn_local(async move {
            reload(state).await;
        });
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-white">
            <HubHeader />
            <SearchBar />

            <main class="max-w-6xl mx-auto px-4 pb-20">
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex flex-col items-center gap-3 py-20 text-gray-500">
                                <LoadingSpinner size="lg" />
                                "Cargando..."
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {state
                                    .docs
                                    .get()
                                    .into_iter()
                                    .map(|doc| view! { <DocCard doc=doc on_open=open_doc /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>

            <Modal
                open=Signal::derive(move || state.editor_open.get())
                title="Nuevo documento"
                on_close=Callback::new(move |_| state.editor_open.set(false))
            >
                <Editor on_saved=on_saved />
            </Modal>

            <Modal
                open=Signal::derive(move || state.active.get().is_some())
                title="Documento"
                on_close=Callback::new(move |_| state.active.set(None))
            >
                {move || view! { <Viewer doc=state.active.get() /> }}
            </Modal>
        </div>
    }
}
