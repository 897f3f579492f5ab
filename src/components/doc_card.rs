//! Document Card Component
//!
//! Renders one document summary in the results grid. The whole card is a
//! button; selecting it hands the summary back to the page through the
//! `on_open` callback.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, FILE_TEXT};

use crate::api::DocSummary;
use super::category_badge::CategoryBadge;

/// How many tags a card shows; the rest are silently omitted.
const MAX_CARD_TAGS: usize = 4;

#[component]
pub fn DocCard(
    /// The summary to render
    doc: DocSummary,
    /// Invoked with the summary when the card is selected
    #[prop(into)]
    on_open: Callback<DocSummary>,
) -> impl IntoView {
    let open_doc = {
        let doc = doc.clone();
        move |_: ev::MouseEvent| on_open.run(doc.clone())
    };

    let cover = match doc.cover_image.clone() {
        Some(src) => view! {
            <img src=src alt="cover" class="w-16 h-16 rounded-lg object-cover" />
        }
        .into_any(),
        None => view! {
            <div class="w-16 h-16 rounded-lg bg-gray-100 flex items-center justify-center text-gray-400">
                <Icon icon=FILE_TEXT size="24px" />
            </div>
        }
        .into_any(),
    };

    let tags: Vec<String> = doc.tags.iter().take(MAX_CARD_TAGS).cloned().collect();

    view! {
        <button
            class="text-left w-full bg-white rounded-2xl border border-gray-100 p-4 shadow-sm hover:shadow-md hover:-translate-y-0.5 transition"
            data-doc-card=""
            on:click=open_doc
        >
            <div class="flex items-start gap-3">
                {cover}
                <div class="flex-1">
                    <div class="flex items-center justify-between gap-2">
                        <h3 class="text-base font-semibold text-gray-800">{doc.title.clone()}</h3>
                        <CategoryBadge category=doc.category.clone() />
                    </div>
                    <div class="mt-2 flex flex-wrap gap-2">
                        {tags
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <span
                                        class="text-xs px-2 py-1 bg-gray-100 rounded-full text-gray-600"
                                        data-tag-pill=""
                                    >
                                        {format!("#{tag}")}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </button>
    }
}
