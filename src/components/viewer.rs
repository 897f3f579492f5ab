//! Document Viewer Component
//!
//! Read-only rendering of a fetched document. Content is shown verbatim in
//! a preformatted block; Markdown syntax is not interpreted.

use leptos::prelude::*;

use crate::api::Doc;
use super::category_badge::CategoryBadge;

#[component]
pub fn Viewer(
    /// The document to render; nothing is rendered when absent
    doc: Option<Doc>,
) -> impl IntoView {
    doc.map(|doc| {
        view! {
            <div class="max-w-none">
                <h1 class="text-2xl font-bold text-gray-800">{doc.title.clone()}</h1>
                <div class="mt-2">
                    <CategoryBadge category=doc.category.clone() />
                </div>
                {doc
                    .cover_image
                    .clone()
                    .map(|src| view! { <img src=src alt="cover" class="mt-4 rounded-xl" /> })}
                <pre class="mt-4 whitespace-pre-wrap text-gray-800 bg-gray-50 p-4 rounded-xl border border-gray-100">
                    {doc.content.clone()}
                </pre>
            </div>
        }
    })
}
