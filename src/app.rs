use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::docs_hub::DocsHub;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="p-8 text-gray-500">"404"</div> }>
                <Route path=path!("/") view=DocsHub />
            </Routes>
        </Router>
    }
}
