use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown with two-way signal binding.
#[component]
pub fn Select(
    /// Current selected value
    #[prop(into)]
    value: RwSignal<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let base_class = "w-full bg-white px-3 py-2 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        let target = event_target::<web_sys::HtmlSelectElement>(&evt);
        value.set(target.value());
    };

    view! {
        <select
            class=full_class
            on:change=handle_change
            prop:value=move || value.get()
        >
            {children()}
        </select>
    }
}
