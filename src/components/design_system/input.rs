use leptos::ev;
use leptos::prelude::*;

/// A styled text input with two-way signal binding.
#[component]
pub fn Input(
    /// The current value
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Whether the input is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full px-3 py-2 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <input
            class=full_class
            type="text"
            prop:value=move || value.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}
