//! Search Bar Component
//!
//! Controlled text query and category filter. Every keystroke writes the
//! page state directly; debouncing the resulting reload is the page's
//! responsibility, not this component's.

use leptos::prelude::*;
use phosphor_leptos::{Icon, MAGNIFYING_GLASS};

use super::docs_hub::use_hub_state;
use super::design_system::Select;

#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_hub_state();

    view! {
        <div class="max-w-6xl mx-auto px-4 pt-8 pb-4">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                <div class="md:col-span-3">
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">
                            <Icon icon=MAGNIFYING_GLASS size="18px" />
                        </span>
                        <input
                            type="text"
                            class="w-full pl-10 pr-4 py-3 rounded-xl border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                            placeholder="Buscar documentación..."
                            prop:value=move || state.query.get()
                            on:input=move |evt| state.query.set(event_target_value(&evt))
                        />
                    </div>
                </div>
                <Select value=state.category class="rounded-xl">
                    <option value="">"Todas las categorías"</option>
                    <option value="linux">"Linux"</option>
                    <option value="windows">"Windows"</option>
                    <option value="web">"Web"</option>
                </Select>
            </div>
        </div>
    }
}
