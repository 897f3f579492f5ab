//! Document Editor Component
//!
//! Creation form shown inside the editor modal: title, category, tags,
//! optional cover upload and raw content. The backend is the sole judge of
//! the draft; no required-field validation happens client-side.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, IMAGE};

use crate::api::{self, NewDoc};
use crate::utils::tags::parse_tags;
use super::category_badge::Category;
use super::design_system::{Button, Input, Select};

#[component]
pub fn Editor(
    /// Invoked after a successful save; the parent closes the modal and
    /// reloads the list
    #[prop(into)]
    on_saved: Callback<()>,
) -> impl IntoView {
    // Draft state. It lives with the mounted editor and is never cleared by
    // the submit path, so a failed save keeps every field intact.
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(Category::Linux.as_str().to_string());
    let tags_input = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let cover = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let on_cover_selected = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match api::upload_file(&file).await {
                Ok(resp) => cover.set(Some(resp.data_url)),
                Err(e) => log::error!("Cover upload failed: {}", e),
            }
        });
    };

    let submit = move |_: ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);

        let draft = NewDoc {
            title: title.get_untracked(),
            category: category.get_untracked(),
            content: content.get_untracked(),
            tags: parse_tags(&tags_input.get_untracked()),
            cover_image: cover.get_untracked(),
        };

        spawn_local(async move {
            match api::create_doc(&draft).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save document: {}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Error al guardar");
                    }
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="text-sm text-gray-600">"Título"</label>
                    <div class="mt-1">
                        <Input value=title />
                    </div>
                </div>
                <div>
                    <label class="text-sm text-gray-600">"Categoría"</label>
                    <div class="mt-1">
                        <Select value=category>
                            {Category::all()
                                .iter()
                                .map(|cat| {
                                    view! {
                                        <option value=cat.as_str()>{cat.label()}</option>
                                    }
                                })
                                .collect_view()}
                        </Select>
                    </div>
                </div>
            </div>

            <div>
                <label class="text-sm text-gray-600">"Tags (separados por coma)"</label>
                <div class="mt-1">
                    <Input value=tags_input />
                </div>
            </div>

            <div>
                <label class="text-sm text-gray-600 flex items-center gap-2">
                    "Portada"
                    <Icon icon=IMAGE size="16px" />
                </label>
                <div class="mt-2 flex items-center gap-3">
                    // The accept hint is advisory; nothing is enforced here.
                    <input type="file" accept="image/*" on:change=on_cover_selected />
                    {move || {
                        cover
                            .get()
                            .map(|src| view! { <img src=src alt="cover" class="h-16 rounded" /> })
                    }}
                </div>
            </div>

            <div>
                <label class="text-sm text-gray-600">"Contenido (Markdown o texto)"</label>
                <textarea
                    rows="10"
                    class="w-full mt-1 px-3 py-2 rounded-lg border border-gray-200 focus:ring-2 focus:ring-indigo-500 focus:outline-none"
                    placeholder="# Título\nContenido aquí..."
                    prop:value=move || content.get()
                    on:input=move |evt| content.set(event_target_value(&evt))
                ></textarea>
            </div>

            <div class="flex justify-end">
                <Button loading=saving on_click=submit class="px-4">
                    {move || if saving.get() { "Guardando..." } else { "Guardar documento" }}
                </Button>
            </div>
        </div>
    }
}
