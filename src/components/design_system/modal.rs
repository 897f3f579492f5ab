use leptos::ev;
use leptos::prelude::*;

/// A modal dialog shell used by both the editor and the viewer.
///
/// While `open` is false nothing is rendered at all; the overlay and its
/// children only exist in the DOM for an open modal. Clicks on the dimmed
/// backdrop close the modal; clicks inside the content panel are stopped
/// before they reach the backdrop handler.
#[component]
pub fn Modal(
    /// Whether the modal is visible
    #[prop(into)]
    open: Signal<bool>,
    /// Title shown in the modal header
    #[prop(into)]
    title: String,
    /// Invoked on backdrop click and on the header close control
    #[prop(into)]
    on_close: Callback<()>,
    /// Modal content, rebuilt each time the modal opens
    children: ChildrenFn,
) -> impl IntoView {
    let handle_backdrop_click = move |_: ev::MouseEvent| on_close.run(());
    let handle_content_click = move |evt: ev::MouseEvent| evt.stop_propagation();

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/30 backdrop-blur-sm z-50 flex items-center justify-center p-4"
                data-modal-backdrop=""
                on:click=handle_backdrop_click
            >
                <div
                    class="w-full max-w-3xl max-h-[85vh] overflow-y-auto bg-white rounded-2xl shadow-xl border border-gray-100"
                    data-modal-panel=""
                    on:click=handle_content_click
                >
                    <div class="flex items-center justify-between p-4 border-b border-gray-100">
                        <h3 class="font-semibold text-gray-800">{title.clone()}</h3>
                        <button
                            class="text-gray-500 hover:text-gray-700"
                            on:click=move |_| on_close.run(())
                        >
                            "Cerrar"
                        </button>
                    </div>
                    <div class="p-4">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
