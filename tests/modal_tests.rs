//! Modal Component Tests
//!
//! Verifies the modal's DOM-presence contract: nothing is rendered while
//! closed, backdrop clicks close, content clicks do not.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use docs_hub_frontend::components::design_system::Modal;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// Mounted views are leaked by `mount_to_body`; start each test from a
// clean slate so earlier fixtures cannot satisfy a selector.
fn reset_body() {
    document().body().unwrap().set_inner_html("");
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .expect("element should exist")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn test_closed_modal_renders_nothing() {
    reset_body();
    leptos::mount::mount_to_body(|| {
        view! {
            <Modal
                open=Signal::derive(|| false)
                title="Nuevo documento"
                on_close=Callback::new(|_| {})
            >
                <div id="modal-probe">"body"</div>
            </Modal>
        }
    });

    // Not merely hidden: the nodes must not exist at all.
    assert!(document()
        .query_selector("[data-modal-backdrop]")
        .unwrap()
        .is_none());
    assert!(document().get_element_by_id("modal-probe").is_none());
}

#[wasm_bindgen_test]
fn test_open_modal_renders_title_and_content() {
    reset_body();
    leptos::mount::mount_to_body(|| {
        view! {
            <Modal
                open=Signal::derive(|| true)
                title="Nuevo documento"
                on_close=Callback::new(|_| {})
            >
                <div id="modal-probe">"body"</div>
            </Modal>
        }
    });

    assert!(document()
        .query_selector("[data-modal-backdrop]")
        .unwrap()
        .is_some());
    assert!(document().get_element_by_id("modal-probe").is_some());

    let header = document().query_selector("h3").unwrap().unwrap();
    assert_eq!(header.text_content().as_deref(), Some("Nuevo documento"));
}

#[wasm_bindgen_test]
async fn test_content_click_does_not_close() {
    let open = RwSignal::new(true);

    reset_body();
    leptos::mount::mount_to_body(move || {
        view! {
            <Modal
                open=Signal::derive(move || open.get())
                title="Documento"
                on_close=Callback::new(move |_| open.set(false))
            >
                <div id="modal-probe">"body"</div>
            </Modal>
        }
    });

    // Clicks bubble from the content up to the panel, which stops them
    // before they reach the backdrop handler.
    click("#modal-probe");
    TimeoutFuture::new(25).await;
    assert!(open.get_untracked(), "content click must not close the modal");

    click("[data-modal-panel]");
    TimeoutFuture::new(25).await;
    assert!(open.get_untracked(), "panel click must not close the modal");
}

#[wasm_bindgen_test]
async fn test_backdrop_click_closes() {
    let open = RwSignal::new(true);

    reset_body();
    leptos::mount::mount_to_body(move || {
        view! {
            <Modal
                open=Signal::derive(move || open.get())
                title="Documento"
                on_close=Callback::new(move |_| open.set(false))
            >
                <div id="modal-probe">"body"</div>
            </Modal>
        }
    });

    click("[data-modal-backdrop]");
    TimeoutFuture::new(25).await;

    assert!(!open.get_untracked(), "backdrop click must close the modal");
    assert!(
        document()
            .query_selector("[data-modal-backdrop]")
            .unwrap()
            .is_none(),
        "a closed modal leaves no DOM behind"
    );
}
