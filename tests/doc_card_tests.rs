//! DocCard and CategoryBadge rendering tests.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use docs_hub_frontend::api::DocSummary;
use docs_hub_frontend::components::category_badge::CategoryBadge;
use docs_hub_frontend::components::doc_card::DocCard;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// Mounted views are leaked by `mount_to_body`; start each test from a
// clean slate so earlier fixtures cannot satisfy a selector.
fn reset_body() {
    document().body().unwrap().set_inner_html("");
}

fn summary(slug: &str, title: &str, category: &str, tags: &[&str]) -> DocSummary {
    DocSummary {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover_image: None,
    }
}

#[wasm_bindgen_test]
fn test_card_shows_title_and_at_most_four_tags() {
    let doc = summary(
        "a",
        "Intro Linux",
        "linux",
        &["one", "two", "three", "four", "five", "six"],
    );

    reset_body();
    leptos::mount::mount_to_body(move || {
        view! { <DocCard doc=doc.clone() on_open=Callback::new(|_| {}) /> }
    });

    let pills = document().query_selector_all("[data-tag-pill]").unwrap();
    assert_eq!(pills.length(), 4, "extra tags are silently omitted");
    // Order is preserved from the summary.
    assert_eq!(
        pills.get(0).unwrap().text_content().as_deref(),
        Some("#one")
    );

    let title = document().query_selector("h3").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Intro Linux"));
}

#[wasm_bindgen_test]
fn test_card_click_reports_the_summary() {
    let doc = summary("intro-linux", "Intro Linux", "linux", &["setup"]);
    let opened = RwSignal::new(Option::<String>::None);

    reset_body();
    leptos::mount::mount_to_body(move || {
        view! {
            <DocCard
                doc=doc.clone()
                on_open=Callback::new(move |d: DocSummary| opened.set(Some(d.slug)))
            />
        }
    });

    document()
        .query_selector("[data-doc-card]")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();

    assert_eq!(opened.get_untracked().as_deref(), Some("intro-linux"));
}

#[wasm_bindgen_test]
fn test_known_category_renders_fixed_label() {
    reset_body();
    leptos::mount::mount_to_body(|| {
        view! { <CategoryBadge category="linux" /> }
    });

    let body_text = document().body().unwrap().text_content().unwrap_or_default();
    assert!(body_text.contains("Linux"));
}

#[wasm_bindgen_test]
fn test_unknown_category_falls_back_to_raw_label() {
    reset_body();
    leptos::mount::mount_to_body(|| {
        view! { <CategoryBadge category="plan9" /> }
    });

    let body_text = document().body().unwrap().text_content().unwrap_or_default();
    assert!(
        body_text.contains("plan9"),
        "fallback label is the raw category code"
    );
}
