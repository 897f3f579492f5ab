pub mod category_badge;
pub mod design_system;
pub mod doc_card;
pub mod docs_hub;
pub mod editor;
pub mod search_bar;
pub mod viewer;
