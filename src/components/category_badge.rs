//! Category Badge Component
//!
//! Maps a document category code to a label, icon and badge style.

use leptos::prelude::*;
use phosphor_leptos::{Icon, FILE_TEXT, GLOBE, LAPTOP, MONITOR};

use super::design_system::{Badge, BadgeVariant};

/// The fixed category set. Anything else renders through the fallback
/// branch of [`CategoryBadge`] and must never error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Linux,
    Windows,
    Web,
}

impl Category {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "linux" => Some(Category::Linux),
            "windows" => Some(Category::Windows),
            "web" => Some(Category::Web),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Linux => "linux",
            Category::Windows => "windows",
            Category::Web => "web",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Linux => "Linux",
            Category::Windows => "Windows",
            Category::Web => "Web",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Category::Linux => BadgeVariant::Success,
            Category::Windows => BadgeVariant::Info,
            Category::Web => BadgeVariant::Accent,
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Linux, Category::Windows, Category::Web]
    }
}

/// Category pill shown on cards and in the viewer. Unrecognized codes fall
/// back to the raw code as label with a generic document icon.
#[component]
pub fn CategoryBadge(
    /// Raw category code as stored on the document
    #[prop(into)]
    category: String,
) -> impl IntoView {
    let parsed = Category::parse(&category);

    let (label, variant) = match parsed {
        Some(cat) => (cat.label().to_string(), cat.badge_variant()),
        None => (category, BadgeVariant::Default),
    };

    let icon = match parsed {
        Some(Category::Linux) => view! { <Icon icon=LAPTOP size="14px" /> },
        Some(Category::Windows) => view! { <Icon icon=MONITOR size="14px" /> },
        Some(Category::Web) => view! { <Icon icon=GLOBE size="14px" /> },
        None => view! { <Icon icon=FILE_TEXT size="14px" /> },
    };

    view! {
        <Badge variant=variant class="inline-flex items-center gap-1">
            {icon}
            {label}
        </Badge>
    }
}
