use leptos::prelude::*;

/// Badge variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral gray, also the fallback for unrecognized categories.
    #[default]
    Default,
    Success,
    Info,
    Accent,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-100 text-gray-700",
            BadgeVariant::Success => "bg-emerald-100 text-emerald-700",
            BadgeVariant::Info => "bg-blue-100 text-blue-700",
            BadgeVariant::Accent => "bg-purple-100 text-purple-700",
        }
    }
}

/// A rounded pill badge.
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "px-2 py-1 rounded-full text-xs font-medium";
    let variant_class = variant.class();
    let full_class = format!("{base_class} {variant_class} {class}");

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
