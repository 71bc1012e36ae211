use contracts::shared::badge::BadgeVariant;
use leptos::prelude::*;

/// Inline label with a neutral, positive or negative treatment.
/// Children should be text or an inline element; they are always wrapped
/// in a `span`.
#[component]
pub fn Badge(
    /// Badge variant, `BadgeVariant::Neutral` when omitted
    #[prop(optional, into)]
    variant: MaybeProp<BadgeVariant>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant.get().unwrap_or_default().css_class();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
