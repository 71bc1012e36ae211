use crate::pages::showcase::ShowcasePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ShowcasePage />
    }
}
