use crate::shared::components::ui::{Badge, Panel, TabGroup, TitledTabGroup};
use contracts::shared::badge::{BadgeConfiguration, BadgeVariant};
use contracts::shared::tabs::{Diagnostic, TabConfiguration, TabVariant};
use leptos::prelude::*;

/// Demo page mounted by `App`: standalone badges and two tab groups, the
/// second one deliberately misconfigured so its diagnostics are visible.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    let diagnostics = RwSignal::new(Vec::<Diagnostic>::new());
    let on_diagnostic = Callback::new(move |diagnostic: Diagnostic| {
        diagnostics.update(|list| list.push(diagnostic));
    });

    let badged_title = TabConfiguration::with_badge(
        "Fourth",
        BadgeConfiguration::new("New").with_variant(BadgeVariant::Positive),
    );

    view! {
        <div class="showcase">
            <h1>"Widgets"</h1>

            <section class="showcase__section">
                <h2>"Badge"</h2>
                <Badge>"Neutral"</Badge>
                <Badge variant=BadgeVariant::Positive>"Positive"</Badge>
                <Badge variant=BadgeVariant::Negative>"Negative"</Badge>
            </section>

            <section class="showcase__section">
                <h2>"Tab group"</h2>
                <TabGroup accessible_title="Example tab group">
                    <Panel slot title="First">
                        <p>"The default data that will be shown on arrival"</p>
                    </Panel>
                    <Panel slot title="Second">
                        <p>"The content of another tab"</p>
                    </Panel>
                    <Panel slot title="Third">
                        <p>"Yet " <em>"more"</em> " content."</p>
                        <p>"This time there's more than before."</p>
                    </Panel>
                    <Panel slot title=badged_title>
                        <p>"A tab with a badge."</p>
                    </Panel>
                </TabGroup>
            </section>

            <section class="showcase__section">
                <h2>"Misconfigured tab group"</h2>
                <TitledTabGroup
                    accessible_title="Misconfigured tab group"
                    titles=vec!["Tab".into(), "tab".into(), "Orphan".into()]
                    panels=vec![
                        ViewFn::from(|| view! { <p>"Lorem ipsum"</p> }),
                        ViewFn::from(|| view! { <p>"Lorem ipsum dolor sit amet"</p> }),
                    ]
                    variant=TabVariant::Underline
                    on_diagnostic=on_diagnostic
                />
                <ul class="showcase__diagnostics">
                    <For
                        each=move || diagnostics.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=|(_, diagnostic)| view! { <li>{diagnostic.to_string()}</li> }
                    />
                </ul>
            </section>
        </div>
    }
}
