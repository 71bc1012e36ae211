//! Tab group with roving-tabindex keyboard navigation.
//!
//! Selection changes only on click (or Enter/Space, which the browser turns
//! into a click on the focused button). Arrow keys, Home and End move focus
//! between tabs without selecting them.

mod diagnostics;
mod focus;

pub use focus::TabStructureError;

use super::badge::Badge;
use contracts::shared::tabs::{
    Diagnostic, NavKey, PanelVisibility, TabConfiguration, TabListController, TabModel,
    TabPairIds, TabVariant,
};
use diagnostics::report_diagnostics;
use focus::focus_tab;
use leptos::html::Ol;
use leptos::prelude::*;
use uuid::Uuid;

/// One tab of a [`TabGroup`]: its title and the content of its panel.
#[slot]
pub struct Panel {
    /// Plain label or label with badge
    #[prop(into)]
    title: TabConfiguration,
    children: ChildrenFn,
}

/// Tab group built from `<Panel slot title=..>` children.
#[component]
pub fn TabGroup(
    /// Accessible name of the tab list (`aria-label`)
    #[prop(into)]
    accessible_title: String,
    /// Tabs in display order
    #[prop(optional)]
    panel: Vec<Panel>,
    /// Tab list chrome, pill by default
    #[prop(optional)]
    variant: TabVariant,
    /// Which panels are exposed, the active one by default
    #[prop(optional)]
    panel_visibility: PanelVisibility,
    /// Receives configuration warnings instead of the console
    #[prop(optional)]
    on_diagnostic: Option<Callback<Diagnostic>>,
) -> impl IntoView {
    let (titles, panels): (Vec<TabConfiguration>, Vec<ViewFn>) = panel
        .into_iter()
        .map(|panel| {
            let children = panel.children;
            (panel.title, ViewFn::from(move || children()))
        })
        .unzip();

    tab_group_view(
        accessible_title,
        titles,
        panels,
        variant,
        panel_visibility,
        on_diagnostic,
    )
}

/// Tab group built from separate title and panel lists, paired by position.
/// Counts may differ: extra titles get a tab without a panel, extra panels
/// are dropped.
#[component]
pub fn TitledTabGroup(
    /// Accessible name of the tab list (`aria-label`)
    #[prop(into)]
    accessible_title: String,
    /// One entry per tab, plain label or label with badge
    titles: Vec<TabConfiguration>,
    /// Panel contents
    panels: Vec<ViewFn>,
    #[prop(optional)]
    variant: TabVariant,
    #[prop(optional)]
    panel_visibility: PanelVisibility,
    #[prop(optional)]
    on_diagnostic: Option<Callback<Diagnostic>>,
) -> impl IntoView {
    tab_group_view(
        accessible_title,
        titles,
        panels,
        variant,
        panel_visibility,
        on_diagnostic,
    )
}

fn tab_group_view(
    accessible_title: String,
    titles: Vec<TabConfiguration>,
    panels: Vec<ViewFn>,
    variant: TabVariant,
    panel_visibility: PanelVisibility,
    on_diagnostic: Option<Callback<Diagnostic>>,
) -> impl IntoView {
    let model = TabModel::new(titles, panels.len());
    report_diagnostics(model.diagnostics(), on_diagnostic);

    let tab_count = model.tab_count();

    // Generated once per mounted group, stable across re-renders.
    let instance = format!("tabs-{}", Uuid::new_v4().simple());
    let pair_ids = TabPairIds::for_model(&instance, &model);
    log::debug!("[Tabs] mounted {} with {} tabs", instance, tab_count);

    let controller = RwSignal::new(TabListController::new(tab_count));
    let tab_list_ref = NodeRef::<Ol>::new();

    let (titles, _) = model.into_parts();

    let tab_views = titles
        .into_iter()
        .zip(pair_ids.iter().cloned())
        .enumerate()
        .map(|(index, (title, ids))| {
            let aria_selected = move || controller.with(|c| c.tab_attrs(index).aria_selected);
            let tab_index = move || controller.with(|c| c.tab_attrs(index).tab_index);

            let label_for_log = title.label.clone();
            let on_click = move |_| {
                controller.update(|c| {
                    if c.select(index) {
                        log::debug!("[Tabs] selected {} '{}'", index, label_for_log);
                    }
                });
            };

            let on_keydown = move |ev: web_sys::KeyboardEvent| {
                let Some(key) = NavKey::from_key(&ev.key(), ev.meta_key()) else {
                    return;
                };
                let Some(target) =
                    controller.with_untracked(|c| c.next_focus_index(index, key))
                else {
                    return;
                };
                ev.prevent_default();
                if let Err(err) = focus_tab(tab_list_ref, target, tab_count) {
                    log::error!("[Tabs] broken structure, unable to move focus: {}", err);
                }
            };

            let badge = title.badge.map(|badge| {
                view! { <Badge variant=badge.variant>{badge.content}</Badge> }
            });

            // Tabs without content have no panel to point at.
            view! {
                <li
                    role="tab"
                    class="tab-list__tab"
                    id=ids.tab_id
                    aria-controls=ids.panel_id
                    aria-selected=aria_selected
                >
                    <button
                        type="button"
                        class="tab-list__button"
                        tabindex=tab_index
                        on:click=on_click
                        on:keydown=on_keydown
                    >
                        {title.label}
                        {badge}
                    </button>
                </li>
            }
        })
        .collect_view();

    // Only slots with content get a panel; panels past the title count have
    // no ids and are dropped by the zip.
    let panel_views = panels
        .into_iter()
        .zip(pair_ids)
        .enumerate()
        .filter_map(|(index, (content, ids))| {
            let panel_id = ids.panel_id?;
            let attrs = move || controller.with(|c| c.panel_attrs(index, panel_visibility));

            Some(view! {
                <section
                    role="tabpanel"
                    class="tab-panel"
                    id=panel_id
                    aria-labelledby=ids.tab_id
                    hidden=move || attrs().hidden
                    tabindex=move || attrs().tab_index
                >
                    {content.run()}
                </section>
            })
        })
        .collect_view();

    view! {
        <div class="tab-group">
            <ol
                node_ref=tab_list_ref
                role="tablist"
                class=format!("tab-list {}", variant.css_class())
                aria-label=accessible_title
            >
                {tab_views}
            </ol>

            {panel_views}
        </div>
    }
}
