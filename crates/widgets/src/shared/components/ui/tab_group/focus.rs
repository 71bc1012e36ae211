use leptos::html::Ol;
use leptos::prelude::*;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TAB_BUTTON_SELECTOR: &str = r#"[role="tab"] button"#;

/// The DOM around a tab group does not look like the one it rendered.
/// Treated as a bug in the embedding page, so the interaction is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStructureError {
    /// The tab list element is not mounted.
    Detached,
    /// The referenced element lost its `tablist` role.
    NotATabList { role: Option<String> },
    /// The tab button lookup itself failed.
    Query(String),
    /// Number of tab buttons differs from the number of tabs rendered.
    TabCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for TabStructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabStructureError::Detached => write!(f, "tab list is not mounted"),
            TabStructureError::NotATabList { role } => write!(
                f,
                "expected role=\"tablist\", found {}",
                role.as_deref().unwrap_or("no role")
            ),
            TabStructureError::Query(cause) => write!(f, "unable to query tab buttons: {}", cause),
            TabStructureError::TabCountMismatch { expected, found } => write!(
                f,
                "expected {} tab buttons, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for TabStructureError {}

/// Moves keyboard focus to the tab button at `index`. Selection is left
/// untouched.
pub fn focus_tab(
    tab_list: NodeRef<Ol>,
    index: usize,
    expected: usize,
) -> Result<(), TabStructureError> {
    let list = tab_list.get_untracked().ok_or(TabStructureError::Detached)?;

    let role = list.get_attribute("role");
    if role.as_deref() != Some("tablist") {
        return Err(TabStructureError::NotATabList { role });
    }

    let buttons = list
        .query_selector_all(TAB_BUTTON_SELECTOR)
        .map_err(|err| TabStructureError::Query(format!("{:?}", err)))?;
    let found = buttons.length() as usize;
    if found != expected {
        return Err(TabStructureError::TabCountMismatch { expected, found });
    }

    let button = buttons
        .get(index as u32)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .ok_or(TabStructureError::TabCountMismatch { expected, found })?;
    if let Err(err) = button.focus() {
        log::warn!("[Tabs] unable to focus tab {}: {:?}", index, err);
    }
    Ok(())
}
