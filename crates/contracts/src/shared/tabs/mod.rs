//! Tab group model: title normalization, validation diagnostics, selection
//! state and roving-focus navigation.

pub mod controller;
pub mod diagnostic;
pub mod ids;
pub mod model;
pub mod title;

pub use controller::{NavKey, PanelAttrs, PanelVisibility, TabAttrs, TabListController};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use ids::TabPairIds;
pub use model::TabModel;
pub use title::{TabConfiguration, TabTitle};

/// Chrome of the tab list. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabVariant {
    #[default]
    Pill,
    Underline,
}

impl TabVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            TabVariant::Pill => "tab-list--pill",
            TabVariant::Underline => "tab-list--underline",
        }
    }
}
