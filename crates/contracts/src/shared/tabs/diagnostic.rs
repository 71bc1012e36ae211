use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Two or more labels are equal ignoring case.
    DuplicateTitles,
    /// Title count differs from panel count.
    PanelCountMismatch,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::DuplicateTitles => "duplicate_titles",
            DiagnosticKind::PanelCountMismatch => "panel_count_mismatch",
        }
    }
}

/// Non-fatal warning about how a tab group was configured. The host decides
/// whether to log, collect or drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn duplicate_titles() -> Self {
        Self::new(
            DiagnosticKind::DuplicateTitles,
            "There are duplicated titles and the navigation will not work as intended. \
             Ensure that the tab titles are unique for accessibility.",
        )
    }

    pub fn panel_count_mismatch(titles: usize, panels: usize) -> Self {
        Self::new(
            DiagnosticKind::PanelCountMismatch,
            format!(
                "Got {} titles for {} panels; only the first {} tabs have content.",
                titles,
                panels,
                titles.min(panels)
            ),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Tabs] {}: {}", self.kind.as_str(), self.message)
    }
}
