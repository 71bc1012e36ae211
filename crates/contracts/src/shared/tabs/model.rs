use super::diagnostic::Diagnostic;
use super::title::{TabConfiguration, TabTitle};
use std::collections::HashSet;

/// Normalized titles of a tab group, positionally paired with panel slots.
///
/// Construction never fails. Anomalies in the caller's configuration are
/// collected as [`Diagnostic`]s and rendering proceeds with best-effort
/// pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct TabModel {
    titles: Vec<TabTitle>,
    panel_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl TabModel {
    pub fn new<I>(titles: I, panel_count: usize) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TabConfiguration>,
    {
        let titles: Vec<TabTitle> = titles
            .into_iter()
            .map(|config| TabTitle::from(config.into()))
            .collect();

        let mut diagnostics = Vec::new();
        if has_duplicate_labels(&titles) {
            diagnostics.push(Diagnostic::duplicate_titles());
        }
        if titles.len() != panel_count {
            diagnostics.push(Diagnostic::panel_count_mismatch(titles.len(), panel_count));
        }

        Self {
            titles,
            panel_count,
            diagnostics,
        }
    }

    /// Number of tab controls rendered, one per title.
    pub fn tab_count(&self) -> usize {
        self.titles.len()
    }

    /// Slots that have both a title and panel content.
    pub fn paired_count(&self) -> usize {
        self.titles.len().min(self.panel_count)
    }

    /// Whether the tab at `index` has panel content to show.
    pub fn has_content(&self, index: usize) -> bool {
        index < self.paired_count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<TabTitle>, Vec<Diagnostic>) {
        (self.titles, self.diagnostics)
    }
}

/// Case-insensitive. Uniqueness is advisory, so this only reports.
fn has_duplicate_labels(titles: &[TabTitle]) -> bool {
    let unique: HashSet<String> = titles.iter().map(|t| t.label.to_lowercase()).collect();
    unique.len() < titles.len()
}
