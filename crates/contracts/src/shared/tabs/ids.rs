use super::model::TabModel;

/// DOM ids linking a tab control to its panel
/// (`aria-controls` / `aria-labelledby`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabPairIds {
    pub tab_id: String,
    /// `None` when the tab has no content, so no panel is rendered and the
    /// tab controls nothing.
    pub panel_id: Option<String>,
}

impl TabPairIds {
    /// Builds one pair per tab. `instance` must be unique per mounted
    /// group; ids depend only on it and the slot position.
    pub fn for_model(instance: &str, model: &TabModel) -> Vec<TabPairIds> {
        (0..model.tab_count())
            .map(|index| TabPairIds {
                tab_id: format!("{}-tab-{}", instance, index),
                panel_id: model
                    .has_content(index)
                    .then(|| format!("{}-panel-{}", instance, index)),
            })
            .collect()
    }
}
