use crate::shared::badge::BadgeConfiguration;
use serde::{Deserialize, Serialize};

/// Raw tab title as supplied by the caller: a bare label or a label with a
/// badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabConfiguration {
    Label(String),
    Detailed {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<BadgeConfiguration>,
    },
}

impl TabConfiguration {
    pub fn with_badge(label: impl Into<String>, badge: BadgeConfiguration) -> Self {
        TabConfiguration::Detailed {
            label: label.into(),
            badge: Some(badge),
        }
    }
}

impl From<&str> for TabConfiguration {
    fn from(label: &str) -> Self {
        TabConfiguration::Label(label.to_string())
    }
}

impl From<String> for TabConfiguration {
    fn from(label: String) -> Self {
        TabConfiguration::Label(label)
    }
}

/// Normalized tab title. The label doubles as the list key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTitle {
    pub label: String,
    pub badge: Option<BadgeConfiguration>,
}

impl From<TabConfiguration> for TabTitle {
    fn from(config: TabConfiguration) -> Self {
        match config {
            TabConfiguration::Label(label) => TabTitle { label, badge: None },
            TabConfiguration::Detailed { label, badge } => TabTitle { label, badge },
        }
    }
}
