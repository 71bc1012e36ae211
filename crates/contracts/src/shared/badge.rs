use serde::{Deserialize, Serialize};

/// Visual category of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl BadgeVariant {
    /// CSS modifier class, e.g. `badge--positive`.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge--neutral",
            BadgeVariant::Positive => "badge--positive",
            BadgeVariant::Negative => "badge--negative",
        }
    }
}

/// A badge attached to a tab title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeConfiguration {
    #[serde(default)]
    pub variant: BadgeVariant,
    #[serde(alias = "children")]
    pub content: String,
}

impl BadgeConfiguration {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            variant: BadgeVariant::default(),
            content: content.into(),
        }
    }

    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_neutral() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Neutral);
        assert_eq!(BadgeConfiguration::new("New").variant, BadgeVariant::Neutral);
    }

    #[test]
    fn test_missing_variant_deserializes_as_neutral() {
        let badge: BadgeConfiguration = serde_json::from_str(r#"{"content":"Beta"}"#).unwrap();
        assert_eq!(badge.variant, BadgeVariant::Neutral);
        assert_eq!(badge.content, "Beta");
    }

    #[test]
    fn test_children_alias() {
        let badge: BadgeConfiguration =
            serde_json::from_str(r#"{"variant":"positive","children":"New"}"#).unwrap();
        assert_eq!(badge.variant, BadgeVariant::Positive);
        assert_eq!(badge.content, "New");
    }

    #[test]
    fn test_css_class() {
        assert_eq!(BadgeVariant::Neutral.css_class(), "badge--neutral");
        assert_eq!(BadgeVariant::Negative.css_class(), "badge--negative");
        assert_eq!(BadgeVariant::Positive.css_class(), "badge--positive");
    }
}
