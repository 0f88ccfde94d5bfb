#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of the generated route controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ControllerStyle {
    /// Handlers query, find and save the model through Fluent.
    #[default]
    Persistence,
    /// Handlers only answer `200 OK`.
    Minimal,
}

impl ControllerStyle {
    pub fn is_persistence(self) -> bool {
        matches!(self, ControllerStyle::Persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::ControllerStyle;

    #[test]
    fn default_is_persistence() {
        assert_eq!(ControllerStyle::default(), ControllerStyle::Persistence);
        assert!(ControllerStyle::default().is_persistence());
        assert!(!ControllerStyle::Minimal.is_persistence());
    }

    #[test]
    fn serde_lowercase() {
        let style: ControllerStyle = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(style, ControllerStyle::Minimal);
    }
}
