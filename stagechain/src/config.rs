//! Configuration types for sequences.

use crate::errors::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`Sequence`](crate::sequence::Sequence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Optional name, recorded on tracing spans.
    #[serde(default)]
    pub name: Option<String>,
    /// Text rendered by `describe` for a sequence with no stages.
    #[serde(default = "default_empty_marker")]
    pub empty_marker: String,
    /// Whether the last stage must also hold an output after a push.
    #[serde(default)]
    pub strict_terminal: bool,
}

fn default_empty_marker() -> String {
    crate::sequence::EMPTY_SEQUENCE_MARKER.to_string()
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            name: None,
            empty_marker: default_empty_marker(),
            strict_terminal: false,
        }
    }
}

impl SequenceConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the empty marker.
    #[must_use]
    pub fn with_empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    /// Sets whether the last stage must hold an output after a push.
    #[must_use]
    pub fn with_strict_terminal(mut self, strict: bool) -> Self {
        self.strict_terminal = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SequenceConfig::new();
        assert_eq!(config.name, None);
        assert_eq!(config.empty_marker, "(empty)");
        assert!(!config.strict_terminal);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SequenceConfig::from_json(r#"{"name": "edges", "strict_terminal": true}"#)
            .unwrap();
        assert_eq!(config.name.as_deref(), Some("edges"));
        assert!(config.strict_terminal);
        assert_eq!(config.empty_marker, "(empty)");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SequenceConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_builder_setters() {
        let config = SequenceConfig::new()
            .with_name("ocr")
            .with_empty_marker("nil")
            .with_strict_terminal(true);
        assert_eq!(config.name.as_deref(), Some("ocr"));
        assert_eq!(config.empty_marker, "nil");
        assert!(config.strict_terminal);
    }
}
