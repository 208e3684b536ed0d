//! Template override documents.
//!
//! A process may replace built-in default templates (for example to localize
//! messages) with a TOML document keyed by requirement identifier:
//!
//! ```toml
//! [templates]
//! between = "{ValueExpression} liegt nicht zwischen {LowerBound} und {UpperBound}"
//! not_null = "{ValueExpression} fehlt"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Replacement default templates, keyed by [`Requirement::id`](crate::Requirement::id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateOverrides {
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

impl TemplateOverrides {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
