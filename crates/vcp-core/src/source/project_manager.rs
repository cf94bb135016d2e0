//! Project Manager extension (`alefragnani.project-manager`) project list.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// One user-curated project from `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefinition {
    pub root_path: String,
    pub name: String,
    pub enabled: bool,

    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
}

/// Keep the string elements of a tag list; anything else counts as no tags.
fn deserialize_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Parsed `projects.json`. Only well-formed definitions are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManagerDocument {
    projects: Vec<ProjectDefinition>,
}

impl ProjectManagerDocument {
    #[must_use]
    pub fn new(projects: Vec<ProjectDefinition>) -> Self {
        Self { projects }
    }

    /// Build from a parsed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the top-level value is not an array.
    pub fn from_value(root: &Value) -> Result<Self> {
        let Value::Array(items) = root else {
            return Err(Error::Source(
                "projects.json must contain an array".to_string(),
            ));
        };

        let projects: Vec<ProjectDefinition> = items
            .iter()
            .filter_map(|item| ProjectDefinition::deserialize(item).ok())
            .collect();

        let skipped = items.len() - projects.len();
        if skipped > 0 {
            debug!("Skipped {skipped} malformed Project Manager entries");
        }

        Ok(Self { projects })
    }

    /// Parse document content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON array.
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        Self::from_value(&root)
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectDefinition] {
        &self.projects
    }
}
