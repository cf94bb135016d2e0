use serde::{Deserialize, Serialize};
use vcp_types::{ExecuteAction, ResultItem};

/// Request from the launcher (one JSON object per stdin line)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInput {
    pub step: Step,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<SelectedItem>,

    /// Action id on the selected item; the item's default action when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl PluginInput {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            step: Step::Initial,
            query: None,
            selected: None,
            action: None,
        }
    }

    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            step: Step::Search,
            query: Some(query.into()),
            ..Self::initial()
        }
    }

    #[must_use]
    pub fn action(item_id: impl Into<String>) -> Self {
        Self {
            step: Step::Action,
            selected: Some(SelectedItem { id: item_id.into() }),
            ..Self::initial()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Initial,
    Search,
    Action,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedItem {
    pub id: String,
}

/// Response to the launcher (one JSON object per stdout line)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PluginResponse {
    Results {
        items: Vec<ResultItem>,

        /// Items are already ranked; the launcher must keep this order
        #[serde(default, rename = "disableSort")]
        disable_sort: bool,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    Execute {
        execute: ExecuteAction,

        #[serde(default)]
        close: bool,
    },

    Error {
        message: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl PluginResponse {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            details: None,
        }
    }
}
