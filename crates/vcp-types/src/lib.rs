//! Shared types for the VS Code projects launcher plugin.
//!
//! These are the launcher-facing shapes produced by `vcp-core` and written to
//! the host over the stdio protocol. All types are serializable.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a Vec that may be null or missing (both become empty vec)
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

// Serde skip_serializing_if requires &bool signature
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// One project entry shown in the launcher result list.
///
/// `id` is stable for a given project (`"{path}_{name}"`), which lets the host
/// send it back in an action request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: String,
    pub name: String,

    /// Full project path, shown as the subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    /// Text the launcher puts in the input on tab completion (trigger + name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_null_as_empty_vec"
    )]
    pub actions: Vec<Action>,

    /// Whether selecting this item should keep the launcher open
    #[serde(default, skip_serializing_if = "is_false")]
    pub keep_open: bool,
}

impl ResultItem {
    /// Find an action by id.
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// The action run when the item is activated without an explicit action id.
    #[must_use]
    pub fn default_action(&self) -> Option<&Action> {
        self.actions.first()
    }
}

/// Action on a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    #[serde(default)]
    pub keep_open: bool,
    /// What the host should do when the action is chosen
    pub execute: ExecuteAction,
}

/// Side effect the host launcher performs on behalf of the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExecuteAction {
    /// Spawn an external process
    #[serde(rename = "spawn")]
    Spawn {
        command: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cwd: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spawn_item() -> ResultItem {
        ResultItem {
            id: "/home/me/app_app".to_string(),
            name: "app".to_string(),
            description: Some("/home/me/app".to_string()),
            completion: Some("vc app".to_string()),
            actions: vec![Action {
                id: "open".to_string(),
                name: "Open in VS Code".to_string(),
                icon: None,
                icon_type: None,
                keep_open: false,
                execute: ExecuteAction::Spawn {
                    command: vec!["code".to_string(), "/home/me/app".to_string()],
                    cwd: Some("/home/me/app".to_string()),
                },
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_result_item_serializes_camel_case() {
        let value = serde_json::to_value(spawn_item()).unwrap();

        assert_eq!(value["id"], "/home/me/app_app");
        assert_eq!(value["completion"], "vc app");
        assert_eq!(value["actions"][0]["execute"]["type"], "spawn");
        assert_eq!(value["actions"][0]["execute"]["cwd"], "/home/me/app");
        assert_eq!(value["actions"][0]["keepOpen"], false);
    }

    #[test]
    fn test_result_item_skips_empty_fields() {
        let item = ResultItem {
            id: "x".to_string(),
            name: "x".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(item).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("icon"));
        assert!(!obj.contains_key("actions"));
        assert!(!obj.contains_key("keepOpen"));
    }

    #[test]
    fn test_result_item_null_actions_become_empty() {
        let item: ResultItem =
            serde_json::from_value(json!({"id": "a", "name": "A", "actions": null})).unwrap();
        assert!(item.actions.is_empty());
        assert!(item.default_action().is_none());
    }

    #[test]
    fn test_action_lookup() {
        let item = spawn_item();
        assert!(item.action("open").is_some());
        assert!(item.action("missing").is_none());
        assert_eq!(item.default_action().map(|a| a.id.as_str()), Some("open"));
    }

    #[test]
    fn test_execute_action_tags() {
        let spawn = serde_json::to_value(ExecuteAction::Spawn {
            command: vec!["code".to_string()],
            cwd: None,
        })
        .unwrap();
        assert_eq!(spawn, json!({"type": "spawn", "command": ["code"]}));

        let parsed: ExecuteAction =
            serde_json::from_value(json!({"type": "spawn", "command": ["code", "/p"], "cwd": "/p"}))
                .unwrap();
        assert_eq!(
            parsed,
            ExecuteAction::Spawn {
                command: vec!["code".to_string(), "/p".to_string()],
                cwd: Some("/p".to_string()),
            }
        );
    }
}
