use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Launcher manifest (`manifest.json`) describing this plugin to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    pub handler: Handler,

    #[serde(default)]
    pub input_mode: InputMode,
}

/// Handler type for plugin communication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerType {
    /// Standard input/output communication
    #[default]
    Stdio,
}

/// Handler configuration for plugin execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handler {
    #[serde(default, rename = "type")]
    pub handler_type: HandlerType,

    /// Command the host runs to start the handler
    pub command: String,
}

/// Input mode for search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Search on every keystroke
    #[default]
    Realtime,
}

impl Manifest {
    /// Manifest for a `vcp` handler started with `command`.
    #[must_use]
    pub fn for_config(config: &Config, command: impl Into<String>) -> Self {
        Self {
            name: "VS Code Projects".to_string(),
            description: Some("Open recent VS Code folders and Project Manager projects".to_string()),
            icon: Some(config.icon.clone()),
            prefix: Some(config.trigger.clone()),
            handler: Handler {
                handler_type: HandlerType::Stdio,
                command: command.into(),
            },
            input_mode: InputMode::Realtime,
        }
    }
}
