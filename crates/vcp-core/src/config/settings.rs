use super::Directories;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Plugin configuration.
///
/// Loaded once at startup and never mutated afterwards; the resolver and the
/// plugin handler only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Include VS Code's recently opened folders. Turn off when the Project
    /// Manager list is all you want.
    pub include_recent: bool,

    pub ranking: RankingConfig,

    /// Override the recents candidates (first existing file is used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_files: Option<Vec<PathBuf>>,

    /// Override the Project Manager `projects.json` location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_manager_file: Option<PathBuf>,

    /// Launcher prefix routed to this plugin, used for completions
    pub trigger: String,

    /// Editor program and leading arguments; the project path is appended
    pub editor_command: Vec<String>,

    pub icon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_recent: true,
            ranking: RankingConfig::default(),
            storage_files: None,
            project_manager_file: None,
            trigger: default_trigger(),
            editor_command: default_editor_command(),
            icon: "vscode".to_string(),
        }
    }
}

fn default_trigger() -> String {
    "vc ".to_string()
}

fn default_editor_command() -> Vec<String> {
    vec!["code".to_string()]
}

/// Sort tiers. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankingConfig {
    /// Project Manager entry matched by its name
    pub name: u32,
    /// Project Manager entry matched by its folder name
    pub path: u32,
    /// Project Manager entry matched by one of its tags
    pub tag: u32,
    /// Recently opened folder
    pub recent: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            name: 0,
            path: 0,
            tag: 100,
            recent: 200,
        }
    }
}

impl RankingConfig {
    /// Highest (worst) tier a Project Manager match can get.
    #[must_use]
    pub fn worst_project_tier(&self) -> u32 {
        self.name.max(self.path).max(self.tag)
    }
}

/// Concrete source file locations after applying config overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub storage_files: Vec<PathBuf>,
    pub project_manager_file: PathBuf,
}

impl SourcePaths {
    #[must_use]
    pub fn resolve(config: &Config, dirs: &Directories) -> Self {
        Self {
            storage_files: config
                .storage_files
                .clone()
                .unwrap_or_else(|| dirs.default_storage_files()),
            project_manager_file: config
                .project_manager_file
                .clone()
                .unwrap_or_else(|| dirs.default_project_manager_file()),
        }
    }
}

impl Config {
    /// Load config from file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)?;
        Ok(config.validated())
    }

    /// Warn about settings that produce surprising behavior and repair the
    /// ones that would make results unusable.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.ranking.recent <= self.ranking.worst_project_tier() {
            warn!(
                "ranking.recent ({}) is not above the Project Manager tiers ({}); recents may outrank configured projects",
                self.ranking.recent,
                self.ranking.worst_project_tier()
            );
        }

        if self.editor_command.iter().all(|part| part.trim().is_empty()) {
            warn!("editorCommand is empty, falling back to \"code\"");
            self.editor_command = default_editor_command();
        }

        self
    }

    /// Program and arguments that open `path` in the editor.
    #[must_use]
    pub fn editor_invocation(&self, path: &str) -> Vec<String> {
        let mut command = self.editor_command.clone();
        command.push(path.to_string());
        command
    }
}
