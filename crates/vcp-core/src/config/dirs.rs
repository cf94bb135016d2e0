use crate::{Error, Result};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Application directories following XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Plugin config directory (~/.config/vcp)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// VS Code's own config directory (~/.config/Code)
    pub editor_config: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the user's home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let project = ProjectDirs::from("", "", "vcp")
            .ok_or_else(|| Error::Config("cannot determine project directories".to_string()))?;
        let base = BaseDirs::new()
            .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))?;

        Ok(Self::from_dirs(
            project.config_dir().to_path_buf(),
            base.config_dir(),
        ))
    }

    /// Build from the plugin config directory and the user config home that
    /// holds VS Code's `Code` directory.
    #[must_use]
    pub fn from_dirs(config: PathBuf, config_home: &Path) -> Self {
        Self {
            config_file: config.join("config.json"),
            config,
            editor_config: config_home.join("Code"),
        }
    }

    /// Recents candidates in lookup order. The first one that exists wins.
    #[must_use]
    pub fn default_storage_files(&self) -> Vec<PathBuf> {
        vec![
            self.editor_config.join("storage.json"),
            self.editor_config
                .join("User")
                .join("globalStorage")
                .join("storage.json"),
        ]
    }

    /// Project Manager extension's project list.
    #[must_use]
    pub fn default_project_manager_file(&self) -> PathBuf {
        self.editor_config
            .join("User")
            .join("globalStorage")
            .join("alefragnani.project-manager")
            .join("projects.json")
    }
}
