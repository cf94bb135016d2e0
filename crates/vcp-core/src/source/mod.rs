//! Source documents the resolver reads projects from.
//!
//! Loading is best effort: a missing, unreadable or malformed file is logged
//! and treated as absent so a broken source never hides the other one.

mod project_manager;
mod recents;

pub use project_manager::{ProjectDefinition, ProjectManagerDocument};
pub use recents::{EntryUri, RECENT_FOLDER_ID, RecentFolderEntry, RecentsDocument};

use crate::Result;
use crate::config::SourcePaths;
use std::path::Path;
use tracing::{debug, warn};

/// Existence check for paths referenced by the sources.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Both source documents for one query. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct SourceDocuments {
    pub recents: Option<RecentsDocument>,
    pub project_manager: Option<ProjectManagerDocument>,
}

impl SourceDocuments {
    /// Load the first existing recents candidate (when `include_recent`) and
    /// the Project Manager file.
    pub fn load(paths: &SourcePaths, include_recent: bool, probe: &impl PathProbe) -> Self {
        let recents = if include_recent {
            paths
                .storage_files
                .iter()
                .find(|path| probe.exists(path))
                .and_then(|path| read_optional(path, RecentsDocument::read))
        } else {
            None
        };

        let project_manager = if probe.exists(&paths.project_manager_file) {
            read_optional(&paths.project_manager_file, ProjectManagerDocument::read)
        } else {
            debug!(
                "No Project Manager file at {}",
                paths.project_manager_file.display()
            );
            None
        };

        Self {
            recents,
            project_manager,
        }
    }
}

fn read_optional<T>(path: &Path, read: impl FnOnce(&Path) -> Result<T>) -> Option<T> {
    match read(path) {
        Ok(doc) => {
            debug!("Loaded {}", path.display());
            Some(doc)
        }
        Err(e) => {
            warn!("Ignoring {}: {e}", path.display());
            None
        }
    }
}
