//! Test fixtures and helpers

use crate::source::{ProjectManagerDocument, RECENT_FOLDER_ID, RecentsDocument};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A recent-folder menu entry as VS Code writes it
pub fn recent_folder(label: &str, path: &str) -> Value {
    json!({
        "id": RECENT_FOLDER_ID,
        "enabled": true,
        "label": label,
        "uri": { "$mid": 1, "fsPath": path, "external": format!("file://{path}"), "path": path, "scheme": "file" }
    })
}

/// `storage.json` content with the given entries in the "Open Recent" submenu
pub fn storage_json(entries: Vec<Value>) -> Value {
    json!({
        "theme": "vs-dark",
        "lastKnownMenubarData": {
            "menus": {
                "File": {
                    "items": [
                        { "id": "workbench.action.files.newUntitledFile", "label": "&&New Text File" },
                        { "id": "vscode.menubar.separator" },
                        {
                            "id": "submenuitem.MenubarRecentMenu",
                            "label": "Open &&Recent",
                            "submenu": { "items": entries }
                        }
                    ]
                }
            }
        }
    })
}

/// Recents document for folders given as paths, label = `~`-style path
pub fn recents_doc(paths: &[&str]) -> RecentsDocument {
    RecentsDocument::from_value(storage_json(
        paths
            .iter()
            .map(|p| recent_folder(&format!("~{p}"), p))
            .collect(),
    ))
}

/// A Project Manager definition
pub fn project(name: &str, root_path: &str, tags: &[&str]) -> Value {
    json!({
        "name": name,
        "rootPath": root_path,
        "paths": [],
        "tags": tags,
        "enabled": true
    })
}

pub fn project_manager_doc(projects: Vec<Value>) -> ProjectManagerDocument {
    ProjectManagerDocument::from_value(&Value::Array(projects)).unwrap()
}

/// Path probe backed by a fixed set of existing paths
#[derive(Debug, Clone, Default)]
pub struct FakeFs {
    existing: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            existing: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

impl crate::source::PathProbe for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }
}

/// Probe that reports every path as present
pub fn everything_exists(_: &Path) -> bool {
    true
}
