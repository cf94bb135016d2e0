//! VS Code `storage.json` recents.
//!
//! The editor mirrors its menubar into `lastKnownMenubarData`. Recently opened
//! folders live in a submenu of the File menu, but the submenu's own id has
//! changed between releases, so every submenu is scanned for entries carrying
//! the `openRecentFolder` id instead.

use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Menu entry id VS Code uses for a recently opened folder.
pub const RECENT_FOLDER_ID: &str = "openRecentFolder";

/// Parsed `storage.json`, kept as a raw value and walked lazily.
#[derive(Debug, Clone)]
pub struct RecentsDocument {
    root: Value,
}

/// A recent-folder menu entry with every field the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentFolderEntry {
    pub id: String,
    pub enabled: bool,
    pub label: String,
    pub uri: EntryUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryUri {
    pub path: String,
}

impl RecentsDocument {
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse document content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid JSON.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_str(content)?))
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn file_menu_items(&self) -> Option<&Vec<Value>> {
        self.root
            .get("lastKnownMenubarData")?
            .get("menus")?
            .get("File")?
            .get("items")?
            .as_array()
    }

    /// Recent-folder entries in source order (most recently opened first).
    ///
    /// Entries that are not recent folders or lack a required field are
    /// skipped individually. A document without the menubar structure yields
    /// nothing.
    pub fn recent_folders(&self) -> impl Iterator<Item = RecentFolderEntry> + '_ {
        self.file_menu_items()
            .into_iter()
            .flatten()
            .filter(|menu_item| menu_item.get("id").is_some())
            .filter_map(|menu_item| menu_item.get("submenu")?.get("items")?.as_array())
            .flatten()
            .filter_map(|entry| RecentFolderEntry::deserialize(entry).ok())
            .filter(|entry| entry.id == RECENT_FOLDER_ID)
    }
}
