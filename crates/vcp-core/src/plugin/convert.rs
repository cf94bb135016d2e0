//! Conversion from resolved `ProjectRecord`s to launcher `ResultItem`s.

use crate::config::Config;
use crate::search::ProjectRecord;
use vcp_types::{Action, ExecuteAction, ResultItem};

pub const OPEN_ACTION_ID: &str = "open";

/// Stable item id for a project.
#[must_use]
pub fn item_id(record: &ProjectRecord) -> String {
    format!("{}_{}", record.path, record.name)
}

/// Build the launcher item for one project.
#[must_use]
pub fn record_to_item(record: &ProjectRecord, config: &Config) -> ResultItem {
    ResultItem {
        id: item_id(record),
        name: record.name.clone(),
        description: Some(record.path.clone()),
        icon: Some(config.icon.clone()),
        icon_type: Some("system".to_string()),
        verb: Some("Open".to_string()),
        completion: Some(format!("{}{}", config.trigger, record.name)),
        actions: vec![open_action(&record.path, config)],
        keep_open: false,
    }
}

/// Convert records, keeping their order.
#[must_use]
pub fn records_to_items(records: &[ProjectRecord], config: &Config) -> Vec<ResultItem> {
    records
        .iter()
        .map(|record| record_to_item(record, config))
        .collect()
}

fn open_action(path: &str, config: &Config) -> Action {
    Action {
        id: OPEN_ACTION_ID.to_string(),
        name: "Open in VS Code".to_string(),
        icon: Some("open_in_new".to_string()),
        icon_type: None,
        keep_open: false,
        execute: ExecuteAction::Spawn {
            command: config.editor_invocation(path),
            cwd: Some(path.to_string()),
        },
    }
}
