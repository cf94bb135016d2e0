mod convert;
mod manifest;
mod protocol;

pub use convert::{OPEN_ACTION_ID, item_id, record_to_item, records_to_items};
pub use manifest::{Handler, HandlerType, InputMode, Manifest};
pub use protocol::{PluginInput, PluginResponse, SelectedItem, Step};

use crate::config::{Config, SourcePaths};
use crate::search::Resolver;
use crate::source::{FsProbe, PathProbe, SourceDocuments};
use crate::{Error, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};
use vcp_types::ResultItem;

const PLACEHOLDER: &str = "Search VS Code projects...";

/// The VS Code projects plugin: answers launcher requests.
///
/// Source files are re-read on every request so the results follow whatever
/// VS Code and Project Manager wrote last.
#[derive(Debug, Clone)]
pub struct ProjectsPlugin<P = FsProbe> {
    config: Config,
    paths: SourcePaths,
    resolver: Resolver<P>,
}

impl ProjectsPlugin<FsProbe> {
    #[must_use]
    pub fn new(config: Config, paths: SourcePaths) -> Self {
        Self::with_probe(config, paths, FsProbe)
    }
}

impl<P: PathProbe> ProjectsPlugin<P> {
    #[must_use]
    pub fn with_probe(config: Config, paths: SourcePaths, probe: P) -> Self {
        let resolver = Resolver::new(&config, probe);
        Self {
            config,
            paths,
            resolver,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn paths(&self) -> &SourcePaths {
        &self.paths
    }

    /// Ranked launcher items for a query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<ResultItem> {
        let documents =
            SourceDocuments::load(&self.paths, self.config.include_recent, self.resolver.probe());
        let records = self.resolver.resolve_documents(query, &documents);
        records_to_items(&records, &self.config)
    }

    /// Answer a single request.
    #[must_use]
    pub fn handle(&self, input: &PluginInput) -> PluginResponse {
        match input.step {
            Step::Initial => PluginResponse::Results {
                items: self.search(""),
                disable_sort: true,
                placeholder: Some(PLACEHOLDER.to_string()),
            },
            Step::Search => PluginResponse::Results {
                items: self.search(input.query.as_deref().unwrap_or_default()),
                disable_sort: true,
                placeholder: None,
            },
            Step::Action => match self.execute(input) {
                Ok(response) => response,
                Err(e) => {
                    warn!("Action failed: {e}");
                    PluginResponse::error(e.to_string())
                }
            },
        }
    }

    fn execute(&self, input: &PluginInput) -> Result<PluginResponse> {
        let selected = input
            .selected
            .as_ref()
            .ok_or_else(|| Error::Protocol("action request without a selected item".to_string()))?;

        let item = self
            .search("")
            .into_iter()
            .find(|item| item.id == selected.id)
            .ok_or_else(|| Error::Protocol(format!("unknown project: {}", selected.id)))?;

        let action = match input.action.as_deref() {
            Some(id) => item.action(id),
            None => item.default_action(),
        }
        .ok_or_else(|| {
            Error::Protocol(format!(
                "unknown action {:?} for {}",
                input.action.as_deref().unwrap_or_default(),
                item.id
            ))
        })?;

        debug!("Executing {} on {}", action.id, item.id);
        Ok(PluginResponse::Execute {
            execute: action.execute.clone(),
            close: !action.keep_open,
        })
    }

    /// Serve newline-delimited JSON requests until the reader is exhausted.
    ///
    /// Unparsable lines get an error response; the loop keeps going.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a request or writing a response fails.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<PluginInput>(&line) {
                Ok(input) => self.handle(&input),
                Err(e) => {
                    warn!("Invalid request: {e}");
                    PluginResponse::Error {
                        message: "invalid request".to_string(),
                        details: Some(e.to_string()),
                    }
                }
            };

            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        Ok(())
    }
}
