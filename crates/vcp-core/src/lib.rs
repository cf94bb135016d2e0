//! Core of the VS Code projects launcher plugin.
//!
//! Finds projects in VS Code's recently opened folders and in the Project
//! Manager extension's list, matches them against a query and ranks them.

pub mod config;
pub mod plugin;
pub mod search;
pub mod source;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use plugin::ProjectsPlugin;
pub use search::{ProjectRecord, Resolver};

pub use vcp_types::*;
