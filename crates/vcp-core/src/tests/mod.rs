//! Test module for vcp-core
//!
//! This module contains tests for:
//! - Resolver matching, ranking and path deduplication
//! - Loading source documents from disk
//! - Configuration loading and defaults
//! - The stdio plugin handler

mod fixtures;
