//! Project resolver: match, rank and deduplicate projects for one query.

use super::{ProjectRecord, contains_normalized, folder_name, normalize};
use crate::config::{Config, RankingConfig};
use crate::source::{
    FsProbe, PathProbe, ProjectDefinition, ProjectManagerDocument, RecentsDocument,
    SourceDocuments,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Records keyed by path in first-seen order. Inserting a known path replaces
/// its record without moving it.
#[derive(Debug, Default)]
struct PathMap {
    positions: HashMap<String, usize>,
    records: Vec<ProjectRecord>,
}

impl PathMap {
    fn insert(&mut self, record: ProjectRecord) {
        if let Some(&index) = self.positions.get(&record.path) {
            self.records[index] = record;
        } else {
            self.positions.insert(record.path.clone(), self.records.len());
            self.records.push(record);
        }
    }

    fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }
}

/// Resolves a query against the source documents.
///
/// Never fails: sources that are absent or malformed simply contribute no
/// projects.
#[derive(Debug, Clone)]
pub struct Resolver<P = FsProbe> {
    include_recent: bool,
    ranking: RankingConfig,
    probe: P,
}

impl Resolver<FsProbe> {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, FsProbe)
    }
}

impl<P: PathProbe> Resolver<P> {
    #[must_use]
    pub fn new(config: &Config, probe: P) -> Self {
        Self {
            include_recent: config.include_recent,
            ranking: config.ranking,
            probe,
        }
    }

    #[must_use]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Resolve against already loaded documents.
    #[must_use]
    pub fn resolve_documents(&self, query: &str, documents: &SourceDocuments) -> Vec<ProjectRecord> {
        self.resolve(
            query,
            documents.recents.as_ref(),
            documents.project_manager.as_ref(),
        )
    }

    /// Matching projects ordered by `(primary_rank, secondary_rank, name)`.
    ///
    /// Recents are collected before Project Manager entries, so a Project
    /// Manager entry replaces a recent folder with the same path. Records
    /// with equal sort keys keep the order they were first seen in.
    #[must_use]
    pub fn resolve(
        &self,
        query: &str,
        recents: Option<&RecentsDocument>,
        project_manager: Option<&ProjectManagerDocument>,
    ) -> Vec<ProjectRecord> {
        let normalized_query = normalize(query);
        let mut projects = PathMap::default();

        if self.include_recent
            && let Some(doc) = recents
        {
            self.collect_recents(&normalized_query, doc, &mut projects);
        }

        if let Some(doc) = project_manager {
            self.collect_projects(&normalized_query, doc, &mut projects);
        }

        let mut records = projects.into_records();
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        debug!("Query {query:?} matched {} projects", records.len());
        records
    }

    fn collect_recents(
        &self,
        normalized_query: &str,
        doc: &RecentsDocument,
        projects: &mut PathMap,
    ) {
        let mut recency = self.ranking.recent.saturating_add(1);

        for entry in doc.recent_folders() {
            if !entry.enabled {
                continue;
            }

            let path = entry.uri.path;
            if !self.probe.exists(Path::new(&path)) {
                debug!("Skipping missing recent folder {path}");
                continue;
            }

            let folder = normalize(folder_name(&path));
            if !folder.contains(normalized_query)
                && !contains_normalized(&entry.label, normalized_query)
            {
                continue;
            }

            projects.insert(ProjectRecord {
                name: folder,
                path,
                primary_rank: self.ranking.recent,
                secondary_rank: recency,
            });
            recency = recency.saturating_add(1);
        }
    }

    fn collect_projects(
        &self,
        normalized_query: &str,
        doc: &ProjectManagerDocument,
        projects: &mut PathMap,
    ) {
        for project in doc.projects() {
            if !project.enabled {
                continue;
            }

            if !self.probe.exists(Path::new(&project.root_path)) {
                debug!("Skipping missing project {}", project.root_path);
                continue;
            }

            let Some(tier) = self.project_tier(normalized_query, project) else {
                continue;
            };

            projects.insert(ProjectRecord {
                name: project.name.clone(),
                path: project.root_path.clone(),
                primary_rank: tier,
                secondary_rank: 0,
            });
        }
    }

    /// First matching rule wins: name, then folder name, then any tag.
    fn project_tier(&self, normalized_query: &str, project: &ProjectDefinition) -> Option<u32> {
        if contains_normalized(&project.name, normalized_query) {
            Some(self.ranking.name)
        } else if contains_normalized(folder_name(&project.root_path), normalized_query) {
            Some(self.ranking.path)
        } else if project
            .tags
            .iter()
            .any(|tag| contains_normalized(tag, normalized_query))
        {
            Some(self.ranking.tag)
        } else {
            None
        }
    }
}
