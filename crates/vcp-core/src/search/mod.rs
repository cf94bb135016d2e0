mod normalize;
mod resolver;

pub use normalize::{contains_normalized, normalize};
pub use resolver::Resolver;

/// One project in a query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,

    /// Absolute path; at most one record per path survives a query
    pub path: String,

    /// Tier from `RankingConfig`, lower sorts first
    pub primary_rank: u32,

    /// Tiebreaker within a tier (recency order for recents, 0 otherwise)
    pub secondary_rank: u32,
}

impl ProjectRecord {
    /// Sort key: tier, then tiebreaker, then name.
    #[must_use]
    pub fn sort_key(&self) -> (u32, u32, &str) {
        (self.primary_rank, self.secondary_rank, &self.name)
    }
}

/// Last `/`-separated segment of a path. A trailing slash yields `""`.
#[must_use]
pub fn folder_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
