use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{GraphError, Result};

/// Canonical taste tags offered to users when they pick their interests
pub const DEFAULT_TASTES: [&str; 16] = [
    "Rock Music",
    "Classical Music",
    "Hip-Hop",
    "Jazz",
    "Football",
    "Basketball",
    "Cricket",
    "Badminton",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Romance",
    "Coding",
    "Gaming",
    "Cooking",
    "Travel",
];

/// The fixed, ordered set of taste tags the cluster index is seeded with.
///
/// The catalog is only a seed: profiles may list tags that are not part of
/// it, and the core accepts them. Checking membership is left to callers
/// that collect tastes from users (see [`TasteCatalog::unknown_tastes`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TasteCatalog {
    tags: Vec<String>,
}

impl TasteCatalog {
    /// Build a catalog from the given tags
    ///
    /// Fails if the list is empty, or contains a blank or duplicated tag.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(GraphError::Catalog("no taste tags".to_owned()));
        }

        let mut seen = HashSet::with_capacity(tags.len());
        for tag in &tags {
            if tag.trim().is_empty() {
                return Err(GraphError::Catalog("blank taste tag".to_owned()));
            }
            if !seen.insert(tag.as_str()) {
                return Err(GraphError::Catalog(format!(
                    "duplicated taste tag {:?}",
                    tag
                )));
            }
        }

        Ok(TasteCatalog { tags })
    }

    /// Return the tags in catalog order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false for a successfully built catalog
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Return the tastes from `tastes` that are not part of the catalog,
    /// in their original order
    pub fn unknown_tastes<'a>(&self, tastes: &'a [String]) -> Vec<&'a str> {
        tastes
            .iter()
            .filter(|taste| !self.contains(taste))
            .map(String::as_str)
            .collect()
    }
}

impl Default for TasteCatalog {
    fn default() -> Self {
        TasteCatalog {
            tags: DEFAULT_TASTES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for TasteCatalog {
    type Error = GraphError;

    fn try_from(tags: Vec<String>) -> Result<Self> {
        TasteCatalog::new(tags)
    }
}

impl From<TasteCatalog> for Vec<String> {
    fn from(catalog: TasteCatalog) -> Self {
        catalog.tags
    }
}
