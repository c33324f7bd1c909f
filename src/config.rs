use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::FileStorage;
use crate::{
    GraphError, Result, TasteCatalog, CONFIG_FILE, GRAPH_FILE, SOCIAL_FOLDER,
};

const DEFAULT_MIN_TASTES: usize = 3;

/// Settings of a graph living under `<root>/.social/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Taste tags the cluster index is seeded with
    pub catalog: TasteCatalog,
    /// File name of the persisted graph, relative to the social folder
    pub graph_file: String,
    /// Fewest tastes a new user must pick when signing up
    pub min_tastes: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            catalog: TasteCatalog::default(),
            graph_file: GRAPH_FILE.to_owned(),
            min_tastes: DEFAULT_MIN_TASTES,
        }
    }
}

impl GraphConfig {
    pub fn path<P: AsRef<Path>>(root: P) -> PathBuf {
        root.as_ref().join(SOCIAL_FOLDER).join(CONFIG_FILE)
    }

    /// Read the configuration of `root`, falling back to the defaults when
    /// there is none
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(GraphConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content).map_err(|err| {
            GraphError::Storage(CONFIG_FILE.to_owned(), err.to_string())
        })?;
        log::info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn store<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let path = Self::path(root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        log::info!("Configuration written to {}", path.display());
        Ok(())
    }

    pub fn graph_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref().join(SOCIAL_FOLDER).join(&self.graph_file)
    }

    /// File storage for the graph of `root`
    pub fn storage<P: AsRef<Path>>(&self, root: P) -> FileStorage {
        FileStorage::new("graph".to_owned(), &self.graph_path(root))
    }
}
