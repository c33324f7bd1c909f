use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::storage::{GraphState, GraphStorage};
use crate::{GraphError, Result};

const STORAGE_VERSION: i32 = 1;

/// Persists the whole graph as a single JSON document on disk.
///
/// Every write replaces the document: the new content goes to a sibling
/// temporary file which is then renamed over the old one, so readers never
/// observe a half-written graph.
pub struct FileStorage {
    label: String,
    path: PathBuf,
}

/// The document stored by a [`FileStorage`]
#[derive(Serialize, Deserialize)]
struct FileStorageData<G> {
    version: i32,
    graph: G,
}

impl FileStorage {
    /// Create a new file storage with a diagnostic label and file path
    pub fn new(label: String, path: &Path) -> Self {
        Self {
            label,
            path: PathBuf::from(path),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let mut file_name = self
            .path
            .file_name()
            .ok_or_else(|| self.error("Path has no file name"))?
            .to_os_string();
        file_name.push(".tmp");
        Ok(self.path.with_file_name(file_name))
    }

    fn error<S: Into<String>>(&self, reason: S) -> GraphError {
        GraphError::Storage(self.label.clone(), reason.into())
    }
}

impl GraphStorage for FileStorage {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the graph from the storage file
    fn load_graph(&self) -> Result<GraphState> {
        if !self.path.exists() {
            return Err(self.error("File does not exist"));
        }

        let content = fs::read_to_string(&self.path)?;
        let data: FileStorageData<GraphState> = serde_json::from_str(&content)
            .map_err(|err| self.error(err.to_string()))?;
        if data.version != STORAGE_VERSION {
            return Err(self.error(format!(
                "Storage version mismatch: expected {}, got {}",
                STORAGE_VERSION, data.version
            )));
        }

        log::info!(
            "{} {} users and {} friendships have been read",
            self.label,
            data.graph.profiles.len(),
            data.graph.friendships.len()
        );
        Ok(data.graph)
    }

    /// Write the graph to the storage file
    fn persist_graph(&mut self, state: &GraphState) -> Result<()> {
        let parent_dir = self
            .path
            .parent()
            .ok_or_else(|| self.error("Failed to get parent directory"))?;
        fs::create_dir_all(parent_dir)?;

        let temp_path = self.temp_path()?;
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        let data = FileStorageData {
            version: STORAGE_VERSION,
            graph: state,
        };
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&temp_path, &self.path)?;

        log::info!(
            "{} {} users and {} friendships have been written",
            self.label,
            state.profiles.len(),
            state.friendships.len()
        );
        Ok(())
    }

    /// Remove the storage file
    fn erase(&mut self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|err| self.error(err.to_string()))
    }
}
