use std::env::current_dir;
use std::path::PathBuf;

use social_graph::{
    load_or_create, FileStorage, GraphConfig, GraphStorage, SocialGraph,
};

use crate::AppError;

pub fn provide_root(root_dir: &Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root_dir {
        Some(path) => Ok(path.clone()),
        None => current_dir()
            .map_err(|err| AppError::RootNotFound(err.to_string())),
    }
}

/// The graph of a root folder together with where it is persisted
pub struct Workspace {
    pub config: GraphConfig,
    pub graph: SocialGraph,
    storage: FileStorage,
}

impl Workspace {
    pub fn open(root_dir: &Option<PathBuf>) -> Result<Self, AppError> {
        let root = provide_root(root_dir)?;
        let config = GraphConfig::load(&root)?;
        let storage = config.storage(&root);
        let graph = load_or_create(&storage, config.catalog.clone())?;
        log::debug!(
            "Graph with {} users loaded from {}",
            graph.len(),
            storage.path().display()
        );

        Ok(Workspace {
            config,
            graph,
            storage,
        })
    }

    pub fn save(&mut self) -> Result<(), AppError> {
        self.storage.persist_graph(&self.graph.to_state())?;
        Ok(())
    }

    /// Fail with [`AppError::UnknownUser`] unless `name` exists
    pub fn require_user(&self, name: &str) -> Result<(), AppError> {
        if self.graph.contains(name) {
            Ok(())
        } else {
            Err(AppError::UnknownUser(name.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn workspace_persists_between_openings() {
        let temp_dir =
            TempDir::new("cli").expect("Failed to create temporary directory");
        let root = Some(temp_dir.path().to_path_buf());

        let mut workspace = Workspace::open(&root).unwrap();
        assert!(workspace.graph.is_empty());
        workspace.graph.add_friendship("ann", "bob");
        workspace.save().unwrap();

        let workspace = Workspace::open(&root).unwrap();
        assert_eq!(workspace.graph.degree("ann"), Some(1));
        assert!(workspace.require_user("bob").is_ok());
        assert!(matches!(
            workspace.require_user("zed"),
            Err(AppError::UnknownUser(_))
        ));
    }
}
