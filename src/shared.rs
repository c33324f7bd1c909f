use std::sync::{Arc, RwLock};

use crate::storage::{load_or_create, GraphStorage};
use crate::{Result, SocialGraph, TasteCatalog};

/// A cloneable handle to a graph used from several threads.
///
/// All mutations go through [`SharedGraph::write`], one writer at a time,
/// so readers never see the adjacency map, the profiles and the cluster
/// index out of step.
#[derive(Clone, Debug, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<SocialGraph>>,
}

impl SharedGraph {
    pub fn new(graph: SocialGraph) -> Self {
        SharedGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Load the graph kept in `storage`, or start an empty one
    pub fn load<S>(storage: &S, catalog: TasteCatalog) -> Result<Self>
    where
        S: GraphStorage + ?Sized,
    {
        load_or_create(storage, catalog).map(SharedGraph::new)
    }

    pub fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SocialGraph) -> T,
    {
        let graph = self.inner.read()?;
        Ok(f(&*graph))
    }

    pub fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SocialGraph) -> T,
    {
        let mut graph = self.inner.write()?;
        Ok(f(&mut *graph))
    }

    /// Clone the current graph under the read lock
    pub fn snapshot(&self) -> Result<SocialGraph> {
        self.read(SocialGraph::clone)
    }

    /// Persist the current graph into `storage`
    pub fn persist<S>(&self, storage: &mut S) -> Result<()>
    where
        S: GraphStorage + ?Sized,
    {
        let state = self.read(SocialGraph::to_state)?;
        storage.persist_graph(&state)
    }
}
