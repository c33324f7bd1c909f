mod file_storage;
mod memory_storage;
mod state;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use state::{FriendRequestRecord, Friendship, GraphState, ProfileRecord};

use crate::{Result, SocialGraph, TasteCatalog};

/// A place where the whole graph can be loaded from and persisted to
pub trait GraphStorage {
    /// Check whether a graph has been persisted before
    fn exists(&self) -> bool;

    /// Load the last persisted graph.
    fn load_graph(&self) -> Result<GraphState>;

    /// Persist the given graph,
    /// replacing whatever was stored before.
    fn persist_graph(&mut self, state: &GraphState) -> Result<()>;

    /// Remove all persisted data.
    fn erase(&mut self) -> Result<()>;
}

/// Load the graph kept in `storage`, or start an empty one if nothing has
/// been persisted yet
pub fn load_or_create<S>(storage: &S, catalog: TasteCatalog) -> Result<SocialGraph>
where
    S: GraphStorage + ?Sized,
{
    if !storage.exists() {
        log::info!("No persisted graph found, starting an empty one");
        return Ok(SocialGraph::new(catalog));
    }

    let state = storage.load_graph()?;
    SocialGraph::from_state(catalog, state)
}
