use crate::storage::{GraphState, GraphStorage};
use crate::{GraphError, Result};

/// Keeps the last persisted graph in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Option<GraphState>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: GraphState) -> Self {
        MemoryStorage { state: Some(state) }
    }

    pub fn state(&self) -> Option<&GraphState> {
        self.state.as_ref()
    }
}

impl GraphStorage for MemoryStorage {
    fn exists(&self) -> bool {
        self.state.is_some()
    }

    fn load_graph(&self) -> Result<GraphState> {
        self.state.clone().ok_or_else(|| {
            GraphError::Storage(
                "memory".to_owned(),
                "Nothing has been persisted".to_owned(),
            )
        })
    }

    fn persist_graph(&mut self, state: &GraphState) -> Result<()> {
        self.state = Some(state.clone());
        log::debug!(
            "{} users kept in memory storage",
            state.profiles.len()
        );
        Ok(())
    }

    fn erase(&mut self) -> Result<()> {
        self.state = None;
        Ok(())
    }
}
