use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::storage::GraphState;
use crate::{SocialGraph, TasteCatalog};

/// Custom implementation of [`Serialize`] for [`SocialGraph`]
///
/// The adjacency map stores every friendship twice and the cluster index is
/// derived data, so only profiles, friendships (once each) and pending
/// friend requests are written out.
impl Serialize for SocialGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_state().serialize(serializer)
    }
}

/// Custom implementation of [`Deserialize`] for [`SocialGraph`]
///
/// The graph is rebuilt over the default catalog; use
/// [`SocialGraph::from_state`] to pick another one.
impl<'de> Deserialize<'de> for SocialGraph {
    fn deserialize<D>(deserializer: D) -> Result<SocialGraph, D::Error>
    where
        D: Deserializer<'de>,
    {
        let state = GraphState::deserialize(deserializer)?;
        SocialGraph::from_state(TasteCatalog::default(), state)
            .map_err(D::Error::custom)
    }
}
