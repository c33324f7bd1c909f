use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::{Result, SocialGraph, TasteCatalog};

/// Plain data form of a [`SocialGraph`], as exchanged with storage.
///
/// The cluster index is not part of it: it is derived from the profiles
/// whenever a graph is rebuilt from a state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphState {
    pub profiles: Vec<ProfileRecord>,
    /// Each friendship is listed once, in either orientation
    pub friendships: Vec<Friendship>,
    #[serde(default)]
    pub requests: Vec<FriendRequestRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    #[serde(flatten)]
    pub profile: Profile,
}

/// An unordered pair of friends
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub user_a: String,
    pub user_b: String,
}

impl Friendship {
    pub fn new<S: Into<String>>(user_a: S, user_b: S) -> Self {
        Friendship {
            user_a: user_a.into(),
            user_b: user_b.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequestRecord {
    pub from: String,
    pub to: String,
}

impl SocialGraph {
    /// Export the graph, listing every friendship once with its smaller
    /// name first
    pub fn to_state(&self) -> GraphState {
        let profiles = self
            .profiles
            .iter()
            .map(|(name, profile)| ProfileRecord {
                name: name.clone(),
                profile: profile.clone(),
            })
            .collect();

        let friendships = self
            .adjacency
            .iter()
            .flat_map(|(user, friends)| {
                friends
                    .iter()
                    .filter(move |friend| user < *friend)
                    .map(move |friend| Friendship::new(user, friend))
            })
            .collect();

        let requests = self
            .requests
            .iter()
            .map(|(from, to)| FriendRequestRecord {
                from: from.to_owned(),
                to: to.to_owned(),
            })
            .collect();

        GraphState {
            profiles,
            friendships,
            requests,
        }
    }

    /// Rebuild a graph from its exported state.
    ///
    /// Profiles are inserted first and the cluster index is rebuilt once.
    /// Friendships and friend requests are then replayed through the regular
    /// mutation API, so duplicates collapse and a friendship naming a user
    /// without a profile creates that user.
    pub fn from_state(catalog: TasteCatalog, state: GraphState) -> Result<Self> {
        let mut graph = SocialGraph::new(catalog);

        for record in state.profiles {
            if !graph.insert_user(&record.name, record.profile) {
                log::warn!("Skipping duplicated or blank user {:?}", record.name);
            }
        }
        graph.rebuild_clusters();

        for friendship in &state.friendships {
            graph.add_friendship(&friendship.user_a, &friendship.user_b);
        }
        for request in &state.requests {
            let outcome = graph.send_friend_request(&request.from, &request.to);
            log::trace!(
                "Replayed friend request {} -> {}: {:?}",
                request.from,
                request.to,
                outcome
            );
        }

        graph.check_consistency()?;
        log::debug!(
            "Graph restored with {} users and {} friendships",
            graph.len(),
            state.friendships.len()
        );
        Ok(graph)
    }
}
