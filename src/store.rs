use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
};

use crate::catalog::TasteCatalog;
use crate::cluster::TasteClusters;
use crate::profile::Profile;
use crate::requests::FriendRequests;
use crate::{GraphError, Result};

/// Represents the social graph: users, their profiles and friendships.
///
/// A user exists when it is present in both the adjacency map and the
/// profile map. Every mutation keeps the two maps in agreement and keeps
/// friendships symmetric; debug builds assert this after each mutation.
///
/// #### Mutation API
/// - [`SocialGraph::add_user`] / [`SocialGraph::add_user_with`]
/// - [`SocialGraph::edit_profile`]
/// - [`SocialGraph::remove_user`]
/// - [`SocialGraph::add_friendship`] / [`SocialGraph::remove_friendship`]
///
/// None of them fail: unknown users and repeated operations are no-ops,
/// reported through the returned `bool`.
///
/// #### Query API
/// - [`SocialGraph::shortest_path`]
/// - [`SocialGraph::recommend_friends`]
/// - [`SocialGraph::mutual_friends`], [`SocialGraph::connected_components`],
///   [`SocialGraph::popularity`], [`SocialGraph::adjacency_list`]
///
/// Neighbor sets are ordered, so every traversal and listing is
/// deterministic.
///
/// ## Examples
/// ```
/// use social_graph::SocialGraph;
///
/// let mut graph = SocialGraph::default();
/// graph.add_user("Ann", "", vec!["Jazz".to_string()]);
/// // Bob does not exist yet and is created with an empty profile
/// graph.add_friendship("Ann", "Bob");
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(
///     graph.shortest_path("Ann", "Bob"),
///     Some(vec!["Ann".to_string(), "Bob".to_string()])
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SocialGraph {
    pub(crate) catalog: TasteCatalog,
    /// A map from users to their friends
    pub(crate) adjacency: BTreeMap<String, BTreeSet<String>>,
    /// A map from users to their profiles
    pub(crate) profiles: BTreeMap<String, Profile>,
    pub(crate) clusters: TasteClusters,
    pub(crate) requests: FriendRequests,
}

impl Default for SocialGraph {
    fn default() -> Self {
        SocialGraph::new(TasteCatalog::default())
    }
}

impl SocialGraph {
    /// Create an empty graph whose cluster index is seeded from `catalog`
    pub fn new(catalog: TasteCatalog) -> Self {
        let clusters = TasteClusters::rebuild(&catalog, Vec::new());
        SocialGraph {
            catalog,
            adjacency: BTreeMap::new(),
            profiles: BTreeMap::new(),
            clusters,
            requests: FriendRequests::default(),
        }
    }

    /// Return the number of users in the graph
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Return true if the graph has no users
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Return the user names in ascending order
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Return the friends of `name`, or `None` for an unknown user
    pub fn friends(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(name)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Return the profile of `name`, or an empty profile for an unknown user
    pub fn get_profile(&self, name: &str) -> Cow<'_, Profile> {
        match self.profiles.get(name) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(Profile::default()),
        }
    }

    pub fn catalog(&self) -> &TasteCatalog {
        &self.catalog
    }

    /// Return the taste cluster index built from the current profiles
    pub fn clusters(&self) -> &TasteClusters {
        &self.clusters
    }

    /// Add a user with an empty password
    ///
    /// See [`SocialGraph::add_user_with`].
    pub fn add_user(&mut self, name: &str, bio: &str, tastes: Vec<String>) -> bool {
        self.add_user_with(name, Profile::new(bio, tastes))
    }

    /// Add a user with a complete profile.
    ///
    /// The name is trimmed first. Nothing happens if it is empty or the user
    /// already exists; otherwise the taste clusters are rebuilt.
    pub fn add_user_with(&mut self, name: &str, profile: Profile) -> bool {
        if !self.insert_user(name, profile) {
            return false;
        }
        self.rebuild_clusters();
        self.assert_consistent();
        true
    }

    /// Overwrite the bio and tastes of `name`.
    ///
    /// The password is only replaced when one is given, and the avatar is
    /// left untouched. Unknown users are ignored.
    pub fn edit_profile(
        &mut self,
        name: &str,
        bio: &str,
        tastes: Vec<String>,
        password: Option<&str>,
    ) -> bool {
        let profile = match self.profiles.get_mut(name) {
            Some(profile) => profile,
            None => return false,
        };

        profile.bio = bio.to_owned();
        profile.tastes = tastes;
        if let Some(password) = password {
            profile.password = password.into();
        }
        log::debug!("Profile of {} edited", name);

        self.rebuild_clusters();
        true
    }

    /// Replace the avatar of `name`; the cluster index is not affected
    pub fn set_avatar(&mut self, name: &str, avatar: Option<Vec<u8>>) -> bool {
        match self.profiles.get_mut(name) {
            Some(profile) => {
                profile.avatar = avatar;
                true
            }
            None => false,
        }
    }

    /// Remove `name` together with all of its friendships and pending
    /// friend requests
    pub fn remove_user(&mut self, name: &str) -> bool {
        let friends = match self.adjacency.remove(name) {
            Some(friends) => friends,
            None => return false,
        };

        for friend in &friends {
            if let Some(their_friends) = self.adjacency.get_mut(friend) {
                their_friends.remove(name);
            }
        }
        self.profiles.remove(name);
        self.requests.forget(name);
        log::debug!(
            "User {} removed along with {} friendships",
            name,
            friends.len()
        );

        self.rebuild_clusters();
        self.assert_consistent();
        true
    }

    /// Make `u` and `v` friends.
    ///
    /// Both names are trimmed. Nothing happens if either is empty or both
    /// name the same user. An endpoint that does not exist yet is created
    /// first with an empty profile, exactly as [`SocialGraph::add_user`]
    /// would, which also rebuilds the taste clusters.
    ///
    /// Pending friend requests between the two users are cleared. Returns
    /// true if the friendship did not exist before.
    pub fn add_friendship(&mut self, u: &str, v: &str) -> bool {
        let (u, v) = (u.trim(), v.trim());
        if u.is_empty() || v.is_empty() || u == v {
            return false;
        }

        for name in [u, v] {
            if !self.contains(name) {
                log::debug!("Creating user {} implicitly for a friendship", name);
                self.add_user(name, "", Vec::new());
            }
        }

        let inserted = self
            .adjacency
            .get_mut(u)
            .map_or(false, |friends| friends.insert(v.to_owned()));
        if let Some(friends) = self.adjacency.get_mut(v) {
            friends.insert(u.to_owned());
        }
        self.requests.clear_between(u, v);

        if inserted {
            log::debug!("Friendship {} <-> {} added", u, v);
        }
        self.assert_consistent();
        inserted
    }

    /// Remove the friendship between `u` and `v` if there is one
    pub fn remove_friendship(&mut self, u: &str, v: &str) -> bool {
        let removed = self
            .adjacency
            .get_mut(u)
            .map_or(false, |friends| friends.remove(v));
        if !removed {
            return false;
        }

        if let Some(friends) = self.adjacency.get_mut(v) {
            friends.remove(u);
        }
        log::debug!("Friendship {} <-> {} removed", u, v);
        self.assert_consistent();
        true
    }

    /// Verify the structural invariants of the graph.
    ///
    /// The adjacency and profile maps must name the same users, friendships
    /// must be symmetric and between known, distinct users, and pending
    /// friend requests must only name known users.
    pub fn check_consistency(&self) -> Result<()> {
        if self.adjacency.len() != self.profiles.len()
            || self
                .adjacency
                .keys()
                .any(|name| !self.profiles.contains_key(name))
        {
            return Err(GraphError::Inconsistent(
                "adjacency and profile maps name different users".to_owned(),
            ));
        }

        for (user, friends) in &self.adjacency {
            for friend in friends {
                if friend == user {
                    return Err(GraphError::Inconsistent(format!(
                        "{} is friends with itself",
                        user
                    )));
                }
                match self.adjacency.get(friend) {
                    None => {
                        return Err(GraphError::Inconsistent(format!(
                            "{} is friends with unknown user {}",
                            user, friend
                        )))
                    }
                    Some(back) if !back.contains(user) => {
                        return Err(GraphError::Inconsistent(format!(
                            "friendship {} -> {} is not symmetric",
                            user, friend
                        )))
                    }
                    Some(_) => {}
                }
            }
        }

        for (from, to) in self.requests.iter() {
            if !self.contains(from) || !self.contains(to) {
                return Err(GraphError::Inconsistent(format!(
                    "friend request {} -> {} names an unknown user",
                    from, to
                )));
            }
        }

        Ok(())
    }

    /// Insert a user without touching the cluster index
    pub(crate) fn insert_user(&mut self, name: &str, profile: Profile) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }

        self.adjacency.insert(name.to_owned(), BTreeSet::new());
        self.profiles.insert(name.to_owned(), profile);
        log::debug!("User {} added", name);
        true
    }

    pub(crate) fn rebuild_clusters(&mut self) {
        self.clusters = TasteClusters::rebuild(
            &self.catalog,
            self.profiles
                .values()
                .map(|profile| profile.tastes.as_slice()),
        );
        log::debug!("Taste clusters rebuilt for {} users", self.profiles.len());
    }

    fn assert_consistent(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.check_consistency() {
                panic!("{}", err);
            }
        }
    }
}
