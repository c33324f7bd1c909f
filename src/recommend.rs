use std::{collections::BTreeSet, fmt};

use itertools::Itertools;
use serde::Serialize;

use crate::SocialGraph;

/// Priority bucket of a recommendation, higher is better
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub enum Tier {
    /// Reachable through a friend, but no taste cluster in common
    FriendsOfFriends = 0,
    /// Shares a taste cluster, but no friend in common
    Cluster = 1,
    /// Both shares a taste cluster and is reachable through a friend
    ClusterAndFriendsOfFriends = 2,
}

impl Tier {
    /// Numeric rank: 2 for cluster + friends-of-friends, 1 for cluster
    /// only, 0 for friends-of-friends only
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::ClusterAndFriendsOfFriends => "Cluster + FoF",
            Tier::Cluster => "Cluster",
            Tier::FriendsOfFriends => "Friends-of-Friends",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user suggested as a new friend
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub tier: Tier,
    /// Number of tastes listed by both users (exact tags, not clusters)
    pub shared_tastes: usize,
}

impl SocialGraph {
    /// Users reachable through exactly one intermediate friend, excluding
    /// `name` itself and its direct friends
    pub fn friends_of_friends(&self, name: &str) -> BTreeSet<String> {
        let direct = match self.friends(name) {
            Some(direct) => direct,
            None => return BTreeSet::new(),
        };

        direct
            .iter()
            .filter_map(|friend| self.friends(friend))
            .flatten()
            .filter(|other| other.as_str() != name && !direct.contains(*other))
            .cloned()
            .collect()
    }

    /// Every other user whose tastes fall into one of the taste clusters of
    /// `name`. Empty when `name` is unknown or lists no tastes.
    pub fn cluster_mates(&self, name: &str) -> BTreeSet<String> {
        let tastes = match self.profile(name) {
            Some(profile) if !profile.tastes.is_empty() => &profile.tastes,
            _ => return BTreeSet::new(),
        };

        let cluster_tastes = self.clusters.cluster_members(tastes);
        self.profiles
            .iter()
            .filter(|(other, _)| other.as_str() != name)
            .filter(|(_, profile)| {
                profile
                    .tastes
                    .iter()
                    .any(|taste| cluster_tastes.contains(taste))
            })
            .map(|(other, _)| other.clone())
            .collect()
    }

    /// Number of distinct tastes `a` and `b` both list, zero if either is
    /// unknown
    pub fn shared_taste_count(&self, a: &str, b: &str) -> usize {
        match (self.profile(a), self.profile(b)) {
            (Some(a), Some(b)) => a.shared_tastes(b),
            _ => 0,
        }
    }

    /// Rank candidate friends for `name`.
    ///
    /// Candidates come from two sources: friends of friends, and users
    /// sharing a taste cluster. Users found by both come first, then
    /// cluster-only users, then friends-of-friends only. Within a tier,
    /// users sharing more exact tastes come first, ties broken by name.
    ///
    /// Direct friends never appear: friends of friends exclude them by
    /// construction and the cluster-only tier subtracts them.
    pub fn recommend_friends(&self, name: &str) -> Vec<Recommendation> {
        let direct = match self.friends(name) {
            Some(direct) => direct,
            None => return Vec::new(),
        };

        let fof = self.friends_of_friends(name);
        let cluster_users = self.cluster_mates(name);

        let both: BTreeSet<&String> = cluster_users.intersection(&fof).collect();
        let cluster_only = cluster_users
            .iter()
            .filter(|user| !both.contains(user) && !direct.contains(*user));
        let fof_only = fof.iter().filter(|user| !both.contains(user));

        let recommendations: Vec<Recommendation> = self
            .rank_tier(name, both.iter().copied(), Tier::ClusterAndFriendsOfFriends)
            .chain(self.rank_tier(name, cluster_only, Tier::Cluster))
            .chain(self.rank_tier(name, fof_only, Tier::FriendsOfFriends))
            .collect();

        log::debug!(
            "{} recommendations for {} ({} friends of friends, {} cluster mates)",
            recommendations.len(),
            name,
            fof.len(),
            cluster_users.len()
        );
        recommendations
    }

    fn rank_tier<'a, I>(
        &'a self,
        name: &'a str,
        candidates: I,
        tier: Tier,
    ) -> impl Iterator<Item = Recommendation> + 'a
    where
        I: Iterator<Item = &'a String> + 'a,
    {
        candidates
            .map(move |candidate| Recommendation {
                name: candidate.clone(),
                tier,
                shared_tastes: self.shared_taste_count(name, candidate),
            })
            .sorted_by(|a, b| {
                b.shared_tastes
                    .cmp(&a.shared_tastes)
                    .then_with(|| a.name.cmp(&b.name))
            })
    }
}
