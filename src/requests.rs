use std::collections::{BTreeMap, BTreeSet};

use crate::SocialGraph;

/// Pending friend requests, keyed by recipient
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FriendRequests {
    pending: BTreeMap<String, BTreeSet<String>>,
}

impl FriendRequests {
    pub fn len(&self) -> usize {
        self.pending.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.pending
            .get(to)
            .map_or(false, |senders| senders.contains(from))
    }

    /// Iterate over `(from, to)` pairs, ordered by recipient then sender
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pending.iter().flat_map(|(to, senders)| {
            senders
                .iter()
                .map(move |from| (from.as_str(), to.as_str()))
        })
    }

    pub(crate) fn insert(&mut self, from: &str, to: &str) -> bool {
        self.pending
            .entry(to.to_owned())
            .or_default()
            .insert(from.to_owned())
    }

    pub(crate) fn remove(&mut self, from: &str, to: &str) -> bool {
        let senders = match self.pending.get_mut(to) {
            Some(senders) => senders,
            None => return false,
        };
        let removed = senders.remove(from);
        if senders.is_empty() {
            self.pending.remove(to);
        }
        removed
    }

    pub(crate) fn clear_between(&mut self, a: &str, b: &str) {
        self.remove(a, b);
        self.remove(b, a);
    }

    /// Drop every request sent to or by `name`
    pub(crate) fn forget(&mut self, name: &str) {
        self.pending.remove(name);
        self.pending.retain(|_, senders| {
            senders.remove(name);
            !senders.is_empty()
        });
    }
}

/// Result of sending a friend request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    AlreadyPending,
    AlreadyFriends,
    /// The sender and recipient are the same user, or one of them is unknown
    Invalid,
}

impl SocialGraph {
    /// Ask `to` to become friends with `from`
    pub fn send_friend_request(&mut self, from: &str, to: &str) -> SendOutcome {
        if from == to || !self.contains(from) || !self.contains(to) {
            return SendOutcome::Invalid;
        }
        if self
            .friends(from)
            .map_or(false, |friends| friends.contains(to))
        {
            return SendOutcome::AlreadyFriends;
        }
        if !self.requests.insert(from, to) {
            return SendOutcome::AlreadyPending;
        }

        log::debug!("Friend request {} -> {} sent", from, to);
        SendOutcome::Sent
    }

    /// Accept the request `from` sent to `to`, creating the friendship
    pub fn accept_friend_request(&mut self, from: &str, to: &str) -> bool {
        if !self.requests.remove(from, to) {
            return false;
        }
        log::debug!("Friend request {} -> {} accepted", from, to);
        self.add_friendship(from, to);
        true
    }

    /// Drop the request `from` sent to `to`
    pub fn reject_friend_request(&mut self, from: &str, to: &str) -> bool {
        let removed = self.requests.remove(from, to);
        if removed {
            log::debug!("Friend request {} -> {} rejected", from, to);
        }
        removed
    }

    pub fn has_pending_request(&self, from: &str, to: &str) -> bool {
        self.requests.contains(from, to)
    }

    /// Senders of the requests waiting for `to`, in ascending order
    pub fn incoming_requests(&self, to: &str) -> Vec<String> {
        self.requests
            .pending
            .get(to)
            .map(|senders| senders.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Recipients of the requests `from` has sent, in ascending order
    pub fn outgoing_requests(&self, from: &str) -> Vec<String> {
        self.requests
            .iter()
            .filter(|(sender, _)| *sender == from)
            .map(|(_, to)| to.to_owned())
            .collect()
    }

    pub fn friend_requests(&self) -> &FriendRequests {
        &self.requests
    }
}
