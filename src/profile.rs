use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::credentials::Credential;

/// Everything a user owns besides their friendships
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub bio: String,
    /// Taste tags in the order the user picked them
    ///
    /// Order only matters for how the cluster index chains tags together.
    pub tastes: Vec<String>,
    #[serde(default)]
    pub password: Credential,
    /// Opaque avatar image, never inspected by the graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Vec<u8>>,
}

impl Profile {
    pub fn new<S: Into<String>>(bio: S, tastes: Vec<String>) -> Self {
        Profile {
            bio: bio.into(),
            tastes,
            password: Credential::default(),
            avatar: None,
        }
    }

    pub fn with_password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Credential::new(password);
        self
    }

    pub fn with_avatar(mut self, avatar: Vec<u8>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Number of distinct tastes listed by both profiles
    pub fn shared_tastes(&self, other: &Profile) -> usize {
        let ours: HashSet<&str> =
            self.tastes.iter().map(String::as_str).collect();
        let theirs: HashSet<&str> =
            other.tastes.iter().map(String::as_str).collect();
        ours.intersection(&theirs).count()
    }
}
