use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SocialGraph;

/// An opaque user password.
///
/// The value is stored and compared as plain text. All credential handling
/// goes through this type so that it can be replaced by a hashed scheme
/// without touching the graph engine.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new<S: Into<String>>(secret: S) -> Self {
        Credential(secret.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check an attempt against the stored secret (raw equality)
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Credential::new(secret)
    }
}

/// Result of a login attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    UnknownUser,
    WrongPassword,
}

impl SocialGraph {
    /// Check `password` against the credential stored in `name`'s profile
    pub fn login(&self, name: &str, password: &str) -> LoginOutcome {
        match self.profile(name) {
            None => LoginOutcome::UnknownUser,
            Some(profile) if profile.password.matches(password) => {
                log::debug!("Login accepted for {}", name);
                LoginOutcome::Accepted
            }
            Some(_) => {
                log::debug!("Login rejected for {}", name);
                LoginOutcome::WrongPassword
            }
        }
    }
}
