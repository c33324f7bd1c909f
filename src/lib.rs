pub mod analytics;
pub mod catalog;
pub mod cluster;
pub mod config;
pub mod credentials;
mod errors;
pub mod path;
pub mod profile;
pub mod recommend;
pub mod requests;
mod serde;
pub mod shared;
pub mod storage;
mod store;

pub use catalog::TasteCatalog;
pub use cluster::TasteClusters;
pub use config::GraphConfig;
pub use credentials::{Credential, LoginOutcome};
pub use errors::{GraphError, Result};
pub use profile::Profile;
pub use recommend::{Recommendation, Tier};
pub use requests::{FriendRequests, SendOutcome};
pub use shared::SharedGraph;
pub use storage::{
    load_or_create, FileStorage, GraphState, GraphStorage, MemoryStorage,
};
pub use store::SocialGraph;

pub const SOCIAL_FOLDER: &str = ".social";

pub const CONFIG_FILE: &str = "config.json";
pub const GRAPH_FILE: &str = "graph.json";

#[cfg(test)]
mod tests;
