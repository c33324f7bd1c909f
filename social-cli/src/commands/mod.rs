use std::path::PathBuf;

use clap::Subcommand;

use crate::AppError;

mod friend;
mod query;
mod request;
mod signup;
mod stats;
mod user;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Manage users")]
    User {
        #[clap(subcommand)]
        subcommand: user::User,
    },
    Signup(signup::Signup),
    Login(signup::Login),
    #[command(about = "Manage friendships")]
    Friend {
        #[clap(subcommand)]
        subcommand: friend::Friend,
    },
    #[command(about = "Manage friend requests")]
    Request {
        #[clap(subcommand)]
        subcommand: request::Request,
    },
    Path(query::Path),
    Recommend(query::Recommend),
    Mates(query::Mates),
    Network(query::Network),
    Mutual(query::Mutual),
    Popular(stats::Popular),
    Components(stats::Components),
    Adjacency(stats::Adjacency),
    Profiles(stats::Profiles),
    Tastes(stats::Tastes),
}

impl Commands {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        match self {
            Commands::User { subcommand } => subcommand.run(root),
            Commands::Signup(signup) => signup.run(root),
            Commands::Login(login) => login.run(root),
            Commands::Friend { subcommand } => subcommand.run(root),
            Commands::Request { subcommand } => subcommand.run(root),
            Commands::Path(path) => path.run(root),
            Commands::Recommend(recommend) => recommend.run(root),
            Commands::Mates(mates) => mates.run(root),
            Commands::Network(network) => network.run(root),
            Commands::Mutual(mutual) => mutual.run(root),
            Commands::Popular(popular) => popular.run(root),
            Commands::Components(components) => components.run(root),
            Commands::Adjacency(adjacency) => adjacency.run(root),
            Commands::Profiles(profiles) => profiles.run(root),
            Commands::Tastes(tastes) => tastes.run(root),
        }
    }
}
