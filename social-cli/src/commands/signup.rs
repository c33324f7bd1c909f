use std::path::PathBuf;

use itertools::Itertools;
use social_graph::{GraphConfig, LoginOutcome, Profile, SocialGraph};

use crate::util::Workspace;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "signup", about = "Register a new user")]
pub struct Signup {
    #[clap(help = "Name of the new user")]
    name: String,
    #[clap(long, help = "Password of the new user")]
    password: String,
    #[clap(long, default_value = "", help = "Short description")]
    bio: String,
    #[clap(
        long,
        value_delimiter = ',',
        help = "Comma separated taste tags picked from the catalog"
    )]
    tastes: Vec<String>,
}

impl Signup {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        validate_signup(
            &workspace.graph,
            &workspace.config,
            &self.name,
            &self.password,
            &self.tastes,
        )?;

        let profile = Profile::new(self.bio.as_str(), self.tastes.clone())
            .with_password(self.password.as_str());
        workspace.graph.add_user_with(&self.name, profile);

        workspace.save()?;
        println!("Welcome, {}!", self.name.trim());
        Ok(())
    }
}

/// Check the rules a new account has to follow before it reaches the graph
pub fn validate_signup(
    graph: &SocialGraph,
    config: &GraphConfig,
    name: &str,
    password: &str,
    tastes: &[String],
) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidSignup("name is empty".to_owned()));
    }
    if graph.contains(name) {
        return Err(AppError::UserExists(name.to_owned()));
    }
    if password.is_empty() {
        return Err(AppError::InvalidSignup("password is empty".to_owned()));
    }

    let distinct = tastes.iter().unique().count();
    if distinct < config.min_tastes {
        return Err(AppError::InvalidSignup(format!(
            "pick at least {} tastes, got {}",
            config.min_tastes, distinct
        )));
    }

    let unknown = config.catalog.unknown_tastes(tastes);
    if !unknown.is_empty() {
        return Err(AppError::InvalidSignup(format!(
            "unknown tastes: {}",
            unknown.iter().join(", ")
        )));
    }

    Ok(())
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "login", about = "Check the password of a user")]
pub struct Login {
    #[clap(help = "Name of the user")]
    name: String,
    #[clap(long, help = "Password to check")]
    password: String,
}

impl Login {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        match workspace.graph.login(&self.name, &self.password) {
            LoginOutcome::Accepted => {
                println!("Logged in as {}", self.name);
                Ok(())
            }
            LoginOutcome::UnknownUser => {
                Err(AppError::UnknownUser(self.name.clone()))
            }
            LoginOutcome::WrongPassword => {
                Err(AppError::LoginFailed(self.name.clone()))
            }
        }
    }
}
