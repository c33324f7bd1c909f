use std::fs;
use std::path::PathBuf;

use clap::Subcommand;
use itertools::Itertools;
use social_graph::Profile;

use crate::util::Workspace;
use crate::AppError;

/// Available commands for the `user` subcommand
#[derive(Subcommand, Debug)]
pub enum User {
    Add(Add),
    Remove(Remove),
    Edit(Edit),
    Show(Show),
}

impl User {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        match self {
            User::Add(add) => add.run(root),
            User::Remove(remove) => remove.run(root),
            User::Edit(edit) => edit.run(root),
            User::Show(show) => show.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a user without any validation")]
pub struct Add {
    #[clap(help = "Name of the user")]
    name: String,
    #[clap(long, default_value = "", help = "Short description")]
    bio: String,
    #[clap(long, value_delimiter = ',', help = "Comma separated taste tags")]
    tastes: Vec<String>,
    #[clap(long, help = "Password of the user")]
    password: Option<String>,
}

impl Add {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;

        let mut profile = Profile::new(self.bio.as_str(), self.tastes.clone());
        if let Some(password) = &self.password {
            profile = profile.with_password(password.as_str());
        }
        if !workspace.graph.add_user_with(&self.name, profile) {
            return Err(AppError::UserExists(self.name.clone()));
        }

        workspace.save()?;
        println!("User {} added", self.name.trim());
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "remove",
    about = "Remove a user with all of their friendships"
)]
pub struct Remove {
    #[clap(help = "Name of the user")]
    name: String,
}

impl Remove {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        if !workspace.graph.remove_user(&self.name) {
            return Err(AppError::UnknownUser(self.name.clone()));
        }

        workspace.save()?;
        println!("User {} removed", self.name);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "edit", about = "Edit the profile of a user")]
pub struct Edit {
    #[clap(help = "Name of the user")]
    name: String,
    #[clap(long, help = "New description, kept when omitted")]
    bio: Option<String>,
    #[clap(
        long,
        value_delimiter = ',',
        help = "New comma separated taste tags, kept when omitted"
    )]
    tastes: Option<Vec<String>>,
    #[clap(long, help = "New password, kept when omitted")]
    password: Option<String>,
    #[clap(long, value_parser, help = "Image file to use as avatar")]
    avatar: Option<PathBuf>,
}

impl Edit {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        let current = workspace
            .graph
            .profile(&self.name)
            .cloned()
            .ok_or_else(|| AppError::UnknownUser(self.name.clone()))?;

        let bio = self.bio.as_deref().unwrap_or(&current.bio);
        let tastes = self.tastes.clone().unwrap_or(current.tastes.clone());
        workspace.graph.edit_profile(
            &self.name,
            bio,
            tastes,
            self.password.as_deref(),
        );

        if let Some(path) = &self.avatar {
            let avatar = fs::read(path)?;
            workspace.graph.set_avatar(&self.name, Some(avatar));
        }

        workspace.save()?;
        println!("Profile of {} updated", self.name);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show the profile and friends of a user")]
pub struct Show {
    #[clap(help = "Name of the user")]
    name: String,
}

impl Show {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.name)?;
        let graph = &workspace.graph;
        let profile = graph.get_profile(&self.name);

        println!("{}", self.name);
        println!("\tbio: {}", profile.bio);
        println!("\ttastes: {}", profile.tastes.iter().join(", "));
        if let Some(avatar) = &profile.avatar {
            println!("\tavatar: {} bytes", avatar.len());
        }
        if let Some(friends) = graph.friends(&self.name) {
            println!("\tfriends: {}", friends.iter().join(", "));
        }
        Ok(())
    }
}
