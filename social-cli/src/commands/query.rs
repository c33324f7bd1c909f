use std::path::PathBuf;

use itertools::Itertools;

use crate::util::Workspace;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "path", about = "Find a shortest chain of friends between two users")]
pub struct Path {
    from: String,
    to: String,
}

impl Path {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.from)?;
        workspace.require_user(&self.to)?;

        match workspace.graph.shortest_path(&self.from, &self.to) {
            Some(path) => {
                println!("{}", path.iter().join(" -> "));
                println!("Degrees of separation: {}", path.len() - 1);
            }
            None => {
                println!("{} and {} are not connected", self.from, self.to)
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "recommend", about = "Suggest new friends for a user")]
pub struct Recommend {
    name: String,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Print the recommendations as JSON")]
    json: bool,
}

impl Recommend {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.name)?;
        let recommendations = workspace.graph.recommend_friends(&self.name);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
            return Ok(());
        }
        if recommendations.is_empty() {
            println!("No recommendations for {}", self.name);
        }
        for rec in recommendations {
            println!(
                "{}\t[{}]\t{} shared tastes",
                rec.name, rec.tier, rec.shared_tastes
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "mates", about = "List users sharing a taste cluster with a user")]
pub struct Mates {
    name: String,
}

impl Mates {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.name)?;

        for mate in workspace.graph.cluster_mates(&self.name) {
            println!("{}", mate);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "network", about = "List the friends of friends of a user")]
pub struct Network {
    name: String,
}

impl Network {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.name)?;

        for other in workspace.graph.friends_of_friends(&self.name) {
            println!("{}", other);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "mutual", about = "List the friends two users have in common")]
pub struct Mutual {
    user_a: String,
    user_b: String,
}

impl Mutual {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.user_a)?;
        workspace.require_user(&self.user_b)?;

        for friend in workspace.graph.mutual_friends(&self.user_a, &self.user_b)
        {
            println!("{}", friend);
        }
        Ok(())
    }
}
