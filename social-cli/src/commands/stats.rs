use std::path::PathBuf;

use itertools::Itertools;

use crate::util::Workspace;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "popular", about = "Rank users by number of friends")]
pub struct Popular {
    #[clap(long, help = "Show only the first N users")]
    limit: Option<usize>,
}

impl Popular {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        let ranking = workspace.graph.popularity();
        let limit = self.limit.unwrap_or(ranking.len());

        for (position, (name, degree)) in
            ranking.iter().take(limit).enumerate()
        {
            println!("{}.\t{}\t{} friends", position + 1, name, degree);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "components", about = "List groups of connected users")]
pub struct Components {}

impl Components {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        for (i, component) in
            workspace.graph.connected_components().iter().enumerate()
        {
            println!("{}: {}", i + 1, component.iter().join(", "));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "adjacency", about = "Print every user with their friends as JSON")]
pub struct Adjacency {}

impl Adjacency {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        let adjacency = workspace.graph.adjacency_list();
        println!("{}", serde_json::to_string_pretty(&adjacency)?);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "profiles", about = "List all users with their tastes")]
pub struct Profiles {}

impl Profiles {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        let graph = &workspace.graph;
        for name in graph.users() {
            let profile = graph.get_profile(name);
            println!("{}\t{}", name, profile.tastes.iter().join(", "));
            if !profile.bio.is_empty() {
                println!("\t{}", profile.bio);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "tastes", about = "List the taste catalog and its clusters")]
pub struct Tastes {
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Group tags by taste cluster")]
    clusters: bool,
}

impl Tastes {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;

        if self.clusters {
            for cluster in workspace.graph.clusters().clusters() {
                println!("{}", cluster.iter().join(", "));
            }
        } else {
            for tag in workspace.graph.catalog().tags() {
                println!("{}", tag);
            }
        }
        Ok(())
    }
}
