use std::path::PathBuf;

use clap::Subcommand;

use crate::util::Workspace;
use crate::AppError;

/// Available commands for the `friend` subcommand
#[derive(Subcommand, Debug)]
pub enum Friend {
    Add(Add),
    Remove(Remove),
}

impl Friend {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        match self {
            Friend::Add(add) => add.run(root),
            Friend::Remove(remove) => remove.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "add",
    about = "Make two users friends, creating missing users on the way"
)]
pub struct Add {
    user_a: String,
    user_b: String,
}

impl Add {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        if workspace.graph.add_friendship(&self.user_a, &self.user_b) {
            workspace.save()?;
            println!("{} and {} are now friends", self.user_a, self.user_b);
        } else {
            println!("Nothing to do");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "End the friendship between two users")]
pub struct Remove {
    user_a: String,
    user_b: String,
}

impl Remove {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        if workspace.graph.remove_friendship(&self.user_a, &self.user_b) {
            workspace.save()?;
            println!(
                "{} and {} are no longer friends",
                self.user_a, self.user_b
            );
        } else {
            println!("{} and {} were not friends", self.user_a, self.user_b);
        }
        Ok(())
    }
}
