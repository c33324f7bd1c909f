use std::path::PathBuf;

use clap::Subcommand;
use social_graph::SendOutcome;

use crate::util::Workspace;
use crate::AppError;

/// Available commands for the `request` subcommand
#[derive(Subcommand, Debug)]
pub enum Request {
    Send(SendRequest),
    Accept(Answer),
    Reject(Answer),
    List(List),
}

impl Request {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        match self {
            Request::Send(send) => send.run(root),
            Request::Accept(answer) => answer.run(root, true),
            Request::Reject(answer) => answer.run(root, false),
            Request::List(list) => list.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "send", about = "Send a friend request")]
pub struct SendRequest {
    from: String,
    to: String,
}

impl SendRequest {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        workspace.require_user(&self.from)?;
        workspace.require_user(&self.to)?;

        match workspace.graph.send_friend_request(&self.from, &self.to) {
            SendOutcome::Sent => {
                workspace.save()?;
                println!("Friend request sent to {}", self.to);
            }
            SendOutcome::AlreadyPending => {
                println!("A request to {} is already pending", self.to)
            }
            SendOutcome::AlreadyFriends => {
                println!("{} and {} are already friends", self.from, self.to)
            }
            SendOutcome::Invalid => {
                println!("Users can't befriend themselves")
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(about = "Answer a pending friend request")]
pub struct Answer {
    #[clap(help = "User who sent the request")]
    from: String,
    #[clap(help = "User who received the request")]
    to: String,
}

impl Answer {
    pub fn run(
        &self,
        root: &Option<PathBuf>,
        accept: bool,
    ) -> Result<(), AppError> {
        let mut workspace = Workspace::open(root)?;
        let answered = if accept {
            workspace.graph.accept_friend_request(&self.from, &self.to)
        } else {
            workspace.graph.reject_friend_request(&self.from, &self.to)
        };
        if !answered {
            return Err(AppError::RequestNotFound(
                self.from.clone(),
                self.to.clone(),
            ));
        }

        workspace.save()?;
        if accept {
            println!("{} and {} are now friends", self.from, self.to);
        } else {
            println!("Request from {} rejected", self.from);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List pending friend requests of a user")]
pub struct List {
    name: String,
}

impl List {
    pub fn run(&self, root: &Option<PathBuf>) -> Result<(), AppError> {
        let workspace = Workspace::open(root)?;
        workspace.require_user(&self.name)?;

        println!("Incoming:");
        for from in workspace.graph.incoming_requests(&self.name) {
            println!("\t{}", from);
        }
        println!("Outgoing:");
        for to in workspace.graph.outgoing_requests(&self.name) {
            println!("\t{}", to);
        }
        Ok(())
    }
}
