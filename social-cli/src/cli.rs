use std::path::PathBuf;

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "social-cli")]
#[clap(about = "Manage users, friendships and recommendations of a social graph", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_parser,
        help = "Directory holding the .social folder, defaults to the current directory"
    )]
    pub root: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
