use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lists", about = concat!("[=] lists v", env!("CARGO_PKG_VERSION"), " - nested to-do lists in plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a list's items
    Show(ShowArgs),
    /// Add an item to a list
    Add(AddArgs),
    /// Remove an item by number (also deletes the nested list it heads)
    Rm(RmArgs),
    /// Enumerate all stored lists
    All,
}

#[derive(Args)]
pub struct ShowArgs {
    /// List to show (default: the top-level list)
    pub list: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
    /// List to add to (default: the top-level list)
    #[arg(long)]
    pub list: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Item number as printed by `show` (1-based)
    pub index: usize,
    /// List to remove from (default: the top-level list)
    #[arg(long)]
    pub list: Option<String>,
}
