use clap::{Parser, Subcommand};
use gitcoach::commands::*;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcoach")]
#[command(about = "A Git client that explains what went wrong in plain language")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current branch and changed files
    Status,
    /// Stage files (deleted paths are staged as removals)
    Stage {
        /// Repo-relative paths to stage
        paths: Vec<PathBuf>,
    },
    /// Remove files from the staging area, keeping your edits
    Unstage {
        /// Repo-relative paths to unstage
        paths: Vec<PathBuf>,
    },
    /// Commit the staged changes
    Commit {
        /// Commit message
        message: String,
    },
    /// List branches, or create/switch/delete one
    Branch {
        /// Branch name (omit to list branches)
        name: Option<String>,
        /// Create the branch and switch to it
        #[arg(short = 'b', long = "create")]
        create: bool,
        /// Delete the branch
        #[arg(short = 'd', long = "delete")]
        delete: bool,
    },
    /// Merge a branch into the current (or a chosen) branch
    Merge {
        /// Branch to merge from
        source: String,
        /// Branch to merge into (defaults to the current branch)
        #[arg(long)]
        into: Option<String>,
    },
    /// Connect a remote repository
    Remote {
        /// Remote URL
        url: String,
        /// Remote name
        #[arg(long, default_value = "origin")]
        name: String,
    },
    /// Publish your commits to a remote
    Push {
        /// Branch to push (defaults to the current branch)
        branch: Option<String>,
        /// Remote name
        #[arg(long, default_value = "origin")]
        remote: String,
    },
    /// Fetch remote changes and merge them in
    Pull {
        /// Branch to pull (defaults to the current branch)
        branch: Option<String>,
        /// Remote name
        #[arg(long, default_value = "origin")]
        remote: String,
    },
    /// Create a new repository
    Init {
        /// Where to create it (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Clone a repository
    Clone {
        /// Repository URL
        url: String,
        /// Destination directory
        destination: PathBuf,
    },
    /// Look up a Git term, or list the whole glossary
    Glossary {
        /// Term to explain
        term: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let ok = match cli.command {
        Commands::Status => execute_status().success,
        Commands::Stage { paths } => execute_stage(&paths).success,
        Commands::Unstage { paths } => execute_unstage(&paths).success,
        Commands::Commit { message } => execute_commit(&message).success,
        Commands::Branch {
            name,
            create,
            delete,
        } => match name {
            None => execute_branches().success,
            Some(name) if create => execute_branch_create(&name).success,
            Some(name) if delete => execute_branch_delete(&name).success,
            Some(name) => execute_branch_switch(&name).success,
        },
        Commands::Merge { source, into } => execute_merge(&source, into.as_deref()).success,
        Commands::Remote { url, name } => execute_remote_add(&url, &name).success,
        Commands::Push { branch, remote } => execute_push(&remote, branch.as_deref()).success,
        Commands::Pull { branch, remote } => execute_pull(&remote, branch.as_deref()).success,
        Commands::Init { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from("."));
            execute_init(&path).success
        }
        Commands::Clone { url, destination } => execute_clone(&url, &destination).success,
        Commands::Glossary { term } => execute_glossary(term.as_deref()),
    };

    if !ok {
        std::process::exit(1);
    }
}
