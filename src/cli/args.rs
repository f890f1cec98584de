//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Contact directory for the terminal: name-ordered records with flat-file import/export
///
/// Runs the interactive menu shell when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Contacts file (default: from config)
    #[arg(short = 'f', long, global = true, env = "ROLO_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    Add {
        /// Contact name, the ordering key
        name: String,
        /// Phone number: optional + followed by 10-15 digits
        phone: String,
        /// Email address, local@domain.tld
        email: String,
    },

    /// Overwrite phone and email of an existing contact
    Update {
        /// Exact name of the contact to change
        name: String,
        /// New phone number
        phone: String,
        /// New email address
        email: String,
    },

    /// Look up a contact by exact name
    Search {
        /// Name to look up
        name: String,
    },

    /// Remove a contact by exact name
    Delete {
        /// Name to remove
        name: String,
    },

    /// Print all contacts in name order
    List,

    /// Show the search-tree shape of the contacts file
    Tree,

    /// Write contacts to a file, one name,phone,email line each
    Export {
        /// Target file (default: the contacts file)
        path: Option<PathBuf>,
    },

    /// Merge name,phone,email lines from a file into the contacts file
    Import {
        /// Source file with one record per line
        path: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
