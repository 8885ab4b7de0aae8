//! CLI commands and argument parsing

use crate::types::MediaVariant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource handler CLI for paginated REST APIs
#[derive(Parser, Debug)]
#[command(name = "resource-mediator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL, overriding the config file
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Path prefix, overriding the config file
    #[arg(short, long, global = true)]
    pub prefix: Option<String>,

    /// Print raw JSON instead of models
    #[arg(long, global = true)]
    pub raw: bool,

    /// Media variants to request (repeatable)
    #[arg(short, long, global = true, value_enum)]
    pub accept: Vec<MediaVariant>,

    /// Model name for converted objects
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single resource
    Get {
        /// Resource path below the prefix
        resource: String,
    },

    /// Fetch a paginated collection, one item per line
    List {
        /// Resource path below the prefix
        resource: String,

        /// Maximum number of items (sign is ignored, 0 = all)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Create a resource from a JSON document
    Create {
        /// Resource path below the prefix
        resource: String,

        /// JSON body
        #[arg(short, long)]
        data: String,
    },

    /// PUT a resource, expecting 204 No Content
    Put {
        /// Resource path below the prefix
        resource: String,
    },

    /// DELETE a resource, expecting 204 No Content
    Delete {
        /// Resource path below the prefix
        resource: String,
    },

    /// Check a resource with HEAD, expecting 204 No Content
    Check {
        /// Resource path below the prefix
        resource: String,
    },
}
