use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-share")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL API for posting and browsing photos"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./photo-share.toml when present)
    #[arg(long, global = true, env = "PHOTO_SHARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed file with initial users, photos and tags (overrides config)
    #[arg(long, global = true, env = "PHOTO_SHARE_SEED")]
    pub seed: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "PHOTO_SHARE_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "PHOTO_SHARE_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against a fresh store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a fresh store
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
