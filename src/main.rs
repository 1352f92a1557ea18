use anyhow::{Context, Result};
use clap::Parser;

use photo_share::cli::handlers::{self, CommandContext};
use photo_share::cli::{Cli, Commands};
use photo_share::config::PhotoShareConfig;
use photo_share::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let mut config = PhotoShareConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load config")?;
    if let Some(seed) = cli.seed {
        config.data.seed = Some(seed);
    }

    let log_file = cli.log_file.or_else(|| config.log.file.clone());
    logging::init(cli.verbose, log_file);

    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded config"),
        None => tracing::debug!("No config file found, using defaults"),
    }

    if matches!(cli.command, Commands::Schema) {
        return handlers::handle_schema();
    }

    let ctx = CommandContext::new(config).context("Failed to load seed data")?;

    match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handlers::handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(ctx, mutation, variables),
        Commands::Schema => handlers::handle_schema(),
    }
}
