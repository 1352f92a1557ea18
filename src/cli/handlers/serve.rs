use crate::graphql::{build_schema, run_server};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let settings = ctx.config.server.with_overrides(host, port);
    let schema = build_schema(ctx.store);

    let base = format!("http://localhost:{}", settings.port);
    println!(
        "{} {}{}",
        "GraphQL server:".green(),
        base,
        settings.graphql_path
    );
    println!(
        "{} {}{}",
        "Playground:".green(),
        base,
        settings.playground_path
    );

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
