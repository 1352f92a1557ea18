use crate::graphql::build_schema;
use anyhow::{Context, Result};

use super::CommandContext;

/// Run one GraphQL request against the context's store and print the JSON
/// response.
pub fn execute_and_print(
    ctx: CommandContext,
    query: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.store);

    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::warn!(errors = response.errors.len(), "GraphQL request returned errors");
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
