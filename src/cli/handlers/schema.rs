use crate::graphql::build_schema;
use crate::storage::PhotoStore;
use anyhow::Result;
use std::sync::Arc;

/// Print the SDL. The schema does not depend on stored data, so no seed is
/// loaded.
pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(PhotoStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}
