mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::PhotoShareConfig;
use crate::error::Result;
use crate::storage::{PhotoStore, Seed};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PhotoShareConfig,
    pub store: Arc<PhotoStore>,
}

impl CommandContext {
    /// Build the store, seeded when the config names a seed file.
    pub fn new(config: PhotoShareConfig) -> Result<Self> {
        let store = match &config.data.seed {
            Some(path) => PhotoStore::from_seed(Seed::load(path)?)?,
            None => PhotoStore::new(),
        };
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }
}
