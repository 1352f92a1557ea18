//! # photo-share - an in-memory GraphQL photo API
//!
//! photo-share serves a small GraphQL schema for posting photos and listing
//! them. Everything lives in memory: restarting the server starts from an
//! empty list (or from the configured seed file).
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on port 4000
//! photo-share serve
//!
//! # Post a photo through the API
//! curl -X POST localhost:4000/graphql -H 'content-type: application/json' \
//!   -d '{"query":"mutation { postPhoto(input: {name: \"Sunset\"}) { id url } }"}'
//!
//! # Print the schema
//! photo-share schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Photo, PhotoCategory, User, Tag)
//! - [`storage`]: In-memory photo store and seed files

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `photo-share.toml` and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PhotoShareError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for photo-share.
pub mod model;

/// In-memory storage layer.
pub mod storage;

pub mod logging;
