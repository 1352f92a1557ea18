//! GraphQL schema, resolvers and HTTP server for photo-share.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! photo-share serve --port 4000
//!
//! # Execute a query from CLI
//! photo-share query '{ totalPhotos allPhotos { id name url } }'
//!
//! # Execute a mutation from CLI
//! photo-share mutate 'postPhoto(input: { name: "Sunset" }) { id url }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `totalPhotos`, `allPhotos`
//! - **Mutations**: `postPhoto`
//! - **Types**: `Photo`, `User`, `PhotoCategory`, `PostPhotoInput`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, PhotoShareSchema, QueryRoot, build_schema};
pub use server::{GREETING, router, run_server, serve};
pub use types::*;
