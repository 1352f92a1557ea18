//! In-memory storage for photos, users and tags.
//!
//! Nothing is persisted: a [`PhotoStore`] starts empty (or from a [`Seed`])
//! and is dropped with the process.
//!
//! ## Components
//!
//! - [`PhotoStore`]: append-only photo list plus the user/tag lookups
//! - [`Seed`]: initial users, photos and tags loaded from a TOML file

mod photo_store;
mod seed;

pub use photo_store::PhotoStore;
pub use seed::Seed;
