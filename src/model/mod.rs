//! Data models for photo-share.
//!
//! - [`Photo`]: a posted photo and its derived image URL
//! - [`PhotoCategory`]: the closed set of photo categories
//! - [`User`]: a GitHub user known to the store
//! - [`Tag`]: a user tagged in a photo

mod photo;
mod types;
mod user;

pub use photo::{NewPhoto, Photo, image_url};
pub use types::PhotoCategory;
pub use user::{Tag, User};
