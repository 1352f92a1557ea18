use super::seed::Seed;
use crate::{
    error::Result,
    model::{NewPhoto, Photo, Tag, User},
};
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    /// Id handed to the next inserted photo
    next_id: u64,
    photos: Vec<Photo>,
    users: Vec<User>,
    tags: Vec<Tag>,
}

impl StoreState {
    fn insert(&mut self, new_photo: NewPhoto) -> Photo {
        let photo = new_photo.into_photo(self.next_id);
        self.next_id += 1;
        self.photos.push(photo.clone());
        photo
    }
}

/// Append-only photo list shared by every request.
///
/// Id assignment and append happen under one write lock, so ids are unique
/// and strictly increasing no matter how many requests run at once.
#[derive(Default)]
pub struct PhotoStore {
    state: RwLock<StoreState>,
}

impl PhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        seed.validate()?;

        let mut state = StoreState {
            users: seed.users,
            tags: seed.tags,
            ..StoreState::default()
        };
        for new_photo in seed.photos {
            state.insert(new_photo);
        }

        tracing::info!(
            users = state.users.len(),
            photos = state.photos.len(),
            tags = state.tags.len(),
            "Seeded photo store"
        );

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    pub async fn total_photos(&self) -> usize {
        self.state.read().await.photos.len()
    }

    pub async fn all_photos(&self) -> Vec<Photo> {
        self.state.read().await.photos.clone()
    }

    pub async fn post_photo(&self, new_photo: NewPhoto) -> Photo {
        let photo = self.state.write().await.insert(new_photo);
        tracing::info!(id = photo.id, name = %photo.name, category = %photo.category, "Posted photo");
        photo
    }

    pub async fn find_user(&self, login: &str) -> Option<User> {
        self.state
            .read()
            .await
            .users
            .iter()
            .find(|u| u.github_login == login)
            .cloned()
    }

    pub async fn photos_posted_by(&self, login: &str) -> Vec<Photo> {
        self.state
            .read()
            .await
            .photos
            .iter()
            .filter(|p| p.is_posted_by(login))
            .cloned()
            .collect()
    }

    /// Users tagged in a photo, in tag order. Tags naming an unknown user are
    /// skipped.
    pub async fn tagged_users(&self, photo_id: u64) -> Vec<User> {
        let state = self.state.read().await;
        state
            .tags
            .iter()
            .filter(|t| t.photo_id == photo_id)
            .filter_map(|t| state.users.iter().find(|u| u.github_login == t.github_login))
            .cloned()
            .collect()
    }

    /// Photos a user is tagged in, in tag order.
    pub async fn photos_tagging(&self, login: &str) -> Vec<Photo> {
        let state = self.state.read().await;
        state
            .tags
            .iter()
            .filter(|t| t.github_login == login)
            .filter_map(|t| state.photos.iter().find(|p| p.id == t.photo_id))
            .cloned()
            .collect()
    }
}
