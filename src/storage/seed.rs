use crate::{
    error::{PhotoShareError, Result},
    model::{NewPhoto, Tag, User},
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Initial contents of a [`PhotoStore`](super::PhotoStore).
///
/// Photos are numbered from 0 in file order, so tags refer to them by
/// position.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub photos: Vec<NewPhoto>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading seed file");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let seed: Seed = toml::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> Result<()> {
        let mut logins = HashSet::new();
        for user in &self.users {
            if !logins.insert(user.github_login.as_str()) {
                return Err(PhotoShareError::Seed(format!(
                    "duplicate user login '{}'",
                    user.github_login
                )));
            }
        }

        for tag in &self.tags {
            if tag.photo_id >= self.photos.len() as u64 {
                return Err(PhotoShareError::Seed(format!(
                    "tag references unknown photo {}",
                    tag.photo_id
                )));
            }
            if !logins.contains(tag.github_login.as_str()) {
                return Err(PhotoShareError::Seed(format!(
                    "tag references unknown user '{}'",
                    tag.github_login
                )));
            }
        }

        Ok(())
    }
}
