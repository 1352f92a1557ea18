use super::types::PhotoCategory;
use serde::{Deserialize, Serialize};

const IMAGE_URL_BASE: &str = "https://link.com/img";

/// Public URL of the image stored for a photo id.
pub fn image_url(id: u64) -> String {
    format!("{}/{}.jpg", IMAGE_URL_BASE, id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub category: PhotoCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Login of the submitting user, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_user: Option<String>,
}

impl Photo {
    pub fn is_posted_by(&self, login: &str) -> bool {
        self.github_user.as_deref() == Some(login)
    }
}

/// A photo that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewPhoto {
    pub name: String,

    #[serde(default)]
    pub category: PhotoCategory,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub github_user: Option<String>,
}

impl NewPhoto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: PhotoCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_github_user(mut self, github_user: Option<String>) -> Self {
        self.github_user = github_user;
        self
    }

    pub fn into_photo(self, id: u64) -> Photo {
        Photo {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            github_user: self.github_user,
        }
    }
}
