use crate::model::{self, NewPhoto, Photo as ModelPhoto, User as ModelUser};
use async_graphql::{Enum, ID, InputObject, SimpleObject};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PhotoCategory {
    Selfie,
    Portrait,
    Action,
    Landscape,
    Graphic,
}

impl From<model::PhotoCategory> for PhotoCategory {
    fn from(c: model::PhotoCategory) -> Self {
        match c {
            model::PhotoCategory::Selfie => PhotoCategory::Selfie,
            model::PhotoCategory::Portrait => PhotoCategory::Portrait,
            model::PhotoCategory::Action => PhotoCategory::Action,
            model::PhotoCategory::Landscape => PhotoCategory::Landscape,
            model::PhotoCategory::Graphic => PhotoCategory::Graphic,
        }
    }
}

impl From<PhotoCategory> for model::PhotoCategory {
    fn from(c: PhotoCategory) -> Self {
        match c {
            PhotoCategory::Selfie => model::PhotoCategory::Selfie,
            PhotoCategory::Portrait => model::PhotoCategory::Portrait,
            PhotoCategory::Action => model::PhotoCategory::Action,
            PhotoCategory::Landscape => model::PhotoCategory::Landscape,
            PhotoCategory::Graphic => model::PhotoCategory::Graphic,
        }
    }
}

/// A posted photo. `url`, `postedBy` and `taggedUsers` are resolved in
/// `schema.rs`.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Photo {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub category: PhotoCategory,

    #[graphql(skip)]
    pub(crate) photo_id: u64,

    #[graphql(skip)]
    pub(crate) github_user: Option<String>,
}

impl From<ModelPhoto> for Photo {
    fn from(p: ModelPhoto) -> Self {
        Self {
            id: ID::from(p.id.to_string()),
            name: p.name,
            description: p.description,
            category: p.category.into(),
            photo_id: p.id,
            github_user: p.github_user,
        }
    }
}

/// A user. `postedPhotos` and `inPhoto` are resolved in `schema.rs`.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub github_login: ID,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            github_login: ID::from(u.github_login),
            name: u.name,
            avatar: u.avatar,
        }
    }
}

#[derive(InputObject)]
pub struct PostPhotoInput {
    pub name: String,
    #[graphql(default_with = "Some(PhotoCategory::Portrait)")]
    pub category: Option<PhotoCategory>,
    pub description: Option<String>,
}

impl From<PostPhotoInput> for NewPhoto {
    fn from(input: PostPhotoInput) -> Self {
        // An explicit `category: null` falls back to the default too.
        let category = input.category.map(Into::into).unwrap_or_default();
        NewPhoto::new(input.name)
            .with_category(category)
            .with_description(input.description)
    }
}
