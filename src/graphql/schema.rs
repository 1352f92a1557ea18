use std::sync::Arc;

use async_graphql::{ComplexObject, Context, EmptySubscription, Object, Schema};

use crate::error::PhotoShareError;
use crate::model::{NewPhoto, image_url};
use crate::storage::PhotoStore;

use super::types::*;

pub type PhotoShareSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<PhotoStore>) -> PhotoShareSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a PhotoStore> {
    Ok(ctx.data::<Arc<PhotoStore>>()?.as_ref())
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Number of photos posted so far
    async fn total_photos(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        Ok(get_store(ctx)?.total_photos().await)
    }

    /// Every photo, oldest first
    async fn all_photos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Photo>> {
        let photos = get_store(ctx)?.all_photos().await;
        Ok(photos.into_iter().map(|p| p.into()).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Post a new photo
    async fn post_photo(
        &self,
        ctx: &Context<'_>,
        input: PostPhotoInput,
    ) -> async_graphql::Result<Photo> {
        let store = get_store(ctx)?;
        let photo = store.post_photo(NewPhoto::from(input)).await;
        Ok(photo.into())
    }
}

#[ComplexObject]
impl Photo {
    async fn url(&self) -> String {
        image_url(self.photo_id)
    }

    /// The user who submitted the photo
    async fn posted_by(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let login = self
            .github_user
            .as_deref()
            .ok_or(PhotoShareError::MissingSubmitter(self.photo_id))?;
        let user = get_store(ctx)?
            .find_user(login)
            .await
            .ok_or_else(|| PhotoShareError::UserNotFound(login.to_string()))?;
        Ok(user.into())
    }

    /// Users tagged in the photo
    async fn tagged_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = get_store(ctx)?.tagged_users(self.photo_id).await;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}

#[ComplexObject]
impl User {
    /// Photos submitted by this user
    async fn posted_photos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Photo>> {
        let photos = get_store(ctx)?.photos_posted_by(&self.github_login).await;
        Ok(photos.into_iter().map(|p| p.into()).collect())
    }

    /// Photos this user is tagged in
    async fn in_photo(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Photo>> {
        let photos = get_store(ctx)?.photos_tagging(&self.github_login).await;
        Ok(photos.into_iter().map(|p| p.into()).collect())
    }
}
