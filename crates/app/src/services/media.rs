//! Media attachment operations.

use domain::models::{Media, NewMedia, UpdateMedia};
use persistence::repositories::{MediaRepository, PostRepository};
use shared::pagination::PageRequest;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::error::AppError;

#[derive(Clone)]
pub struct MediaService {
    media: MediaRepository,
    posts: PostRepository,
}

impl MediaService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            media: MediaRepository::new(pool.clone()),
            posts: PostRepository::new(pool),
        }
    }

    /// Attach media to an existing post.
    pub async fn attach(&self, post_id: i64, input: NewMedia) -> Result<Media, AppError> {
        let input = NewMedia {
            media_type: input.media_type.trim().to_string(),
            url: input.url.trim().to_string(),
        };
        input.validate()?;

        let entity = self
            .media
            .create_media(post_id, &input.media_type, &input.url)
            .await?;
        info!(media_id = entity.id, post_id, media_type = %entity.media_type, "Media attached");
        Ok(entity.into())
    }

    pub async fn get(&self, id: i64) -> Result<Media, AppError> {
        self.media
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", id)))
    }

    pub async fn list_for_post(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Media>, AppError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Post {} not found", post_id)));
        }
        let media = self.media.list_by_post(post_id, page).await?;
        Ok(media.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i64, update: UpdateMedia) -> Result<Media, AppError> {
        let update = UpdateMedia {
            media_type: update.media_type.map(|t| t.trim().to_string()),
            url: update.url.map(|u| u.trim().to_string()),
        };
        update.check()?;
        update.validate()?;

        let entity = self
            .media
            .update_media(id, update.media_type.as_deref(), update.url.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", id)))?;
        info!(media_id = id, "Media updated");
        Ok(entity.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.media.delete_media(id).await? == 0 {
            return Err(AppError::NotFound(format!("Media {} not found", id)));
        }
        info!(media_id = id, "Media deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.media.count().await?)
    }
}
