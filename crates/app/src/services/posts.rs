//! Post operations, including the post detail aggregate.

use domain::models::{Post, PostDetail, User};
use persistence::repositories::{CommentRepository, MediaRepository, PostRepository, UserRepository};
use shared::pagination::{PageRequest, MAX_PAGE_SIZE};
use sqlx::PgPool;
use tracing::info;

use crate::error::AppError;

#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
    users: UserRepository,
    media: MediaRepository,
    comments: CommentRepository,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            media: MediaRepository::new(pool.clone()),
            comments: CommentRepository::new(pool),
        }
    }

    /// Create a post authored by `user_id`.
    pub async fn create(&self, user_id: i64) -> Result<Post, AppError> {
        let entity = self.posts.create_post(user_id).await?;
        info!(post_id = entity.id, user_id, "Post created");
        Ok(entity.into())
    }

    pub async fn get(&self, id: i64) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    pub async fn author(&self, post_id: i64) -> Result<User, AppError> {
        self.posts
            .find_author(post_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
    }

    /// Post with its author, the first page of media and comments, and their totals.
    pub async fn detail(&self, id: i64) -> Result<PostDetail, AppError> {
        let post = self.get(id).await?;
        let author = self.author(id).await?;
        let first_page = PageRequest::new(MAX_PAGE_SIZE, 0);
        let media = self.media.list_by_post(id, first_page).await?;
        let media_count = self.media.count_by_post(id).await?;
        let comments = self.comments.list_by_post(id, first_page).await?;
        let comments_count = self.comments.count_by_post(id).await?;

        Ok(PostDetail {
            post,
            author,
            media: media.into_iter().map(Into::into).collect(),
            media_count,
            comments: comments.into_iter().map(Into::into).collect(),
            comments_count,
        })
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.list(page).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_author(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Post>, AppError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }
        let posts = self.posts.list_by_author(user_id, page).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn count_by_author(&self, user_id: i64) -> Result<i64, AppError> {
        Ok(self.posts.count_by_author(user_id).await?)
    }

    /// Delete a post together with its media and comments.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.posts.delete_post(id).await? == 0 {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }
        info!(post_id = id, "Post deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.posts.count().await?)
    }
}
