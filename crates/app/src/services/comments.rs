//! Comment operations.

use domain::models::{Comment, NewComment, UpdateComment};
use persistence::repositories::{CommentRepository, PostRepository, UserRepository};
use shared::pagination::PageRequest;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::error::AppError;

#[derive(Clone)]
pub struct CommentService {
    comments: CommentRepository,
    posts: PostRepository,
    users: UserRepository,
}

/// Blank text is stored as no text.
fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            comments: CommentRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Add a comment by `author_id` on `post_id`.
    pub async fn add(
        &self,
        post_id: i64,
        author_id: i64,
        input: NewComment,
    ) -> Result<Comment, AppError> {
        let input = NewComment {
            comment_text: normalize_text(input.comment_text),
        };
        input.validate()?;

        let entity = self
            .comments
            .create_comment(post_id, author_id, input.comment_text.as_deref())
            .await?;
        info!(comment_id = entity.id, post_id, author_id, "Comment added");
        Ok(entity.into())
    }

    pub async fn get(&self, id: i64) -> Result<Comment, AppError> {
        self.comments
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))
    }

    pub async fn list_for_post(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Comment>, AppError> {
        if self.posts.find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Post {} not found", post_id)));
        }
        let comments = self.comments.list_by_post(post_id, page).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_author(
        &self,
        author_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Comment>, AppError> {
        if self.users.find_by_id(author_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", author_id)));
        }
        let comments = self.comments.list_by_author(author_id, page).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    /// Replace the text of a comment.
    pub async fn edit(&self, id: i64, update: UpdateComment) -> Result<Comment, AppError> {
        let update = UpdateComment {
            comment_text: normalize_text(update.comment_text),
        };
        update.validate()?;

        let entity = self
            .comments
            .update_text(id, update.comment_text.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))?;
        info!(comment_id = id, "Comment edited");
        Ok(entity.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.comments.delete_comment(id).await? == 0 {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }
        info!(comment_id = id, "Comment deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.comments.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text(None), None);
        assert_eq!(normalize_text(Some("   ".into())), None);
        assert_eq!(normalize_text(Some(" hi ".into())), Some("hi".into()));
    }
}
