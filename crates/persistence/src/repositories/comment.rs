//! Comment repository for database operations.

use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::CommentEntity;
use crate::metrics::QueryTimer;

/// Repository for comment database operations.
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a comment to a post.
    pub async fn create_comment(
        &self,
        post_id: i64,
        author_id: i64,
        comment_text: Option<&str>,
    ) -> Result<CommentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_comment");
        let result = sqlx::query_as::<_, CommentEntity>(
            r#"
            INSERT INTO comments (comment_text, post_id, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, comment_text, post_id, author_id
            "#,
        )
        .bind(comment_text)
        .bind(post_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<CommentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_comment_by_id");
        let result = sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, comment_text, post_id, author_id
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List comments on a post, oldest first.
    pub async fn list_by_post(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Vec<CommentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_comments_by_post");
        let result = sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, comment_text, post_id, author_id
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List comments written by a user, newest first.
    pub async fn list_by_author(
        &self,
        author_id: i64,
        page: PageRequest,
    ) -> Result<Vec<CommentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_comments_by_author");
        let result = sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, comment_text, post_id, author_id
            FROM comments
            WHERE author_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Replace the comment text. Returns `None` if the comment does not exist.
    pub async fn update_text(
        &self,
        id: i64,
        comment_text: Option<&str>,
    ) -> Result<Option<CommentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_comment_text");
        let result = sqlx::query_as::<_, CommentEntity>(
            r#"
            UPDATE comments
            SET comment_text = $2
            WHERE id = $1
            RETURNING id, comment_text, post_id, author_id
            "#,
        )
        .bind(id)
        .bind(comment_text)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_comment");
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected())
    }

    /// Count comments on a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_comments_by_post");
        let result =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE post_id = $1")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await;
        timer.finish(&result);
        result
    }

    /// Count all comments.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_comments");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);
        result
    }
}
