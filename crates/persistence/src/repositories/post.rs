//! Post repository for database operations.

use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::{PostEntity, UserEntity};
use crate::metrics::QueryTimer;

/// Repository for post database operations.
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post for the given author.
    pub async fn create_post(&self, user_id: i64) -> Result<PostEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_post");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            INSERT INTO posts (user_id)
            VALUES ($1)
            RETURNING id, user_id
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_post_by_id");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, user_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Fetch the author of a post.
    pub async fn find_author(&self, post_id: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_post_author");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT u.id, u.email, u.password_hash, u.username, u.firstname, u.lastname
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List all posts, newest ID first.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_posts");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, user_id
            FROM posts
            ORDER BY id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List posts written by a user, newest ID first.
    pub async fn list_by_author(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_posts_by_author");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Delete a post. Its media and comments cascade.
    pub async fn delete_post(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_post");
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected())
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_posts");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);
        result
    }

    /// Count posts written by a user.
    pub async fn count_by_author(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_posts_by_author");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }
}
