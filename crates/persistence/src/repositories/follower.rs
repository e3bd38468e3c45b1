//! Follower link repository.
//!
//! Followers of a user are links whose `user_to_id` is that user; the users it
//! follows are links whose `user_from_id` is that user.

use domain::models::NewFollower;
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::{FollowerEntity, UserEntity};
use crate::metrics::QueryTimer;

/// Repository for follower link database operations.
#[derive(Clone)]
pub struct FollowerRepository {
    pool: PgPool,
}

impl FollowerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a follower link. Fails with a unique violation if it already exists.
    pub async fn create_follower(&self, link: NewFollower) -> Result<FollowerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_follower");
        let result = sqlx::query_as::<_, FollowerEntity>(
            r#"
            INSERT INTO followers (user_from_id, user_to_id)
            VALUES ($1, $2)
            RETURNING id, user_from_id, user_to_id
            "#,
        )
        .bind(link.user_from_id())
        .bind(link.user_to_id())
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find the link from one user to another.
    pub async fn find_link(
        &self,
        user_from_id: i64,
        user_to_id: i64,
    ) -> Result<Option<FollowerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_follower_link");
        let result = sqlx::query_as::<_, FollowerEntity>(
            r#"
            SELECT id, user_from_id, user_to_id
            FROM followers
            WHERE user_from_id = $1 AND user_to_id = $2
            "#,
        )
        .bind(user_from_id)
        .bind(user_to_id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Remove the link from one user to another.
    pub async fn delete_follower(
        &self,
        user_from_id: i64,
        user_to_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_follower");
        let result = sqlx::query(
            r#"
            DELETE FROM followers
            WHERE user_from_id = $1 AND user_to_id = $2
            "#,
        )
        .bind(user_from_id)
        .bind(user_to_id)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected())
    }

    /// Check if one user follows another.
    pub async fn is_following(
        &self,
        user_from_id: i64,
        user_to_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("check_is_following");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM followers WHERE user_from_id = $1 AND user_to_id = $2
            )
            "#,
        )
        .bind(user_from_id)
        .bind(user_to_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Users who follow `user_id`, in the order they followed.
    pub async fn list_followers(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_followers");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT u.id, u.email, u.password_hash, u.username, u.firstname, u.lastname
            FROM followers f
            JOIN users u ON u.id = f.user_from_id
            WHERE f.user_to_id = $1
            ORDER BY f.id
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

    /// Users that `user_id` follows, in the order they were followed.
    pub async fn list_following(
        &self,
        user_id: i64,
        page: PageRequest,
    ) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_following");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT u.id, u.email, u.password_hash, u.username, u.firstname, u.lastname
            FROM followers f
            JOIN users u ON u.id = f.user_to_id
            WHERE f.user_from_id = $1
            ORDER BY f.id
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

    /// All raw links touching a user, in either direction.
    pub async fn list_links_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<FollowerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_follower_links_for_user");
        let result = sqlx::query_as::<_, FollowerEntity>(
            r#"
            SELECT id, user_from_id, user_to_id
            FROM followers
            WHERE user_from_id = $1 OR user_to_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Number of users following `user_id`.
    pub async fn count_followers(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_followers");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM followers WHERE user_to_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Number of users `user_id` follows.
    pub async fn count_following(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_following");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM followers WHERE user_from_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Count all follower links.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_follower_links");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM followers")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);
        result
    }
}
