//! Media repository for database operations.

use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::MediaEntity;
use crate::metrics::QueryTimer;

/// Repository for media attachment database operations.
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a media item to a post.
    pub async fn create_media(
        &self,
        post_id: i64,
        media_type: &str,
        url: &str,
    ) -> Result<MediaEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_media");
        let result = sqlx::query_as::<_, MediaEntity>(
            r#"
            INSERT INTO media (media_type, url, post_id)
            VALUES ($1, $2, $3)
            RETURNING id, media_type, url, post_id
            "#,
        )
        .bind(media_type)
        .bind(url)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find a media item by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<MediaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_media_by_id");
        let result = sqlx::query_as::<_, MediaEntity>(
            r#"
            SELECT id, media_type, url, post_id
            FROM media
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List media attached to a post in insertion order.
    pub async fn list_by_post(
        &self,
        post_id: i64,
        page: PageRequest,
    ) -> Result<Vec<MediaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_media_by_post");
        let result = sqlx::query_as::<_, MediaEntity>(
            r#"
            SELECT id, media_type, url, post_id
            FROM media
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

    /// Count media attached to a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_media_by_post");
        let result =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media WHERE post_id = $1")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await;
        timer.finish(&result);
        result
    }

    /// Update type and/or URL. Returns `None` if the media item does not exist.
    pub async fn update_media(
        &self,
        id: i64,
        media_type: Option<&str>,
        url: Option<&str>,
    ) -> Result<Option<MediaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_media");
        let result = sqlx::query_as::<_, MediaEntity>(
            r#"
            UPDATE media
            SET media_type = COALESCE($2, media_type),
                url = COALESCE($3, url)
            WHERE id = $1
            RETURNING id, media_type, url, post_id
            "#,
        )
        .bind(id)
        .bind(media_type)
        .bind(url)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Delete a media item.
    pub async fn delete_media(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_media");
        let result = sqlx::query(
            r#"
            DELETE FROM media
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected())
    }

    /// Count all media items.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_media");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);
        result
    }
}
