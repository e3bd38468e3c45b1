//! Media entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the media table.
#[derive(Debug, Clone, FromRow)]
pub struct MediaEntity {
    pub id: i64,
    pub media_type: String,
    pub url: String,
    pub post_id: i64,
}

impl From<MediaEntity> for domain::models::Media {
    fn from(entity: MediaEntity) -> Self {
        Self {
            id: entity.id,
            media_type: entity.media_type,
            url: entity.url,
            post_id: entity.post_id,
        }
    }
}
