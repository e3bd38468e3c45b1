//! Comment entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the comments table.
#[derive(Debug, Clone, FromRow)]
pub struct CommentEntity {
    pub id: i64,
    pub comment_text: Option<String>,
    pub post_id: i64,
    pub author_id: i64,
}

impl From<CommentEntity> for domain::models::Comment {
    fn from(entity: CommentEntity) -> Self {
        Self {
            id: entity.id,
            comment_text: entity.comment_text,
            post_id: entity.post_id,
            author_id: entity.author_id,
        }
    }
}
