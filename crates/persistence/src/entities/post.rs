//! Post entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the posts table.
#[derive(Debug, Clone, FromRow)]
pub struct PostEntity {
    pub id: i64,
    pub user_id: i64,
}

impl From<PostEntity> for domain::models::Post {
    fn from(entity: PostEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_entity_conversion() {
        let post: domain::models::Post = PostEntity { id: 4, user_id: 9 }.into();
        assert_eq!(post.id, 4);
        assert_eq!(post.user_id, 9);
    }
}
