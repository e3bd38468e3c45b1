//! Follower link entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the followers table.
#[derive(Debug, Clone, FromRow)]
pub struct FollowerEntity {
    pub id: i64,
    pub user_from_id: i64,
    pub user_to_id: i64,
}

impl From<FollowerEntity> for domain::models::Follower {
    fn from(entity: FollowerEntity) -> Self {
        Self {
            id: entity.id,
            user_from_id: entity.user_from_id,
            user_to_id: entity.user_to_id,
        }
    }
}
