//! User entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub username: String,
    pub firstname: String,
    pub lastname: Option<String>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            username: entity.username,
            firstname: entity.firstname,
            lastname: entity.lastname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Record;

    #[test]
    fn test_user_entity_conversion_keeps_hash_out_of_record() {
        let entity = UserEntity {
            id: 1,
            email: "linus@example.com".to_string(),
            password_hash: "$argon2id$v=19$hash".to_string(),
            username: "linus".to_string(),
            firstname: "Linus".to_string(),
            lastname: None,
        };
        let user: domain::models::User = entity.into();
        assert_eq!(user.password_hash, "$argon2id$v=19$hash");
        assert!(user.to_record().get("password_hash").is_none());
    }
}
