//! User repository for database operations.

use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

/// Profile columns to change. `None` leaves the column untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileChanges<'a> {
    pub email: Option<&'a str>,
    pub username: Option<&'a str>,
    pub firstname: Option<&'a str>,
    /// `Some(None)` clears the last name.
    pub lastname: Option<Option<&'a str>>,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, password_hash, username, firstname, lastname
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find a user by (normalized) email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, password_hash, username, firstname, lastname
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Find a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_username");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, password_hash, username, firstname, lastname
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// List users ordered by ID.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, password_hash, username, firstname, lastname
            FROM users
            ORDER BY id
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

    /// Create a new user. The password must already be hashed.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        username: &str,
        firstname: &str,
        lastname: Option<&str>,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (email, password_hash, username, firstname, lastname)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, username, firstname, lastname
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(username)
        .bind(firstname)
        .bind(lastname)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Update profile columns. Returns `None` if the user does not exist.
    pub async fn update_profile(
        &self,
        id: i64,
        changes: ProfileChanges<'_>,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_user_profile");
        let (set_lastname, lastname) = match changes.lastname {
            Some(value) => (true, value),
            None => (false, None),
        };
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                username = COALESCE($3, username),
                firstname = COALESCE($4, firstname),
                lastname = CASE WHEN $5 THEN $6 ELSE lastname END
            WHERE id = $1
            RETURNING id, email, password_hash, username, firstname, lastname
            "#,
        )
        .bind(id)
        .bind(changes.email)
        .bind(changes.username)
        .bind(changes.firstname)
        .bind(set_lastname)
        .bind(lastname)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Replace a user's password hash. Returns false if the user does not exist.
    pub async fn update_password(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("update_user_password");
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected() > 0)
    }

    /// Delete a user. Posts, comments, and follower links cascade.
    pub async fn delete_user(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_user");
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.finish(&result);
        Ok(result?.rows_affected())
    }

    /// Check whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("check_user_email_exists");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Check whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("check_user_username_exists");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);
        result
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_users");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_changes_default_changes_nothing() {
        let changes = ProfileChanges::default();
        assert!(changes.email.is_none());
        assert!(changes.username.is_none());
        assert!(changes.firstname.is_none());
        assert!(changes.lastname.is_none());
    }
}
