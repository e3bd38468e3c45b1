//! User account operations.

use domain::models::{ChangePassword, NewUser, UpdateUser, User};
use persistence::repositories::{ProfileChanges, UserRepository};
use shared::pagination::PageRequest;
use shared::password::hash_password;
use shared::validation::normalize_email;
use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

use crate::error::AppError;

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a user. The password is hashed before it is stored.
    pub async fn register(&self, input: NewUser) -> Result<User, AppError> {
        let input = input.normalized();
        if let Err(errors) = input.validate() {
            warn!(username = %input.username, "Rejected user registration");
            return Err(errors.into());
        }

        let password_hash = hash_password(&input.password)?;
        let entity = self
            .users
            .create_user(
                &input.email,
                &password_hash,
                &input.username,
                &input.firstname,
                input.lastname.as_deref(),
            )
            .await?;

        info!(user_id = entity.id, username = %entity.username, "User registered");
        Ok(entity.into())
    }

    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_email(email);
        Ok(self.users.find_by_email(&email).await?.map(Into::into))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .find_by_username(username.trim())
            .await?
            .map(Into::into))
    }

    pub async fn list(&self, page: PageRequest) -> Result<Vec<User>, AppError> {
        let users = self.users.list(page).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Apply a partial profile update.
    pub async fn update_profile(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let update = update.normalized();
        update.check()?;
        update.validate()?;

        let changes = ProfileChanges {
            email: update.email.as_deref(),
            username: update.username.as_deref(),
            firstname: update.firstname.as_deref(),
            lastname: update.lastname.as_ref().map(|l| l.as_deref()),
        };

        let entity = self
            .users
            .update_profile(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        info!(user_id = id, "User profile updated");
        Ok(entity.into())
    }

    pub async fn change_password(&self, id: i64, input: ChangePassword) -> Result<(), AppError> {
        input.validate()?;
        let password_hash = hash_password(&input.new_password)?;

        if !self.users.update_password(id, &password_hash).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        info!(user_id = id, "User password changed");
        Ok(())
    }

    /// Delete a user together with their posts, comments, and follower links.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.users.delete_user(id).await? == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }

    pub async fn email_taken(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.users.email_exists(&normalize_email(email)).await?)
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.users.username_exists(username.trim()).await?)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.count().await?)
    }
}
