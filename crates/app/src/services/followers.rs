//! Follow/unfollow and follower listings.

use domain::models::{FollowStats, Follower, NewFollower, User};
use persistence::repositories::{FollowerRepository, UserRepository};
use shared::pagination::PageRequest;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::error::AppError;

#[derive(Clone)]
pub struct FollowerService {
    followers: FollowerRepository,
    users: UserRepository,
}

impl FollowerService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            followers: FollowerRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Make `user_from_id` follow `user_to_id`.
    pub async fn follow(&self, user_from_id: i64, user_to_id: i64) -> Result<Follower, AppError> {
        let link = NewFollower::new(user_from_id, user_to_id).map_err(|err| {
            warn!(user_id = user_from_id, "Rejected self-follow");
            AppError::from(err)
        })?;

        let entity = self.followers.create_follower(link).await?;
        info!(user_from_id, user_to_id, "User followed");
        Ok(entity.into())
    }

    pub async fn unfollow(&self, user_from_id: i64, user_to_id: i64) -> Result<(), AppError> {
        if self
            .followers
            .delete_follower(user_from_id, user_to_id)
            .await?
            == 0
        {
            return Err(AppError::NotFound(format!(
                "User {} does not follow user {}",
                user_from_id, user_to_id
            )));
        }
        info!(user_from_id, user_to_id, "User unfollowed");
        Ok(())
    }

    pub async fn link(&self, user_from_id: i64, user_to_id: i64) -> Result<Follower, AppError> {
        self.followers
            .find_link(user_from_id, user_to_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User {} does not follow user {}",
                    user_from_id, user_to_id
                ))
            })
    }

    pub async fn is_following(&self, user_from_id: i64, user_to_id: i64) -> Result<bool, AppError> {
        Ok(self.followers.is_following(user_from_id, user_to_id).await?)
    }

    /// Users following `user_id`.
    pub async fn followers(&self, user_id: i64, page: PageRequest) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;
        let users = self.followers.list_followers(user_id, page).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Users that `user_id` follows.
    pub async fn following(&self, user_id: i64, page: PageRequest) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;
        let users = self.followers.list_following(user_id, page).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Raw links in either direction for a user.
    pub async fn links(&self, user_id: i64) -> Result<Vec<Follower>, AppError> {
        self.require_user(user_id).await?;
        let links = self.followers.list_links_for_user(user_id).await?;
        Ok(links.into_iter().map(Into::into).collect())
    }

    pub async fn stats(&self, user_id: i64) -> Result<FollowStats, AppError> {
        self.require_user(user_id).await?;
        Ok(FollowStats {
            user_id,
            followers_count: self.followers.count_followers(user_id).await?,
            following_count: self.followers.count_following(user_id).await?,
        })
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.followers.count().await?)
    }

    async fn require_user(&self, user_id: i64) -> Result<(), AppError> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("User {} not found", user_id))),
        }
    }
}
