//! Follower relationship between users.
//!
//! A link is directional: `user_from_id` follows `user_to_id`. The reverse
//! direction is a separate link.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::DomainError;
use crate::record::Record;

/// A stored follower link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Follower {
    pub id: i64,
    pub user_from_id: i64,
    pub user_to_id: i64,
}

impl Record for Follower {
    fn to_record(&self) -> Value {
        json!({
            "id": self.id,
            "user_from_id": self.user_from_id,
            "user_to_id": self.user_to_id,
        })
    }
}

/// A follower link that has passed domain checks and may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFollower {
    user_from_id: i64,
    user_to_id: i64,
}

impl NewFollower {
    pub fn new(user_from_id: i64, user_to_id: i64) -> Result<Self, DomainError> {
        if user_from_id == user_to_id {
            return Err(DomainError::SelfFollow);
        }
        Ok(Self {
            user_from_id,
            user_to_id,
        })
    }

    pub fn user_from_id(&self) -> i64 {
        self.user_from_id
    }

    pub fn user_to_id(&self) -> i64 {
        self.user_to_id
    }
}

/// Follower counts for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FollowStats {
    pub user_id: i64,
    pub followers_count: i64,
    pub following_count: i64,
}

impl Record for FollowStats {
    fn to_record(&self) -> Value {
        json!({
            "user_id": self.user_id,
            "followers_count": self.followers_count,
            "following_count": self.following_count,
        })
    }
}
