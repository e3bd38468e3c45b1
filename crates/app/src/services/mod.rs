//! Service layer over the repositories.
//!
//! Services validate and normalize inputs, hash passwords, call the
//! repositories, and map storage errors to [`AppError`](crate::error::AppError).

pub mod comments;
pub mod followers;
pub mod media;
pub mod posts;
pub mod users;

pub use comments::CommentService;
pub use followers::FollowerService;
pub use media::MediaService;
pub use posts::PostService;
pub use users::UserService;

use domain::Record;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::error::AppError;

/// All services sharing one connection pool.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub posts: PostService,
    pub media: MediaService,
    pub comments: CommentService,
    pub followers: FollowerService,
}

impl Services {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserService::new(pool.clone()),
            posts: PostService::new(pool.clone()),
            media: MediaService::new(pool.clone()),
            comments: CommentService::new(pool.clone()),
            followers: FollowerService::new(pool),
        }
    }

    /// Row counts for every table in the schema.
    pub async fn table_counts(&self) -> Result<TableCounts, AppError> {
        Ok(TableCounts {
            users: self.users.count().await?,
            posts: self.posts.count().await?,
            media: self.media.count().await?,
            comments: self.comments.count().await?,
            followers: self.followers.count().await?,
        })
    }
}

/// Number of rows stored per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub users: i64,
    pub posts: i64,
    pub media: i64,
    pub comments: i64,
    pub followers: i64,
}

impl TableCounts {
    /// `(table name, rows)` pairs in schema order.
    pub fn as_pairs(&self) -> [(&'static str, i64); 5] {
        [
            ("users", self.users),
            ("posts", self.posts),
            ("media", self.media),
            ("comments", self.comments),
            ("followers", self.followers),
        ]
    }
}

impl Record for TableCounts {
    fn to_record(&self) -> Value {
        json!({
            "users": self.users,
            "posts": self.posts,
            "media": self.media,
            "comments": self.comments,
            "followers": self.followers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_counts_pairs_follow_schema_order() {
        let counts = TableCounts {
            users: 3,
            posts: 2,
            media: 1,
            comments: 4,
            followers: 5,
        };
        let names: Vec<_> = counts.as_pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["users", "posts", "media", "comments", "followers"]);
        assert_eq!(serde_json::to_value(counts).unwrap(), counts.to_record());
    }
}
