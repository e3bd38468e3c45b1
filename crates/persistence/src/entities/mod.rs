//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

pub use comment::CommentEntity;
pub use follower::FollowerEntity;
pub use media::MediaEntity;
pub use post::PostEntity;
pub use user::UserEntity;
