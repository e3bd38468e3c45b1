//! Repository implementations for database operations.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

pub use comment::CommentRepository;
pub use follower::FollowerRepository;
pub use media::MediaRepository;
pub use post::PostRepository;
pub use user::{ProfileChanges, UserRepository};
