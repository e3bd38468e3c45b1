//! Domain models for the social graph.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment, UpdateComment};
pub use follower::{FollowStats, Follower, NewFollower};
pub use media::{Media, NewMedia, UpdateMedia};
pub use post::{Post, PostDetail};
pub use user::{ChangePassword, NewUser, UpdateUser, User};
