//! Domain layer for the social graph backend.
//!
//! This crate contains:
//! - Domain models (User, Post, Media, Comment, Follower)
//! - Create/update inputs with field validation
//! - Record serialization to plain key/value objects
//! - Domain error types

pub mod error;
pub mod models;
pub mod record;

pub use error::DomainError;
pub use record::Record;
