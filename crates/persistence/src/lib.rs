//! Persistence layer for the social graph backend.
//!
//! This crate contains:
//! - Database connection management and schema migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
