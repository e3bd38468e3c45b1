//! Shared utilities for the social graph backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - Field validators reused by the domain input types
//! - Limit/offset paging for list queries

pub mod pagination;
pub mod password;
pub mod validation;
