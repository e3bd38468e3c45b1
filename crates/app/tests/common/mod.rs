//! Common test utilities for integration tests.
//!
//! Integration tests run against a real PostgreSQL database named by
//! `TEST_DATABASE_URL`. When the variable is unset, `setup` returns `None` and
//! the test exits early.

#![allow(dead_code)]

use domain::models::{NewUser, User};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use social_graph_app::services::Services;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub const TEST_PASSWORD: &str = "integration-pass-1";

pub struct TestContext {
    pub pool: PgPool,
    pub services: Services,
}

/// Connect to the test database and apply the schema.
pub async fn setup() -> Option<TestContext> {
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    persistence::db::run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");

    let services = Services::new(pool.clone());
    Some(TestContext { pool, services })
}

/// Suffix that keeps usernames and emails unique across test runs.
pub fn unique_suffix() -> String {
    format!("{:08x}", rand::random::<u32>())
}

/// Registration input with unique email and username.
pub fn new_user_input() -> NewUser {
    let suffix = unique_suffix();
    NewUser {
        email: format!("user.{}@example.com", suffix),
        password: TEST_PASSWORD.to_string(),
        username: format!("user_{}", suffix),
        firstname: FirstName().fake(),
        lastname: Some(LastName().fake()),
    }
}

/// Register a fresh user.
pub async fn create_user(services: &Services) -> User {
    services
        .users
        .register(new_user_input())
        .await
        .expect("Failed to register test user")
}
