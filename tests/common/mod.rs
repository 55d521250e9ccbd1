#![allow(dead_code)]

use std::env;

use once_cell::sync::Lazy;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::{Mutex, MutexGuard};

use gym_check_in::infrastructure::db::migrations::run_migrations;

pub mod fixtures;
pub mod mocks;

static TEST_DB_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct TestDb {
    pool: PgPool,
    _lock: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Connects to `TEST_DATABASE_URL` (or `DATABASE_URL`), migrates and
    /// truncates. Returns `None` when no database is configured so the
    /// caller can skip; panics in CI where a database is expected.
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = match env::var("TEST_DATABASE_URL").or_else(|_| env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                if env::var("CI").is_ok() {
                    panic!("DATABASE_URL or TEST_DATABASE_URL must be set in CI");
                }
                eprintln!("Skipping test: DATABASE_URL or TEST_DATABASE_URL not set");
                return None;
            }
        };

        let lock = TEST_DB_MUTEX.lock().await;
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;

        run_migrations(&pool).await.ok()?;
        sqlx::query("TRUNCATE TABLE check_ins, gyms RESTART IDENTITY CASCADE")
            .execute(&pool)
            .await
            .ok()?;

        Some(Self { pool, _lock: lock })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
