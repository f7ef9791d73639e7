//! MySQL-backed store.
//!
//! Uses a pooled `sqlx` connection with positional `?` binds. Schema
//! assumed (see `schema.sql`): table `schools` with an auto-increment
//! primary key `id` and columns `name`, `address`, `latitude`,
//! `longitude`. Schema management is out of scope for the service.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;

use super::errors::StoreResult;
use super::school_store::SchoolStore;
use crate::schools::{NewSchool, School};

/// Production store over a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlSchoolStore {
    pool: MySqlPool,
}

impl MySqlSchoolStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connects a pool and wraps it.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = MySqlPool::connect(url).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl SchoolStore for MySqlSchoolStore {
    async fn insert(&self, school: &NewSchool) -> StoreResult<u64> {
        let result = sqlx::query(
            "INSERT INTO schools (name, address, latitude, longitude) VALUES (?, ?, ?, ?)",
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(school.latitude)
        .bind(school.longitude)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn fetch_all(&self) -> StoreResult<Vec<School>> {
        let rows = sqlx::query_as::<_, School>(
            "SELECT id, name, address, latitude, longitude FROM schools ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
