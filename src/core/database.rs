// src/core/database.rs
//! SQLite storage for test-result records

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::core::FsOps;

// ===== Connection Management =====

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub async fn new(database_path: &Path) -> Result<Self> {
        FsOps::ensure_parent_exists(database_path).await?;

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!(
            "Database connection established: {}",
            database_path.display()
        );

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Single-connection in-memory database, used by tests
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn test_results(&self) -> TestResultRepository<'_> {
        TestResultRepository::new(&self.pool)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS test_results (
                id TEXT PRIMARY KEY,
                user_id INTEGER NOT NULL,
                test_type TEXT NOT NULL,
                results TEXT NOT NULL,
                answers TEXT NOT NULL DEFAULT '[]',
                confidence_score INTEGER,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create test_results table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_test_results_user_id ON test_results(user_id);",
        )
        .execute(&self.pool)
        .await?;

        info!("Database schema ready");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}

// ===== Test Result Models =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResultRecord {
    pub id: String,
    pub user_id: i64,
    pub test_type: String,
    pub results: Value,
    pub answers: Value,
    pub confidence_score: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct TestResultRow {
    id: String,
    user_id: i64,
    test_type: String,
    results: String,
    answers: String,
    confidence_score: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TestResultRow> for TestResultRecord {
    type Error = anyhow::Error;

    fn try_from(row: TestResultRow) -> Result<Self> {
        let results = serde_json::from_str(&row.results)
            .with_context(|| format!("Corrupted results column for test result {}", row.id))?;
        let answers = serde_json::from_str(&row.answers)
            .with_context(|| format!("Corrupted answers column for test result {}", row.id))?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            test_type: row.test_type,
            results,
            answers,
            confidence_score: row.confidence_score,
            created_at: row.created_at,
        })
    }
}

// ===== Test Result Repository =====

pub struct TestResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TestResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &TestResultRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO test_results
                (id, user_id, test_type, results, answers, confidence_score, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(record.user_id)
        .bind(&record.test_type)
        .bind(record.results.to_string())
        .bind(record.answers.to_string())
        .bind(record.confidence_score)
        .bind(record.created_at)
        .execute(self.pool)
        .await
        .with_context(|| format!("Failed to insert test result {}", record.id))?;

        info!(
            "Stored test result {} ({}) for user {}",
            record.id, record.test_type, record.user_id
        );
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<TestResultRecord>> {
        let row = sqlx::query_as::<_, TestResultRow>(
            r#"
            SELECT id, user_id, test_type, results, answers, confidence_score, created_at
            FROM test_results
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(TestResultRecord::try_from).transpose()
    }

    /// Records of one user, newest first
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<TestResultRecord>> {
        let rows = sqlx::query_as::<_, TestResultRow>(
            r#"
            SELECT id, user_id, test_type, results, answers, confidence_score, created_at
            FROM test_results
            WHERE user_id = ?
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TestResultRecord::try_from).collect()
    }

    /// Every record, newest first
    pub async fn list_all(&self) -> Result<Vec<TestResultRecord>> {
        let rows = sqlx::query_as::<_, TestResultRow>(
            r#"
            SELECT id, user_id, test_type, results, answers, confidence_score, created_at
            FROM test_results
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TestResultRecord::try_from).collect()
    }

    /// Returns true when a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM test_results WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
