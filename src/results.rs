// src/results.rs
//! Recording test results: validation, insights enrichment, persistence

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::core::{Database, TestResultRecord};
use crate::insights;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestResult {
    pub user_id: i64,
    pub test_type: String,
    #[serde(default)]
    pub results: Value,
    #[serde(default = "empty_answers")]
    pub answers: Value,
    #[serde(default)]
    pub confidence_score: Option<i64>,
}

fn empty_answers() -> Value {
    Value::Array(Vec::new())
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid test result: {0}")]
    Invalid(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct TestResultService<'a> {
    db: &'a Database,
}

impl<'a> TestResultService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate, enrich with the engine's confidence score and store a new record
    pub async fn record(&self, new_result: NewTestResult) -> Result<TestResultRecord, RecordError> {
        Self::validate(&new_result)?;

        let NewTestResult {
            user_id,
            test_type,
            mut results,
            answers,
            confidence_score,
        } = new_result;

        let insights = insights::interpret(&test_type, &results);

        if let Some(fields) = results.as_object_mut() {
            fields
                .entry("confidenceScore")
                .or_insert_with(|| Value::from(insights.confidence_score));
        }

        let record = TestResultRecord {
            id: Uuid::new_v4().to_string(),
            user_id,
            test_type,
            results,
            answers,
            confidence_score: Some(confidence_score.unwrap_or(insights.confidence_score)),
            created_at: Utc::now(),
        };

        self.db.test_results().insert(&record).await?;
        info!(
            "Recorded {} result {} for user {}",
            record.test_type, record.id, record.user_id
        );
        Ok(record)
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<TestResultRecord>> {
        self.db.test_results().find_by_id(id).await
    }

    pub async fn list_for_user(&self, user_id: i64) -> anyhow::Result<Vec<TestResultRecord>> {
        self.db.test_results().list_by_user(user_id).await
    }

    pub async fn list_all(&self) -> anyhow::Result<Vec<TestResultRecord>> {
        self.db.test_results().list_all().await
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let deleted = self.db.test_results().delete(id).await?;
        if deleted {
            info!("Deleted test result {}", id);
        }
        Ok(deleted)
    }

    fn validate(new_result: &NewTestResult) -> Result<(), RecordError> {
        if new_result.user_id <= 0 {
            return Err(RecordError::Invalid(
                "user_id must be a positive integer".to_string(),
            ));
        }
        if new_result.test_type.trim().is_empty() {
            return Err(RecordError::Invalid("test_type is required".to_string()));
        }
        if !new_result.answers.is_array() {
            return Err(RecordError::Invalid(
                "answers must be a JSON array".to_string(),
            ));
        }
        Ok(())
    }
}
