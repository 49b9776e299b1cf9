// src/web/handlers/test_result_handlers.rs
use crate::core::{Database, TestResultRecord};
use crate::results::{NewTestResult, RecordError, TestResultService};
use crate::web::types::*;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

fn storage_error(context: &str, e: anyhow::Error) -> ApiError {
    error!("{}: {:#}", context, e);
    StandardErrorResponse::new(
        context.to_string(),
        "STORAGE_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    )
    .with_status(Status::InternalServerError)
}

fn not_found(id: &str) -> ApiError {
    warn!("Test result not found: {}", id);
    StandardErrorResponse::new(
        format!("Test result not found: {}", id),
        "TEST_RESULT_NOT_FOUND".to_string(),
        vec!["Check the test result identifier".to_string()],
    )
    .with_status(Status::NotFound)
}

pub async fn create_test_result_handler(
    request: Json<NewTestResult>,
    db: &State<Database>,
) -> Result<Json<DataResponse<TestResultRecord>>, ApiError> {
    let new_result = request.into_inner();
    info!(
        "Recording {} result for user {}",
        new_result.test_type, new_result.user_id
    );

    match TestResultService::new(db).record(new_result).await {
        Ok(record) => Ok(Json(DataResponse::success(
            "Test result recorded successfully".to_string(),
            record,
        ))),
        Err(RecordError::Invalid(reason)) => {
            warn!("Rejected test result: {}", reason);
            Err(StandardErrorResponse::new(
                reason,
                "INVALID_TEST_RESULT".to_string(),
                vec![
                    "userId must be a positive integer".to_string(),
                    "testType is required".to_string(),
                    "answers must be a JSON array".to_string(),
                ],
            )
            .with_status(Status::BadRequest))
        }
        Err(RecordError::Storage(e)) => Err(storage_error("Failed to store test result", e)),
    }
}

pub async fn get_test_result_handler(
    id: &str,
    db: &State<Database>,
) -> Result<Json<DataResponse<TestResultRecord>>, ApiError> {
    match TestResultService::new(db).get(id).await {
        Ok(Some(record)) => Ok(Json(DataResponse::success(
            "Test result found".to_string(),
            record,
        ))),
        Ok(None) => Err(not_found(id)),
        Err(e) => Err(storage_error("Failed to load test result", e)),
    }
}

pub async fn list_user_test_results_handler(
    user_id: i64,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<TestResultRecord>>>, ApiError> {
    match TestResultService::new(db).list_for_user(user_id).await {
        Ok(records) => Ok(Json(DataResponse::success(
            format!("{} test results for user {}", records.len(), user_id),
            records,
        ))),
        Err(e) => Err(storage_error("Failed to list test results", e)),
    }
}

pub async fn delete_test_result_handler(
    id: &str,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, ApiError> {
    match TestResultService::new(db).delete(id).await {
        Ok(true) => Ok(Json(ActionResponse::success(
            format!("Test result {} deleted", id),
            "test_result_deleted".to_string(),
        ))),
        Ok(false) => Err(not_found(id)),
        Err(e) => Err(storage_error("Failed to delete test result", e)),
    }
}
