// src/web/handlers/analysis_handlers.rs
use crate::insights::{self, catalogue, InsightsResult, TestTypeInfo};
use crate::web::types::*;

use rocket::serde::json::Json;
use serde_json::Value;
use tracing::info;

/// Always answers with a complete insights object; bad payloads degrade to the generic one.
pub async fn analyze_test_results_handler(body: Json<Value>) -> Json<InsightsResult> {
    let request = AnalyzeTestResultsRequest::from_body(body.into_inner());
    info!("Analyzing results for test type '{}'", request.test_type);

    Json(insights::interpret(&request.test_type, &request.results))
}

pub async fn get_test_types_handler() -> Json<DataResponse<Vec<TestTypeInfo>>> {
    let test_types = catalogue();
    Json(DataResponse::success(
        format!("{} test types available", test_types.len()),
        test_types,
    ))
}
