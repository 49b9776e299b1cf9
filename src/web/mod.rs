// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::{ConfigManager, Database, TestResultRecord};
use crate::insights::{InsightsResult, TestTypeInfo};
use crate::results::NewTestResult;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, routes, Build, Request, Response, Rocket, State};
use serde_json::Value;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/analyze-test-results", data = "<body>")]
pub async fn analyze_test_results(body: Json<Value>) -> Json<InsightsResult> {
    handlers::analyze_test_results_handler(body).await
}

#[get("/test-types")]
pub async fn get_test_types() -> Json<DataResponse<Vec<TestTypeInfo>>> {
    handlers::get_test_types_handler().await
}

#[post("/test-results", data = "<request>")]
pub async fn create_test_result(
    request: Json<NewTestResult>,
    db: &State<Database>,
) -> Result<Json<DataResponse<TestResultRecord>>, ApiError> {
    handlers::create_test_result_handler(request, db).await
}

#[get("/test-results/<id>")]
pub async fn get_test_result(
    id: &str,
    db: &State<Database>,
) -> Result<Json<DataResponse<TestResultRecord>>, ApiError> {
    handlers::get_test_result_handler(id, db).await
}

#[delete("/test-results/<id>")]
pub async fn delete_test_result(
    id: &str,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::delete_test_result_handler(id, db).await
}

#[get("/users/<user_id>/test-results")]
pub async fn list_user_test_results(
    user_id: i64,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<TestResultRecord>>>, ApiError> {
    handlers::list_user_test_results_handler(user_id, db).await
}

#[get("/health")]
pub async fn health(db: &State<Database>) -> Json<TextResponse> {
    handlers::health_handler(db).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the endpoint path".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be processed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec![
            "Send a JSON body with the expected fields".to_string(),
            "Check field types (userId must be an integer)".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Attach state, fairings, catchers and the `/api` routes to a rocket instance
pub fn mount_api(rocket: Rocket<Build>, db: Database) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(db)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .mount(
            "/api",
            routes![
                analyze_test_results,
                get_test_types,
                create_test_result,
                get_test_result,
                delete_test_result,
                list_user_test_results,
                health,
                options,
            ],
        )
}

/// Rocket instance with default figment, used by tests and embedders
pub fn build_rocket(db: Database) -> Rocket<Build> {
    mount_api(rocket::build(), db)
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let db = Database::new(&config.environment.database_path).await?;

    let figment: Figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.environment.port));

    info!("Starting orientation insights API server");
    info!("Database: {}", config.environment.database_path.display());
    info!("Listening on 0.0.0.0:{}", config.environment.port);

    let _rocket = mount_api(rocket::custom(figment), db)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
