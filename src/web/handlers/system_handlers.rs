// src/web/handlers/system_handlers.rs
use crate::core::Database;
use crate::web::types::*;

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn health_handler(db: &State<Database>) -> Json<TextResponse> {
    match db.health_check().await {
        Ok(()) => {
            info!("Health check OK");
            Json(TextResponse::success("OK".to_string()))
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            Json(TextResponse::failure("Database unavailable".to_string()))
        }
    }
}
