use actix_web::{get, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::response::ApiResponse;

/// Liveness probe. Served outside the API prefix and never authenticated.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now()
    })))
}
