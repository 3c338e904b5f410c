use axum::Json;
use serde::Serialize;

use crate::config::GREETING_MESSAGE;

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Root handler returning the greeting payload.
pub async fn index() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING_MESSAGE.to_string(),
    })
}
