use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status: "success".to_string(),
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

pub fn failure<T>(status: StatusCode, message: String) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            status: "error".to_string(),
            data: None,
            error: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
