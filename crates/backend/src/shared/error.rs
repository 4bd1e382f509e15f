use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Ошибки уровня HTTP-запроса.
///
/// The calculator itself never fails; these only guard the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("horizon of {requested} months exceeds the limit of {limit}")]
    HorizonTooLong { requested: f64, limit: u32 },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::HorizonTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("API error ({}): {}", status.as_u16(), self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
