use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// Sobre uniforme para todas las respuestas: {code, status, data?}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResponse<T = serde_json::Value> {
    pub code: u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, Some(data))
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl WebResponse<()> {
    // Para delete / deleteAll: sin campo data
    pub fn ok_empty() -> Self {
        Self::new(StatusCode::OK, None)
    }

    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
