use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{self, Header};
use axum_extra::TypedHeader;

use crate::{error::AppError, state::AppState, utils::security::secrets_match};

static X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

// Header "X-API-KEY: <secreto>"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Header for ApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let key = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(ApiKey(key.to_owned()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

// Se ejecuta ANTES del router: sin la clave correcta no se llega a ningún handler
pub async fn api_key_middleware(
    State(state): State<AppState>,
    // Opcional para que la ausencia del header también sea un 401 con nuestro JSON
    api_key: Option<TypedHeader<ApiKey>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match api_key {
        Some(TypedHeader(key)) if secrets_match(key.as_str(), &state.api_key) => {
            Ok(next.run(request).await)
        }
        Some(_) => {
            tracing::warn!("X-API-KEY inválida para {} {}", request.method(), request.uri());
            Err(AppError::Unauthorized)
        }
        None => {
            tracing::debug!("Falta X-API-KEY en {} {}", request.method(), request.uri());
            Err(AppError::Unauthorized)
        }
    }
}
