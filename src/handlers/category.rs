use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, Uri},
};
use axum_extra::extract::WithRejection;
use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    models::{
        category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
        web::WebResponse,
    },
    state::AppState,
};

// Con WithRejection un cuerpo ilegible o un id no numérico pasan por AppError
// (500 con nuestro sobre) en vez de la respuesta en texto plano de axum
type RawBody = WithRejection<Bytes, AppError>;
type CategoryId = WithRejection<Path<i64>, AppError>;

// El cuerpo se lee como JSON sin exigir Content-Type
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(bytes)?)
}

// POST /api/categories
pub async fn create_category_handler(
    State(state): State<AppState>,
    WithRejection(bytes, _): RawBody,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    let body: CreateCategoryRequest = decode_body(&bytes)?;
    let category = state.categories.create(body).await?;
    Ok(WebResponse::ok(category))
}

// GET /api/categories
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<WebResponse<Vec<CategoryResponse>>, AppError> {
    let categories = state.categories.find_all().await?;
    Ok(WebResponse::ok(categories))
}

// DELETE /api/categories
pub async fn delete_categories_handler(
    State(state): State<AppState>,
) -> Result<WebResponse<()>, AppError> {
    state.categories.delete_all().await?;
    Ok(WebResponse::ok_empty())
}

// PUT /api/categories/:category_id
pub async fn update_category_handler(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): CategoryId,
    WithRejection(bytes, _): RawBody,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    let mut body: UpdateCategoryRequest = decode_body(&bytes)?;
    // El id de la URL manda sobre el del cuerpo
    body.id = category_id;

    let category = state.categories.update_by_id(body).await?;
    Ok(WebResponse::ok(category))
}

// GET /api/categories/:category_id
pub async fn get_category_handler(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): CategoryId,
) -> Result<WebResponse<CategoryResponse>, AppError> {
    let category = state.categories.find_by_id(category_id).await?;
    Ok(WebResponse::ok(category))
}

// DELETE /api/categories/:category_id
pub async fn delete_category_handler(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): CategoryId,
) -> Result<WebResponse<()>, AppError> {
    state.categories.delete_by_id(category_id).await?;
    Ok(WebResponse::ok_empty())
}

// Rutas que no existen (ya pasaron la API key)
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {} {}", method, uri.path()))
}

// Ruta conocida, método no soportado
pub async fn method_not_allowed_handler(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
