pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;

use crate::{
    db::DbPool, repository::category::CategoryRepository, services::category::CategoryService,
    state::AppState,
};

// Cableado a mano: repositorio -> servicio -> estado -> router
pub fn build_app(pool: DbPool, api_key: &str) -> Router {
    let categories = CategoryService::new(CategoryRepository::new(), pool);
    routes::create_routes(AppState::new(categories, api_key))
}
