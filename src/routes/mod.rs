use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::panic_response,
    handlers::category,
    state::AppState,
    utils::api_key::api_key_middleware,
};

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collection = get(category::list_categories_handler)
        .post(category::create_category_handler)
        .delete(category::delete_categories_handler)
        .fallback(category::method_not_allowed_handler);

    let item = get(category::get_category_handler)
        .put(category::update_category_handler)
        .delete(category::delete_category_handler)
        .fallback(category::method_not_allowed_handler);

    Router::new()
        // Con y sin barra final
        .route("/api/categories", collection.clone())
        .route("/api/categories/", collection)
        .route("/api/categories/:category_id", item.clone())
        .route("/api/categories/:category_id/", item)
        .fallback(category::not_found_handler)
        // La API key se revisa en TODAS las rutas (fallback incluido) antes del handler
        .layer(middleware::from_fn_with_state(state.clone(), api_key_middleware))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
