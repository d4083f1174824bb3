use std::sync::Arc;

use crate::services::category::CategoryService;

// Estado compartido por el router y el middleware de API key
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(categories: CategoryService, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            categories,
            api_key: api_key.into(),
        }
    }
}
