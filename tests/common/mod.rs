#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use category_api::{
    build_app,
    config::DatabaseConfig,
    db::{self, DbPool},
    repository::category::CategoryRepository,
    services::category::CategoryService,
};

pub const API_KEY: &str = "RAHASIA";

const CREATE_TABLE: &str =
    "CREATE TABLE categories (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)";

// Base SQLite en un directorio temporal; se borra al soltar TestDb
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("categories.db").display());

        let mut config = DatabaseConfig::new(url);
        // SQLite: una sola conexión evita bloqueos entre transacciones
        config.max_connections = 1;
        config.min_connections = 1;
        config.idle_timeout = Duration::from_secs(600);

        let pool = db::init_db(&config).await.expect("connect sqlite");
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .expect("create categories table");

        Self { pool, _dir: dir }
    }

    pub fn service(&self) -> CategoryService {
        CategoryService::new(CategoryRepository::new(), self.pool.clone())
    }

    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .expect("count categories")
    }
}

pub struct TestApp {
    pub db: TestDb,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let router = build_app(db.pool.clone(), API_KEY);
        Self { db, router }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        self.send_with_key(method, uri, Some(API_KEY), body).await
    }

    pub async fn send_with_key(
        &self,
        method: Method,
        uri: &str,
        api_key: Option<&str>,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(key) = api_key {
            builder = builder.header("x-api-key", key);
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .expect("request");
        self.dispatch(request).await
    }

    // Cliente que no manda Content-Type (curl -d, fetch sin headers)
    pub async fn send_without_content_type(
        &self,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-api-key", API_KEY)
            .body(Body::from(body.to_string()))
            .expect("request");
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    // Crea una categoría y devuelve su id
    pub async fn create(&self, name: &str) -> i64 {
        let body = serde_json::json!({ "name": name }).to_string();
        let (status, json) = self.send(Method::POST, "/api/categories", Some(&body)).await;
        assert_eq!(status, StatusCode::OK, "create failed: {json}");
        json["data"]["id"].as_i64().expect("id")
    }
}
