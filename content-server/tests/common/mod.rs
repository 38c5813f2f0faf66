//! Shared harness: temporary RocksDB store plus the full router driven with `oneshot`

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use content_server::auth::JwtConfig;
use content_server::db::DbService;
use content_server::db::repository::{NewUser, UserRepository};
use content_server::services::{MediaConfig, NotifyConfig};
use content_server::{Config, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(dir.path().join("database"))
        .await
        .unwrap();
    let db = DbService::with_db(db).await.unwrap().db;

    let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    config.jwt = JwtConfig {
        secret: "integration-test-secret-long-enough-0123".to_string(),
        expiration_minutes: 60,
        issuer: "content-server".to_string(),
        audience: "content-dashboard".to_string(),
    };
    config.bootstrap_admin = None;
    config.media = MediaConfig::default();
    config.notify = NotifyConfig::default();

    let state = ServerState::with_db(config, db);
    TestApp {
        app: build_app(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    /// Create an account directly in the store and issue a token for it
    pub async fn token_for(&self, username: &str, is_admin: bool) -> String {
        let user = UserRepository::new(self.state.db.clone())
            .create(NewUser {
                username: username.to_string(),
                email: String::new(),
                password: "password123".to_string(),
                is_admin,
            })
            .await
            .unwrap();
        let id = user.id.unwrap().to_string();
        self.state.jwt_service.generate_token(&id, username).unwrap()
    }

    pub async fn admin_token(&self) -> String {
        self.token_for("admin", true).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.call(request).await
    }

    pub async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }
}

/// Minimal valid hero slide body
pub fn hero_body(title: &str, order: i64) -> Value {
    serde_json::json!({
        "title": title,
        "content": format!("{} content", title),
        "imageUrl": format!("https://res.example.com/image/upload/{}.png", title),
        "imagePublicId": format!("hero/{}", title),
        "cta": "Learn more",
        "order": order,
    })
}

/// Ids of a list response, in response order
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["_id"].as_str().unwrap().to_string())
        .collect()
}

/// Minimal valid product body
pub fn product_body(page_path: &str, order: i64) -> Value {
    serde_json::json!({
        "title": format!("Product {}", page_path),
        "pagePath": page_path,
        "description": "A product",
        "heroImage": {
            "url": format!("https://res.example.com/image/upload{}.png", page_path),
            "publicId": format!("products{}", page_path),
        },
        "features": ["Fast", "Simple"],
        "order": order,
    })
}

/// Minimal valid service body
pub fn service_body(title: &str, order: i64) -> Value {
    serde_json::json!({
        "title": title,
        "description": format!("{} service", title),
        "image": format!("https://res.example.com/image/upload/{}.png", title),
        "imagePublicId": format!("services/{}", title),
        "order": order,
    })
}
