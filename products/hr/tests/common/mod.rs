#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use platform_db::DbPool;
use products_hr::{Employee, EmployeeStore, NewEmployee};
use sea_orm::Database;
use serde_json::Value;
use tower::ServiceExt;

/// Fresh in-memory database with the real migrations applied.
pub async fn migrated_pool() -> DbPool {
    let pool = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&pool, None).await.unwrap();
    pool
}

pub struct TestApp {
    pub pool: DbPool,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = migrated_pool().await;
        let router = products_hr::router().with_state(pool.clone());
        Self { pool, router }
    }

    pub fn store(&self) -> EmployeeStore {
        EmployeeStore::new(self.pool.clone())
    }

    pub async fn seed(&self, full_name: &str) -> Employee {
        self.store()
            .add(NewEmployee {
                full_name: full_name.into(),
                role: None,
                email: None,
            })
            .await
            .unwrap()
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None).await
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
