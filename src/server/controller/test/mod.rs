use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{startup::build_app, util::password::verify_password};


/// Builds a context holding every gym table.
async fn setup() -> TestContext {
    TestBuilder::new().with_gym_tables().build().await.unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    build_app(db.clone())
}

/// Sends one request through the app and returns the status and JSON body.
///
/// Empty bodies are returned as `Value::Null`.
async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn dwight() -> Value {
    json!({
        "firstName": "Dwight",
        "lastName": "Schrute",
        "dni": "32532102",
        "email": "dwightk@nifty.com",
        "password": "3p8s8R3KdW"
    })
}
