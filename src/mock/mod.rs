//! Mock SONiC RESTCONF responder. Two fixed routes, no device state.

use axum::body::Bytes;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new()
        .route("/restconf/data", get(get_data))
        .route("/restconf/config", post(post_config))
}

/// `GET /restconf/data` — fixed telemetry snapshot, always 200.
async fn get_data() -> Json<Value> {
    tracing::debug!("telemetry snapshot requested");
    Json(json!({
        "hostname": "mock-sonic",
        "interfaces": [{"name": "Ethernet0", "admin": "up"}],
        "topology": [{"neighbor": "leaf1", "port": "Ethernet0"}]
    }))
}

/// `POST /restconf/config` — 不驗證內容，原樣回送；缺少或非 JSON 的本文回送 null
async fn post_config(body: Bytes) -> Json<Value> {
    let received = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    tracing::debug!("config simulation received: {}", received);
    Json(json!({
        "status": "ok",
        "received": received,
    }))
}
