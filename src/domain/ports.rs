use crate::domain::model::HttpOutcome;
use async_trait::async_trait;

/// Network side of the probe sequence. The runner only sees this trait,
/// so tests can script outcomes without touching the network.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn http_get(&self, url: &str) -> HttpOutcome;
    async fn http_post_json(&self, url: &str, payload: &serde_json::Value) -> HttpOutcome;
    async fn port_open(&self, host: &str, port: u16) -> bool;
}
