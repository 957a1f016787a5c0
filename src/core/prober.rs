use crate::domain::model::HttpOutcome;
use crate::domain::ports::Prober;
use crate::utils::error::Result;
use crate::utils::text::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpStream;

/// 每個 HTTP 探測的逾時
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(4);

/// 原始 TCP 連線探測的逾時
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// 成功回應保留的本文長度上限（字元）
pub const BODY_KEEP_LIMIT: usize = 800;

pub struct RestProber {
    client: Client,
}

impl RestProber {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { client })
    }

    async fn outcome_from(response: reqwest::Response) -> HttpOutcome {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(text) => HttpOutcome::Success {
                status,
                body: truncate_chars(&text, BODY_KEEP_LIMIT).to_string(),
            },
            Err(e) => HttpOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

#[async_trait]
impl Prober for RestProber {
    async fn http_get(&self, url: &str) -> HttpOutcome {
        tracing::debug!("Making GET request to: {}", url);
        match self.client.get(url).send().await {
            Ok(response) => Self::outcome_from(response).await,
            Err(e) => HttpOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    async fn http_post_json(&self, url: &str, payload: &serde_json::Value) -> HttpOutcome {
        tracing::debug!("Making POST request to: {}", url);
        match self.client.post(url).json(payload).send().await {
            Ok(response) => Self::outcome_from(response).await,
            Err(e) => HttpOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    async fn port_open(&self, host: &str, port: u16) -> bool {
        match tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => {
                // 連上即關閉，不交換任何資料
                drop(stream);
                true
            }
            _ => false,
        }
    }
}
