use serde::{Deserialize, Serialize};

/// 預設的 RESTCONF mock 連接埠
pub const REST_PORT: u16 = 8080;

/// gRPC 風格的輔助連接埠（mock 不提供此服務）
pub const GRPC_PROBE_PORT: u16 = 57400;

/// Outcome of a single HTTP probe step. A transport failure is a value,
/// not an error: the sequence always runs to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpOutcome {
    Success { status: u16, body: String },
    Failed { reason: String },
}

impl HttpOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HttpOutcome::Success { .. })
    }
}

/// Probe target: one host plus the two well-known ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeTarget {
    pub host: String,
    pub rest_port: u16,
    pub grpc_port: u16,
}

impl ProbeTarget {
    pub fn new(host: String) -> Self {
        Self {
            host,
            rest_port: REST_PORT,
            grpc_port: GRPC_PROBE_PORT,
        }
    }

    pub fn with_ports(host: String, rest_port: u16, grpc_port: u16) -> Self {
        Self {
            host,
            rest_port,
            grpc_port,
        }
    }

    pub fn root_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.rest_port)
    }

    pub fn data_url(&self) -> String {
        format!("http://{}:{}/restconf/data", self.host, self.rest_port)
    }

    pub fn config_url(&self) -> String {
        format!("http://{}:{}/restconf/config", self.host, self.rest_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_target_default_ports() {
        let target = ProbeTarget::new("10.0.0.1".to_string());
        assert_eq!(target.rest_port, 8080);
        assert_eq!(target.grpc_port, 57400);
        assert_eq!(target.root_url(), "http://10.0.0.1:8080/");
        assert_eq!(target.data_url(), "http://10.0.0.1:8080/restconf/data");
        assert_eq!(target.config_url(), "http://10.0.0.1:8080/restconf/config");
    }

    #[test]
    fn test_probe_target_with_ports() {
        let target = ProbeTarget::with_ports("localhost".to_string(), 9090, 9091);
        assert_eq!(target.root_url(), "http://localhost:9090/");
        assert_eq!(target.grpc_port, 9091);
    }

    #[test]
    fn test_http_outcome_is_success() {
        let ok = HttpOutcome::Success {
            status: 200,
            body: String::new(),
        };
        let failed = HttpOutcome::Failed {
            reason: "connection refused".to_string(),
        };
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }
}
