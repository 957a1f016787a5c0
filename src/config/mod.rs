use crate::domain::model::ProbeTarget;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sonic-check")]
#[command(about = "Safe, read-only probes for the mock SONiC REST endpoints")]
pub struct CliConfig {
    /// Target SONiC host (IP address or hostname)
    pub host: String,
}

impl CliConfig {
    pub fn target(&self) -> ProbeTarget {
        ProbeTarget::new(self.host.clone())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_url("rest_root", &self.target().root_url())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mock-sonic")]
#[command(about = "Mock SONiC RESTCONF responder")]
pub struct ServeConfig {
    /// Listen address for the mock responder
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,
}
