use crate::domain::model::{HttpOutcome, ProbeTarget};
use crate::domain::ports::Prober;
use crate::utils::error::Result;
use crate::utils::text::truncate_chars;
use serde_json::json;
use std::io::Write;

/// 報告節錄的本文長度上限（字元）
pub const BODY_PRINT_LIMIT: usize = 400;

/// Runs the fixed four-step probe sequence and writes a human-readable
/// report to `out`. Probe failures become report lines, never errors;
/// only writing the report itself can fail.
pub struct CheckRunner<P: Prober> {
    prober: P,
    target: ProbeTarget,
}

impl<P: Prober> CheckRunner<P> {
    pub fn new(prober: P, target: ProbeTarget) -> Self {
        Self { prober, target }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "[+] Probing mock SONiC at {}", self.target.host)?;
        writeln!(out, "----")?;

        // REST root
        let root_url = self.target.root_url();
        writeln!(out, "REST root: {}", root_url)?;
        let outcome = self.prober.http_get(&root_url).await;
        write_result_line(out, &outcome)?;
        if let Some(excerpt) = body_excerpt(&outcome) {
            writeln!(out, "Body (truncated):")?;
            writeln!(out, "{}", excerpt)?;
        }
        writeln!(out, "----")?;

        // RESTCONF telemetry，本文若可解析為 JSON 就美化輸出
        let data_url = self.target.data_url();
        writeln!(out, "RESTCONF telemetry: {}", data_url)?;
        let outcome = self.prober.http_get(&data_url).await;
        write_result_line(out, &outcome)?;
        if let HttpOutcome::Success { body, .. } = &outcome {
            if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
                if !parsed.is_null() {
                    writeln!(out, "JSON (pretty):")?;
                    writeln!(out, "{}", serde_json::to_string_pretty(&parsed)?)?;
                }
            }
        }
        writeln!(out, "----")?;

        // 原始 TCP 探測
        writeln!(out, "gRPC (port probe): {}", self.target.grpc_port)?;
        let open = self
            .prober
            .port_open(&self.target.host, self.target.grpc_port)
            .await;
        writeln!(out, "gRPC port open?: {}", open)?;
        writeln!(out, "----")?;

        // 模擬組態 POST
        writeln!(
            out,
            "Non-destructive POST (config simulation) - will POST a small JSON to /restconf/config and print response"
        )?;
        let config_url = self.target.config_url();
        let outcome = self
            .prober
            .http_post_json(&config_url, &json!({"demo": "test"}))
            .await;
        match outcome {
            HttpOutcome::Success { status, body } => {
                writeln!(out, "POST status: {}", status)?;
                writeln!(
                    out,
                    "POST body (truncated): {}",
                    truncate_chars(&body, BODY_PRINT_LIMIT)
                )?;
            }
            HttpOutcome::Failed { reason } => {
                writeln!(out, "POST error: {}", reason)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Note: This probe is safe and intended for lab use only.")?;
        Ok(())
    }
}

fn write_result_line<W: Write>(out: &mut W, outcome: &HttpOutcome) -> Result<()> {
    match outcome {
        HttpOutcome::Success { status, .. } => writeln!(out, "Result: {}", status)?,
        HttpOutcome::Failed { .. } => writeln!(out, "Result: error")?,
    }
    Ok(())
}

fn body_excerpt(outcome: &HttpOutcome) -> Option<&str> {
    match outcome {
        HttpOutcome::Success { body, .. } if !body.is_empty() => {
            Some(truncate_chars(body, BODY_PRINT_LIMIT))
        }
        HttpOutcome::Failed { reason } if !reason.is_empty() => {
            Some(truncate_chars(reason, BODY_PRINT_LIMIT))
        }
        _ => None,
    }
}
