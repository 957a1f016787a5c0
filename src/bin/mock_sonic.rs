use anyhow::Context;
use clap::Parser;
use sonic_check::utils::logger;
use sonic_check::{mock, ServeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServeConfig::parse();
    logger::init_cli_logger();

    let app = mock::router();
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("🚀 mock SONiC responder listening on {}", config.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
