use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use mcp_bins::config::{Args, Transport};
use mcp_bins::handlers::router;
use mcp_bins::stdio::serve_stdio;
use mcp_bins::tls::{install_crypto_provider, load_tls_config};
use mcp_bins::{BinCollectionTool, McpServer, ReqwestTransport, ScheduleClient};

#[tokio::main]
async fn main() {
    install_crypto_provider();
    let args = Args::parse();

    // stdout carries protocol traffic in stdio mode
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.level())
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[ERROR] Failed to set tracing subscriber: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let tls = args.tls_paths()?;

    let transport = ReqwestTransport::new().context("Failed to build HTTP client")?;
    let client = ScheduleClient::with_base_url(transport, args.api_base_url.clone());
    let tool = BinCollectionTool::new(client, args.uprn.clone());
    if let Some(uprn) = tool.default_uprn() {
        info!("Default UPRN {}", uprn);
    }
    let server = Arc::new(McpServer::new(tool));

    match args.transport {
        Transport::Stdio => serve_stdio(server.as_ref()).await.context("stdio transport failed")?,
        Transport::Http => {
            let app = router(server);
            let addr = args.bind;
            match tls {
                Some((cert_path, key_path)) => {
                    let config = load_tls_config(&cert_path, &key_path).await?;
                    info!("MCP server listening on https://{addr}");
                    axum_server::bind_rustls(addr, config)
                        .serve(app.into_make_service())
                        .await
                        .context("Failed to start HTTPS server")?;
                }
                None => {
                    let listener = tokio::net::TcpListener::bind(addr)
                        .await
                        .with_context(|| format!("Failed to bind to address {addr}"))?;
                    info!("MCP server listening on http://{addr}");
                    axum::serve(listener, app)
                        .await
                        .context("Failed to start HTTP server")?;
                }
            }
        }
    }
    Ok(())
}
