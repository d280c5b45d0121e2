// Command-line configuration
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::client::DEFAULT_BASE_URL;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over HTTP POST to /mcp
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "mcp-bins", author, version, about = "MCP server for Reading bin collection dates", long_about = None)]
pub struct Args {
    /// Default UPRN for bin collection queries
    #[arg(long, env = "BINS_UPRN")]
    pub uprn: Option<String>,

    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Address to listen on with --transport http
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Path to the TLS certificate file
    #[arg(long)]
    pub tls_cert: Option<PathBuf>,

    /// Path to the TLS key file
    #[arg(long)]
    pub tls_key: Option<PathBuf>,

    /// Base URL of the council collections API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// TLS needs both files or neither.
    pub fn tls_paths(&self) -> anyhow::Result<Option<(PathBuf, PathBuf)>> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Ok(Some((cert.clone(), key.clone()))),
            (None, None) => Ok(None),
            _ => anyhow::bail!(
                "Both --tls-cert and --tls-key must be provided together to enable TLS."
            ),
        }
    }
}
