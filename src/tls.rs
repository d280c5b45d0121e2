// TLS setup for the HTTPS listener
use std::path::Path;

use anyhow::{Context, Result};
use axum_server::tls_rustls::RustlsConfig;

/// axum-server and reqwest enable different rustls backends, so the process
/// default has to be chosen explicitly before any config is built.
pub fn install_crypto_provider() {
    // Err only means a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();
}

pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig> {
    install_crypto_provider();
    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load TLS certificate/key from {} and {}",
                cert_path.display(),
                key_path.display()
            )
        })
}
