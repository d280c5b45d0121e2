// Outbound calls to the council collections API
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{BinsError, Result, TransportError};
use crate::types::ScheduleResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.reading.gov.uk";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and fully-read body of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs a GET. Implementations must read the whole body before returning.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpReply, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> std::result::Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("mcp-bins/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> std::result::Result<HttpReply, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpReply { status, body })
    }
}

pub struct ScheduleClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> ScheduleClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ScheduleClient { transport, base_url }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url_for(&self, uprn: u64) -> String {
        format!("{}/rbc/mycollections/{uprn}", self.base_url)
    }

    pub async fn fetch(&self, uprn: u64) -> Result<ScheduleResponse> {
        let url = self.url_for(uprn);
        debug!("GET {}", url);

        let reply = self.transport.get(&url).await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            BinsError::Fetch(e)
        })?;

        if reply.status != 200 {
            warn!("{} returned status {}", url, reply.status);
            return Err(BinsError::UpstreamStatus(reply.status));
        }

        let schedule: ScheduleResponse = serde_json::from_slice(&reply.body).map_err(|e| {
            warn!("Undecodable response from {}: {}", url, e);
            BinsError::Decode(e)
        })?;
        debug!("UPRN {} has {} upcoming collections", uprn, schedule.collections.len());
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16, &'static str);

    #[async_trait]
    impl HttpTransport for Fixed {
        async fn get(&self, _url: &str) -> std::result::Result<HttpReply, TransportError> {
            Ok(HttpReply {
                status: self.0,
                body: self.1.as_bytes().to_vec(),
            })
        }
    }

    #[test]
    fn url_renders_plain_integer() {
        let client = ScheduleClient::new(Fixed(200, "{}"));
        assert_eq!(
            client.url_for(310045409),
            "https://api.reading.gov.uk/rbc/mycollections/310045409"
        );
        let client = ScheduleClient::with_base_url(Fixed(200, "{}"), "http://127.0.0.1:9/");
        assert_eq!(client.url_for(0), "http://127.0.0.1:9/rbc/mycollections/0");
    }

    #[tokio::test]
    async fn non_200_is_upstream_status() {
        let client = ScheduleClient::new(Fixed(503, "unavailable"));
        let err = client.fetch(1).await.unwrap_err();
        assert!(matches!(err, BinsError::UpstreamStatus(503)));
    }

    #[tokio::test]
    async fn bad_json_is_decode_error() {
        let client = ScheduleClient::new(Fixed(200, "<html>"));
        let err = client.fetch(1).await.unwrap_err();
        assert!(matches!(err, BinsError::Decode(_)));
    }
}
