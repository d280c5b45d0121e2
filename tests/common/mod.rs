#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use mcp_bins::{BinCollectionTool, HttpReply, HttpTransport, ScheduleClient, TransportError};

pub const TWO_COLLECTIONS: &str = r#"{
    "Collections": [
        {
            "Date": "05/02/2020 00:00:00",
            "Day": "Wednesday",
            "Service": "Recycling Collection Service"
        },
        {
            "Date": "12/02/2020 00:00:00",
            "Day": "Wednesday",
            "Service": "Household Waste Collection Service"
        }
    ]
}"#;

/// Replies with a fixed status and body, or fails when `status` is `None`.
/// Records every URL it is asked for.
pub struct ScriptedTransport {
    status: Option<u16>,
    body: &'static str,
    pub requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn reply(status: u16, body: &'static str) -> Self {
        ScriptedTransport {
            status: Some(status),
            body,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        ScriptedTransport {
            status: None,
            body: "",
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.status {
            Some(status) => Ok(HttpReply {
                status,
                body: self.body.as_bytes().to_vec(),
            }),
            None => Err(TransportError::Timeout("deadline exceeded".into())),
        }
    }
}

pub fn tool(
    transport: ScriptedTransport,
    default_uprn: Option<&str>,
) -> BinCollectionTool<ScriptedTransport> {
    BinCollectionTool::new(
        ScheduleClient::new(transport),
        default_uprn.map(String::from),
    )
}
