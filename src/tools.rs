// Tool description and request handling for bin-collection
use chrono::{Local, NaiveDateTime};
use serde_json::{json, Value};
use tracing::info;

use crate::client::{HttpTransport, ScheduleClient};
use crate::error::{BinsError, Result};
use crate::format::format_schedule;

pub const TOOL_NAME: &str = "bin-collection";

pub struct BinCollectionTool<T> {
    client: ScheduleClient<T>,
    default_uprn: Option<String>,
}

impl<T: HttpTransport> BinCollectionTool<T> {
    /// An empty default is treated as no default.
    pub fn new(client: ScheduleClient<T>, default_uprn: Option<String>) -> Self {
        let default_uprn = default_uprn.filter(|u| !u.is_empty());
        BinCollectionTool { client, default_uprn }
    }

    pub fn client(&self) -> &ScheduleClient<T> {
        &self.client
    }

    pub fn default_uprn(&self) -> Option<&str> {
        self.default_uprn.as_deref()
    }

    pub fn description(&self) -> Value {
        let uprn_description = match &self.default_uprn {
            Some(uprn) => format!(
                "Unique Property Reference Number (UPRN) for the address (default: {uprn})"
            ),
            None => "Unique Property Reference Number (UPRN) for the address".to_string(),
        };
        json!({
            "name": TOOL_NAME,
            "description": "Get bin collection dates for a Reading address using UPRN",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "uprn": {
                        "type": "string",
                        "description": uprn_description
                    }
                }
            },
            "annotations": {
                "title": "Bin Collection Dates",
                "readOnlyHint": true,
                "destructiveHint": false,
                "idempotentHint": true,
                "openWorldHint": true
            }
        })
    }

    pub async fn call(&self, arguments: &Value) -> Result<String> {
        self.call_at(arguments, Local::now().naive_local()).await
    }

    pub async fn call_at(&self, arguments: &Value, now: NaiveDateTime) -> Result<String> {
        let uprn_text = self.resolve_uprn(arguments)?;
        let uprn: u64 = uprn_text.parse()?;

        info!("Fetching bin collections for UPRN {}", uprn_text);
        let schedule = self.client.fetch(uprn).await?;
        Ok(format_schedule(&uprn_text, &schedule, now))
    }

    fn resolve_uprn(&self, arguments: &Value) -> Result<String> {
        let explicit = match arguments.get("uprn") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) if n.is_u64() => Some(n.to_string()),
            _ => None,
        };
        explicit
            .or_else(|| self.default_uprn.clone())
            .ok_or(BinsError::MissingUprn)
    }
}
