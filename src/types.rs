// Shared types for mcp-bins
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scheduled pickup as returned by the council API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionRecord {
    /// `DD/MM/YYYY HH:MM:SS`
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Service")]
    pub service: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleResponse {
    #[serde(rename = "Collections", default)]
    pub collections: Vec<CollectionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCategory {
    Black,
    Red,
    Green,
    Unknown,
}

impl BinCategory {
    pub fn color(self) -> &'static str {
        match self {
            BinCategory::Black => "black",
            BinCategory::Red => "red",
            BinCategory::Green => "green",
            BinCategory::Unknown => "unknown",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            BinCategory::Black => "⚫",
            BinCategory::Red => "🔴",
            BinCategory::Green => "🟢",
            BinCategory::Unknown => "🗑️",
        }
    }
}

impl fmt::Display for BinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}
