//! MCP server that reports upcoming Reading Borough Council bin collections
//! for a property, identified by its UPRN.

pub mod alert;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod rpc;
pub mod stdio;
pub mod tls;
pub mod tools;
pub mod types;

pub use client::{HttpReply, HttpTransport, ReqwestTransport, ScheduleClient};
pub use error::{BinsError, TransportError};
pub use handlers::McpServer;
pub use tools::BinCollectionTool;
