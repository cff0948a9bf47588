// MCP (Model Context Protocol) server exposing the PropertyData API as tools

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{ConfigError, ServerConfig};
pub use server::McpServer;
