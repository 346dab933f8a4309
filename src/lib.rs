//! Fathom MCP Server Library
//!
//! This crate exposes the Fathom meeting API as a set of Model Context
//! Protocol (MCP) tools, so an MCP client can list meetings, fetch summaries
//! and transcripts, and enumerate teams and their members.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the auth gate, the main server
//!   and the transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **fathom**: Typed client for the Fathom REST API
//!   - **tools**: MCP tools, one per Fathom API operation
//!
//! # Example
//!
//! ```rust,no_run
//! use fathom_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
