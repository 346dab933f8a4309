//! Domains module containing business logic organized by bounded contexts.
//!
//! - `fathom`: the outbound Fathom REST API client
//! - `tools`: the MCP tools built on top of it

pub mod fathom;
pub mod tools;
