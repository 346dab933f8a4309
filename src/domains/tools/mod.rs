//! Tools domain module.
//!
//! Each tool wraps exactly one Fathom API call. Tools validate their
//! arguments, require a credential, call the API and hand the decoded
//! response back as a structured tool result.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The [`FathomTool`] trait and the shared call path
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `validation.rs` - Value checks run before any network call
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and a
//!    [`FathomTool`] implementation
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs`
//! 4. Add an entry to the dispatch table in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;
pub mod validation;

pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
