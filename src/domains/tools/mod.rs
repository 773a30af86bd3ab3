//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `binding.rs` - Schema-driven argument binding and validation
//! - `context.rs` - Immutable context shared by all invocations
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and direct dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct implementing `ToolParams` and a unit struct
//!    implementing `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `create_route`
//! 5. Register in `registry.rs` (names, metadata, dispatch)

pub mod binding;
mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub use binding::ToolParams;
pub use context::ToolContext;
pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
