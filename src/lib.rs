//! MarktTrendite MCP Server
//!
//! A Model Context Protocol server exposing the marktrendite.ai
//! CostofEquity dataset, plus a greeting tool and a few text utilities.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the callable tools and their argument binding
//!   - **resources**: read-only documents (variable reference, server info)
//!
//! # Example
//!
//! ```rust,no_run
//! use marktrendite_mcp_server::{core::McpServer, core::Config, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
