//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes resource table lookups to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod server;
pub mod types;

pub use server::{ResxLookupMcpServer, run_server};
