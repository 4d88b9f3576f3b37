//! resx-lookup - translation lookup over `.resx` resource tables
//!
//! Loads every resource file of a folder (or a set of tables bundled with the
//! binary) into memory and answers lookups against them. When several tables
//! contain the same key, the table loaded first wins.
//!
//! ## Module Structure
//!
//! - `bundled`: Resource tables compiled into the binary
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Resource loading and lookup engine
//! - `mcp`: Model Context Protocol server implementation

pub mod bundled;
pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
