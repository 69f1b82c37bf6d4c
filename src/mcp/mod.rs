//! Model Context Protocol (MCP) server.
//!
//! Exposes the translation store, the extraction run and the status view as
//! tools over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool router and stdio entry point
//! - `types`: tool parameters and results

mod server;
pub mod types;

pub use server::{TolkMcpServer, run_server};
