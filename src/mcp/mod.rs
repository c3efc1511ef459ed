//! MCP server — Model Context Protocol implementation over stdio.
//!
//! - [`server`] — rmcp `ServerHandler`, the `assess_risk` tool router, and
//!   the stdio serve loop.
//! - [`tools`] — tool handler logic: context assembly, repository
//!   resolution, and response rendering.

pub mod server;
pub mod tools;
