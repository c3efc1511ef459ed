//! Orcho MCP — prompt risk assessment server.
//!
//! Exposes a single `assess_risk` MCP tool over stdio that scores coding
//! prompts through the Orcho risk API, optionally enriched with editor
//! context for blast-radius analysis.

pub mod config;
pub mod error;
pub mod git;
pub mod install;
pub mod mcp;
pub mod observability;
pub mod risk;
