//! cursor-full-flow library
//!
//! Installs the Full-Flow command files into a Cursor project and merges
//! the MCP integrations they depend on into `.cursor/mcp.json`.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod ui;
