//! Static catalogs shipped with the installer
//!
//! Both tables are fixed at compile time; iteration order is the order
//! shown to the user.

pub mod bundle;
pub mod mcp;

pub use bundle::{Bundle, Category};
pub use mcp::{Guide, Integration};
