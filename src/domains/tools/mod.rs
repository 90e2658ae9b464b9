//! Tools domain.
//!
//! Every tool maps one invocation onto one call against the football API and
//! renders the outcome as text; failures become error results, never protocol
//! errors.
//!
//! - `definitions/` - one [`ToolDefinition`] per file
//! - `router.rs` - the rmcp `ToolRouter` used by the STDIO and TCP transports
//! - `registry.rs` - tool metadata and the dispatch table of the HTTP transport
//!
//! A new tool is a file in `definitions/`, a `with_route` line in `router.rs`
//! and a match arm in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
