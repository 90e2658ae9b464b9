//! Resources domain.
//!
//! Read-only documents for MCP clients: the supported league table and a
//! description of this server and its upstream API. Both are served under the
//! `football://` scheme.
//!
//! A new resource gets a file in `definitions/`, an export there, and a line
//! in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
