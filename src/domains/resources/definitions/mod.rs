//! Resource definitions, one file per URI.
//!
//! A definition only carries metadata and says where its content comes from;
//! [`ResourceService`](super::ResourceService) does the reading.

pub mod leagues;
pub mod server_info;

use super::service::ResourceContent;

pub use leagues::LeaguesResource;
pub use server_info::ServerInfoResource;

/// A readable resource.
pub trait ResourceDefinition {
    /// `football://` URI the resource is listed and read under.
    const URI: &'static str;

    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    const MIME_TYPE: &'static str;

    /// Static text, or the dynamic provider resolved on each read.
    fn content() -> ResourceContent;
}
