//! The list of resources the server exposes.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{LeaguesResource, ResourceDefinition, ServerInfoResource};
use super::service::ResourceEntry;

/// Turn a definition into a registry entry without annotations.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Every resource the server serves, in registration order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<LeaguesResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"football://leagues"));
        assert!(uris.contains(&"football://server/info"));
    }
}
