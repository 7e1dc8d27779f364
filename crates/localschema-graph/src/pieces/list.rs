//! The `ItemList` node enumerating all locations on the archive page.

use localschema_core::LocationFilter;
use serde_json::Value;

use crate::context::PageKind;
use crate::fragments;
use crate::piece::{GraphPiece, GraphScope, SchemaNode};

pub struct LocationListPiece;

impl LocationListPiece {
    #[must_use]
    pub fn schema_id(scope: &GraphScope<'_>) -> String {
        fragments::fragment_id(&scope.ctx.canonical_url, fragments::LIST)
    }
}

impl GraphPiece for LocationListPiece {
    fn name(&self) -> &'static str {
        "location-list"
    }

    fn is_needed(&self, scope: &GraphScope<'_>) -> bool {
        scope.ctx.page == PageKind::LocationArchive
    }

    fn generate(&self, scope: &GraphScope<'_>) -> Option<SchemaNode> {
        let locations = scope.locations.get(&LocationFilter::published());
        if locations.is_empty() {
            tracing::debug!(piece = self.name(), "no published locations, omitting list");
            return None;
        }

        let elements: Vec<Value> = locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                serde_json::json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "url": location.permalink,
                })
            })
            .collect();

        let mut node = SchemaNode::new();
        node.insert("@type".to_string(), Value::from("ItemList"));
        node.insert(
            "@id".to_string(),
            Value::from(Self::schema_id(scope)),
        );
        node.insert(
            "mainEntityOfPage".to_string(),
            fragments::id_ref(&scope.ctx.main_entity_id),
        );
        node.insert(
            "numberOfItems".to_string(),
            Value::from(elements.len()),
        );
        node.insert("itemListElement".to_string(), Value::from(elements));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use localschema_core::{InMemoryLocationRepository, LocationRecord, Options, PublishStatus};

    use super::*;
    use crate::context::{RenderContext, SiteRepresents};
    use crate::piece::DefaultImageNodeFactory;

    fn archive_context() -> RenderContext {
        RenderContext {
            canonical_url: "https://example.com/locations/".to_string(),
            site_url: "https://example.com/".to_string(),
            site_represents: SiteRepresents::Unset,
            main_entity_id: "https://example.com/locations/#webpage".to_string(),
            page: PageKind::LocationArchive,
            page_title: "Our locations".to_string(),
        }
    }

    #[test]
    fn list_enumerates_published_locations_in_provider_order() {
        let options = Options::default();
        let mut draft = LocationRecord::new(3, "Hidden", "https://example.com/locations/hidden/");
        draft.status = PublishStatus::Draft;
        let repo = InMemoryLocationRepository::new(vec![
            LocationRecord::new(1, "Harbor", "https://example.com/locations/harbor/"),
            LocationRecord::new(2, "Uptown", "https://example.com/locations/uptown/"),
            draft,
        ]);
        let ctx = archive_context();
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = LocationListPiece;
        assert!(piece.is_needed(&scope));
        let node = piece.generate(&scope).unwrap();
        assert_eq!(node["@type"], "ItemList");
        assert_eq!(node["@id"], "https://example.com/locations/#list");
        assert_eq!(node["numberOfItems"], 2);
        assert_eq!(node["itemListElement"][0]["position"], 1);
        assert_eq!(
            node["itemListElement"][0]["url"],
            "https://example.com/locations/harbor/"
        );
        assert_eq!(node["itemListElement"][1]["position"], 2);
        assert_eq!(
            node["mainEntityOfPage"]["@id"],
            "https://example.com/locations/#webpage"
        );
    }

    #[test]
    fn empty_archive_emits_nothing() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::default();
        let ctx = archive_context();
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        assert!(
            LocationListPiece.generate(&scope).is_none(),
            "an empty ItemList must not be emitted"
        );
    }

    #[test]
    fn not_needed_off_the_archive() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::default();
        let mut ctx = archive_context();
        ctx.page = PageKind::Other;
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        assert!(!LocationListPiece.is_needed(&scope));
    }
}
