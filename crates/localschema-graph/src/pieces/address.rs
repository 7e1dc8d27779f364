//! The `PostalAddress` node builder, main and branch variants.

use serde_json::Value;

use crate::fragments;
use crate::piece::{GraphPiece, GraphScope, SchemaNode, Variant};
use crate::topology::Topology;

pub struct AddressPiece {
    pub variant: Variant,
}

impl AddressPiece {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        AddressPiece { variant }
    }

    /// The full node id this variant emits (and other builders reference).
    #[must_use]
    pub fn schema_id(variant: Variant, scope: &GraphScope<'_>) -> String {
        match variant {
            Variant::Main => {
                fragments::fragment_id(&scope.ctx.site_url, fragments::MAIN_PLACE_ADDRESS)
            }
            Variant::Branch => {
                fragments::fragment_id(&scope.ctx.canonical_url, fragments::BRANCH_PLACE_ADDRESS)
            }
        }
    }
}

impl GraphPiece for AddressPiece {
    fn name(&self) -> &'static str {
        match self.variant {
            Variant::Main => "main-address",
            Variant::Branch => "branch-address",
        }
    }

    fn is_needed(&self, scope: &GraphScope<'_>) -> bool {
        let topology = Topology::new(scope);
        match self.variant {
            Variant::Main => {
                scope.ctx.site_represents.is_company()
                    && (!topology.multiple_locations_enabled()
                        || topology.primary_location().is_some())
            }
            Variant::Branch => topology.will_emit_branch_identified_organization(),
        }
    }

    fn generate(&self, scope: &GraphScope<'_>) -> Option<SchemaNode> {
        let topology = Topology::new(scope);
        let location = match self.variant {
            Variant::Main => topology.related_location(),
            Variant::Branch => scope.locations.for_current_page(),
        }?;

        if !location.has_required_address_fields() {
            tracing::debug!(
                piece = self.name(),
                location = location.id,
                "address below required minimum, omitting node"
            );
            return None;
        }

        let mut node = SchemaNode::new();
        node.insert("@type".to_string(), Value::from("PostalAddress"));
        node.insert(
            "@id".to_string(),
            Value::from(Self::schema_id(self.variant, scope)),
        );
        insert_filled(&mut node, "streetAddress", location.street_address());
        insert_filled(&mut node, "addressLocality", location.city.clone());
        insert_filled(&mut node, "postalCode", location.postal_code.clone());
        insert_filled(&mut node, "addressRegion", location.state.clone());
        insert_filled(&mut node, "addressCountry", location.country.clone());
        Some(node)
    }
}

/// Insert `key` only when the value is present and non-blank.
pub(crate) fn insert_filled(node: &mut SchemaNode, key: &str, value: Option<String>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            node.insert(key.to_string(), Value::from(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use localschema_core::{InMemoryLocationRepository, LocationRecord, Options};

    use super::*;
    use crate::context::{PageKind, RenderContext, SiteRepresents};
    use crate::piece::DefaultImageNodeFactory;

    fn complete_location(id: i64) -> LocationRecord {
        let mut loc = LocationRecord::new(
            id,
            "Harbor Coffee",
            &format!("https://example.com/locations/{id}/"),
        );
        loc.street = Some("12 Pier Road".to_string());
        loc.city = Some("Boston".to_string());
        loc.state = Some("MA".to_string());
        loc.postal_code = Some("02110".to_string());
        loc.country = Some("US".to_string());
        loc
    }

    fn company_context(page: PageKind) -> RenderContext {
        RenderContext {
            canonical_url: "https://example.com/locations/1/".to_string(),
            site_url: "https://example.com/".to_string(),
            site_represents: SiteRepresents::Company {
                name: "Harbor Coffee".to_string(),
                logo: None,
            },
            main_entity_id: "https://example.com/locations/1/#webpage".to_string(),
            page,
            page_title: "Harbor Coffee".to_string(),
        }
    }

    #[test]
    fn main_variant_emits_full_address() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![complete_location(1)]);
        let ctx = company_context(PageKind::Other);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = AddressPiece::new(Variant::Main);
        assert!(piece.is_needed(&scope));
        let node = piece.generate(&scope).expect("address node");
        assert_eq!(node["@type"], "PostalAddress");
        assert_eq!(node["@id"], "https://example.com/#local-main-place-address");
        assert_eq!(node["streetAddress"], "12 Pier Road");
        assert_eq!(node["addressLocality"], "Boston");
        assert_eq!(node["postalCode"], "02110");
        assert_eq!(node["addressRegion"], "MA");
        assert_eq!(node["addressCountry"], "US");
    }

    #[test]
    fn missing_required_field_yields_no_node() {
        let mut incomplete = complete_location(1);
        incomplete.postal_code = None;
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![incomplete]);
        let ctx = company_context(PageKind::Other);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = AddressPiece::new(Variant::Main);
        assert!(
            piece.generate(&scope).is_none(),
            "incomplete address must be absent, not partially emitted"
        );
    }

    #[test]
    fn optional_region_is_omitted_when_empty() {
        let mut loc = complete_location(1);
        loc.state = Some(String::new());
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![loc]);
        let ctx = company_context(PageKind::Other);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let node = AddressPiece::new(Variant::Main).generate(&scope).unwrap();
        assert!(!node.contains_key("addressRegion"));
    }

    #[test]
    fn main_variant_not_needed_without_company() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![complete_location(1)]);
        let mut ctx = company_context(PageKind::Other);
        ctx.site_represents = SiteRepresents::Unset;
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        assert!(!AddressPiece::new(Variant::Main).is_needed(&scope));
    }

    #[test]
    fn branch_variant_follows_branch_emission() {
        let mut options = Options {
            multiple_locations: true,
            same_organization: true,
            primary_location: Some(1),
            ..Options::default()
        };
        options.shared_business_info = false;
        let repo =
            InMemoryLocationRepository::new(vec![complete_location(1), complete_location(2)])
                .with_current_page(2);
        let ctx = company_context(PageKind::LocationDetail);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = AddressPiece::new(Variant::Branch);
        assert!(piece.is_needed(&scope));
        let node = piece.generate(&scope).unwrap();
        assert_eq!(
            node["@id"],
            "https://example.com/locations/1/#local-branch-place-address"
        );
    }

    #[test]
    fn branch_variant_not_needed_on_primary_page() {
        let options = Options {
            multiple_locations: true,
            same_organization: true,
            primary_location: Some(1),
            ..Options::default()
        };
        let repo =
            InMemoryLocationRepository::new(vec![complete_location(1), complete_location(2)])
                .with_current_page(1);
        let ctx = company_context(PageKind::LocationDetail);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        assert!(!AddressPiece::new(Variant::Branch).is_needed(&scope));
    }
}
