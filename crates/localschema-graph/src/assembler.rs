//! Piece registration and the per-render driving loop.
//!
//! The assembler registers the builders in a fixed order, seeds the host
//! framework's own Organization node when one exists, calls each piece's
//! `is_needed`/`generate` pair, and applies registered node transforms. It
//! holds no topology decisions of its own.

use localschema_core::{LocationRepository, Options};
use serde_json::Value;

use crate::context::RenderContext;
use crate::piece::{
    DefaultImageNodeFactory, GraphPiece, GraphScope, NodeTransform, SchemaNode, Variant,
};
use crate::pieces::{
    AddressPiece, LocationListPiece, LogoPiece, OrganizationFilter, OrganizationPiece,
};
use crate::topology::Topology;

pub struct GraphAssembler {
    organization_filter: OrganizationFilter,
}

impl GraphAssembler {
    #[must_use]
    pub fn new() -> Self {
        GraphAssembler {
            organization_filter: OrganizationFilter::new(),
        }
    }

    /// Install the site-URL override hook on the organization filter.
    #[must_use]
    pub fn with_url_filter(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.organization_filter = OrganizationFilter::new().with_url_override(f);
        self
    }

    /// Run one render: every piece in registration order, the organization
    /// transform applied to the host node and to any branch organization.
    #[must_use]
    pub fn assemble(&self, scope: &GraphScope<'_>) -> Vec<SchemaNode> {
        let topology = Topology::new(scope);
        let mut graph = Vec::new();

        if topology.should_filter_organization() {
            let seed = host_organization_node(scope);
            graph.push(self.organization_filter.transform(seed, scope));
        }

        let pieces: [Box<dyn GraphPiece>; 7] = [
            Box::new(AddressPiece::new(Variant::Main)),
            Box::new(AddressPiece::new(Variant::Branch)),
            Box::new(OrganizationPiece::new(Variant::Main)),
            Box::new(OrganizationPiece::new(Variant::Branch)),
            Box::new(LocationListPiece),
            Box::new(LogoPiece::new(Variant::Main)),
            Box::new(LogoPiece::new(Variant::Branch)),
        ];

        let branch_organization_id = OrganizationPiece::branch_organization_id(scope);
        for piece in &pieces {
            if !piece.is_needed(scope) {
                tracing::debug!(piece = piece.name(), "piece not needed");
                continue;
            }
            match piece.generate(scope) {
                Some(node) => {
                    let is_branch_organization = node
                        .get("@id")
                        .and_then(Value::as_str)
                        .is_some_and(|id| id == branch_organization_id)
                        && node.get("@type").is_some_and(is_organization_type);
                    let node = if is_branch_organization {
                        self.organization_filter.transform(node, scope)
                    } else {
                        node
                    };
                    tracing::debug!(piece = piece.name(), "piece generated node");
                    graph.push(node);
                }
                None => {
                    tracing::debug!(piece = piece.name(), "piece needed but produced nothing");
                }
            }
        }
        graph
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        GraphAssembler::new()
    }
}

/// One-call entry point with the default image factory.
#[must_use]
pub fn assemble(
    options: &Options,
    locations: &dyn LocationRepository,
    ctx: &RenderContext,
) -> Vec<SchemaNode> {
    let images = DefaultImageNodeFactory;
    let scope = GraphScope::new(options, locations, &images, ctx);
    GraphAssembler::new().assemble(&scope)
}

/// Minimal rendition of the host framework's own Organization node, the
/// target of the organization filter. The real host builds this itself.
fn host_organization_node(scope: &GraphScope<'_>) -> SchemaNode {
    let mut node = SchemaNode::new();
    node.insert("@type".to_string(), Value::from("Organization"));
    node.insert(
        "@id".to_string(),
        Value::from(OrganizationPiece::host_organization_id(scope)),
    );
    if let Some(name) = scope.ctx.site_represents.name() {
        node.insert("name".to_string(), Value::from(name));
    }
    node.insert(
        "url".to_string(),
        Value::from(scope.ctx.site_url.clone()),
    );
    node
}

fn is_organization_type(ty: &Value) -> bool {
    match ty {
        Value::String(s) => s == "Organization",
        Value::Array(values) => values.iter().any(|v| v.as_str() == Some("Organization")),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use localschema_core::{InMemoryLocationRepository, LocationRecord};

    use super::*;
    use crate::context::{PageKind, SiteRepresents};

    fn complete_location(id: i64) -> LocationRecord {
        let mut loc = LocationRecord::new(
            id,
            &format!("Branch {id}"),
            &format!("https://example.com/locations/{id}/"),
        );
        loc.street = Some("12 Pier Road".to_string());
        loc.postal_code = Some("02110".to_string());
        loc.country = Some("US".to_string());
        loc
    }

    fn context(page: PageKind, represents: SiteRepresents) -> RenderContext {
        RenderContext {
            canonical_url: "https://example.com/locations/2/".to_string(),
            site_url: "https://example.com/".to_string(),
            site_represents: represents,
            main_entity_id: "https://example.com/locations/2/#webpage".to_string(),
            page,
            page_title: "Branch 2".to_string(),
        }
    }

    fn company() -> SiteRepresents {
        SiteRepresents::Company {
            name: "Harbor Coffee".to_string(),
            logo: Some("https://example.com/logo.png".to_string()),
        }
    }

    #[test]
    fn host_node_emitted_only_in_filter_mode() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![complete_location(1)]);

        let ctx = context(PageKind::Other, company());
        let graph = assemble(&options, &repo, &ctx);
        assert!(graph
            .iter()
            .any(|n| n.get("@id").and_then(Value::as_str)
                == Some("https://example.com/#organization")));

        let ctx = context(PageKind::Other, SiteRepresents::Unset);
        let graph = assemble(&options, &repo, &ctx);
        assert!(graph
            .iter()
            .all(|n| n.get("@id").and_then(Value::as_str)
                != Some("https://example.com/#organization")));
    }

    #[test]
    fn assemble_is_idempotent() {
        let options = Options {
            multiple_locations: true,
            same_organization: true,
            primary_location: Some(1),
            ..Options::default()
        };
        let repo =
            InMemoryLocationRepository::new(vec![complete_location(1), complete_location(2)])
                .with_current_page(2);
        let ctx = context(PageKind::LocationDetail, company());

        let first = assemble(&options, &repo, &ctx);
        let second = assemble(&options, &repo, &ctx);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "two renders over unchanged data must be byte-identical"
        );
    }

    #[test]
    fn branch_organization_runs_through_filter_unchanged() {
        let options = Options {
            multiple_locations: true,
            same_organization: false,
            ..Options::default()
        };
        let repo =
            InMemoryLocationRepository::new(vec![complete_location(1), complete_location(2)])
                .with_current_page(2);
        let ctx = context(PageKind::LocationDetail, company());

        let graph = assemble(&options, &repo, &ctx);
        let branch = graph
            .iter()
            .find(|n| {
                n.get("@id").and_then(Value::as_str)
                    == Some("https://example.com/locations/2/#local-branch-organization")
            })
            .expect("branch organization present");
        assert_eq!(
            branch["@type"],
            serde_json::json!(["Organization", "Place"]),
            "the filter must not mangle an already-complete branch node"
        );
    }
}
