//! The organization logo image node, main and branch variants.
//!
//! The image node itself comes from the host framework's attachment helper
//! ([`ImageNodeFactory`]); this piece only decides which image, which id and
//! which caption.
//!
//! [`ImageNodeFactory`]: crate::piece::ImageNodeFactory

use localschema_core::{is_filled, LocationRecord};

use crate::context::RenderContext;
use crate::fragments;
use crate::piece::{GraphPiece, GraphScope, SchemaNode, Variant};
use crate::topology::Topology;

pub struct LogoPiece {
    pub variant: Variant,
}

impl LogoPiece {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        LogoPiece { variant }
    }

    /// The full node id this variant emits (and the organization references).
    #[must_use]
    pub fn schema_id(variant: Variant, scope: &GraphScope<'_>) -> String {
        match variant {
            Variant::Main => {
                fragments::fragment_id(&scope.ctx.site_url, fragments::MAIN_ORGANIZATION_LOGO)
            }
            Variant::Branch => fragments::fragment_id(
                &scope.ctx.canonical_url,
                fragments::BRANCH_ORGANIZATION_LOGO,
            ),
        }
    }
}

/// The logo URL for a location-backed organization node: the location's own
/// logo when set, else the site-wide company logo. Shared by this piece and
/// the organization builder so a `logo` reference is only ever written when
/// a logo node will actually exist.
#[must_use]
pub fn resolve_logo_url(location: Option<&LocationRecord>, ctx: &RenderContext) -> Option<String> {
    location
        .and_then(|l| l.logo.clone())
        .filter(|url| is_filled(Some(url.as_str())))
        .or_else(|| ctx.site_represents.logo().map(str::to_string))
        .filter(|url| is_filled(Some(url.as_str())))
}

impl GraphPiece for LogoPiece {
    fn name(&self) -> &'static str {
        match self.variant {
            Variant::Main => "main-logo",
            Variant::Branch => "branch-logo",
        }
    }

    fn is_needed(&self, scope: &GraphScope<'_>) -> bool {
        let topology = Topology::new(scope);
        match self.variant {
            Variant::Main => {
                topology.should_filter_organization()
                    && (!topology.multiple_locations_enabled()
                        || topology.primary_location().is_some())
            }
            Variant::Branch => topology.will_emit_branch_identified_organization(),
        }
    }

    fn generate(&self, scope: &GraphScope<'_>) -> Option<SchemaNode> {
        let topology = Topology::new(scope);
        let (location, caption) = match self.variant {
            Variant::Main => {
                let location = topology.related_location();
                let caption = scope.ctx.site_represents.name().unwrap_or("").to_string();
                (location, caption)
            }
            Variant::Branch => {
                let location = scope.locations.for_current_page()?;
                let caption = location.name.clone();
                (Some(location), caption)
            }
        };

        let url = resolve_logo_url(location.as_ref(), scope.ctx)?;
        let id = Self::schema_id(self.variant, scope);
        Some(scope.images.image_node(&id, &url, &caption))
    }
}

#[cfg(test)]
mod tests {
    use localschema_core::{InMemoryLocationRepository, LocationRecord, Options};

    use super::*;
    use crate::context::{PageKind, SiteRepresents};
    use crate::piece::DefaultImageNodeFactory;

    fn location(id: i64, logo: Option<&str>) -> LocationRecord {
        let mut loc = LocationRecord::new(
            id,
            &format!("Branch {id}"),
            &format!("https://example.com/locations/{id}/"),
        );
        loc.logo = logo.map(str::to_string);
        loc
    }

    fn context(page: PageKind, company_logo: Option<&str>) -> RenderContext {
        RenderContext {
            canonical_url: "https://example.com/locations/2/".to_string(),
            site_url: "https://example.com/".to_string(),
            site_represents: SiteRepresents::Company {
                name: "Harbor Coffee".to_string(),
                logo: company_logo.map(str::to_string),
            },
            main_entity_id: "https://example.com/locations/2/#webpage".to_string(),
            page,
            page_title: "Branch 2".to_string(),
        }
    }

    #[test]
    fn location_logo_wins_over_company_logo() {
        let ctx = context(PageKind::Other, Some("https://example.com/company.png"));
        let loc = location(1, Some("https://example.com/pier.png"));
        assert_eq!(
            resolve_logo_url(Some(&loc), &ctx).as_deref(),
            Some("https://example.com/pier.png")
        );
    }

    #[test]
    fn company_logo_is_the_fallback() {
        let ctx = context(PageKind::Other, Some("https://example.com/company.png"));
        let loc = location(1, None);
        assert_eq!(
            resolve_logo_url(Some(&loc), &ctx).as_deref(),
            Some("https://example.com/company.png")
        );
    }

    #[test]
    fn no_logo_anywhere_resolves_none() {
        let ctx = context(PageKind::Other, None);
        assert_eq!(resolve_logo_url(Some(&location(1, None)), &ctx), None);
        assert_eq!(resolve_logo_url(None, &ctx), None);
    }

    #[test]
    fn main_logo_uses_company_caption_and_main_fragment() {
        let options = Options::default();
        let repo = InMemoryLocationRepository::new(vec![location(1, Some("https://example.com/pier.png"))]);
        let ctx = context(PageKind::Other, None);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = LogoPiece::new(Variant::Main);
        assert!(piece.is_needed(&scope));
        let node = piece.generate(&scope).unwrap();
        assert_eq!(node["@id"], "https://example.com/#local-main-organization-logo");
        assert_eq!(node["caption"], "Harbor Coffee");
    }

    #[test]
    fn branch_logo_uses_location_caption_and_branch_fragment() {
        let options = Options {
            multiple_locations: true,
            ..Options::default()
        };
        let repo = InMemoryLocationRepository::new(vec![
            location(1, None),
            location(2, Some("https://example.com/branch.png")),
        ])
        .with_current_page(2);
        let ctx = context(PageKind::LocationDetail, None);
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        let piece = LogoPiece::new(Variant::Branch);
        assert!(piece.is_needed(&scope));
        let node = piece.generate(&scope).unwrap();
        assert_eq!(
            node["@id"],
            "https://example.com/locations/2/#local-branch-organization-logo"
        );
        assert_eq!(node["caption"], "Branch 2");
    }

    #[test]
    fn main_logo_not_needed_in_multi_mode_without_primary() {
        let options = Options {
            multiple_locations: true,
            same_organization: true,
            ..Options::default()
        };
        let repo = InMemoryLocationRepository::new(vec![location(1, None), location(2, None)]);
        let ctx = context(PageKind::Other, Some("https://example.com/company.png"));
        let images = DefaultImageNodeFactory;
        let scope = GraphScope::new(&options, &repo, &images, &ctx);

        assert!(!LogoPiece::new(Variant::Main).is_needed(&scope));
    }
}
