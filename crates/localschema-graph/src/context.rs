//! The per-request value object supplied by the host framework.

use serde::{Deserialize, Serialize};

/// What kind of page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// A single-location detail page.
    LocationDetail,
    /// The locations overview/archive page.
    LocationArchive,
    /// Anything else (home page, posts, …).
    Other,
}

/// What the site as a whole represents, per the host framework's settings.
///
/// When this is set, the host framework owns the canonical Organization node
/// and our organization builder contributes a transform instead of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteRepresents {
    Company {
        name: String,
        /// Site-wide company logo URL, the fallback when a location has none.
        #[serde(default)]
        logo: Option<String>,
    },
    Person {
        name: String,
    },
    Unset,
}

impl SiteRepresents {
    #[must_use]
    pub fn is_company(&self) -> bool {
        matches!(self, SiteRepresents::Company { .. })
    }

    /// Whether the host framework emits its own Organization node at all.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, SiteRepresents::Unset)
    }

    /// The represented entity's display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            SiteRepresents::Company { name, .. } | SiteRepresents::Person { name } => {
                Some(name.as_str())
            }
            SiteRepresents::Unset => None,
        }
    }

    /// The site-wide logo URL, if any.
    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        match self {
            SiteRepresents::Company { logo, .. } => logo.as_deref(),
            _ => None,
        }
    }
}

/// Immutable render context for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Canonical URL of the page being rendered.
    pub canonical_url: String,
    /// The site's base URL; main-scoped node ids bind to it.
    pub site_url: String,
    pub site_represents: SiteRepresents,
    /// Identifier of the page's main-entity node, computed by the host.
    pub main_entity_id: String,
    pub page: PageKind,
    pub page_title: String,
}
