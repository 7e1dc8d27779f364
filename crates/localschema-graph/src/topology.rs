//! Mode predicates over the current configuration and location set.
//!
//! Every topology decision — which of single-location, one-organization or
//! independent-branches applies, who the primary location is, whether a
//! branch organization will be emitted — lives here and nowhere else. The
//! builders ask; they never re-derive a condition locally, so two pieces can
//! never drift apart on the same question.
//!
//! All predicates are deterministic pure functions of the request-immutable
//! scope; no caching is needed at request cost.

use localschema_core::{LocationFilter, LocationRecord};

use crate::context::PageKind;
use crate::piece::GraphScope;

pub struct Topology<'a> {
    scope: &'a GraphScope<'a>,
}

impl<'a> Topology<'a> {
    #[must_use]
    pub fn new(scope: &'a GraphScope<'a>) -> Self {
        Topology { scope }
    }

    #[must_use]
    pub fn multiple_locations_enabled(&self) -> bool {
        self.scope.options.multiple_locations
    }

    /// Multi-location mode where all locations belong to one organization.
    #[must_use]
    pub fn one_organization(&self) -> bool {
        self.multiple_locations_enabled() && self.scope.options.same_organization
    }

    #[must_use]
    pub fn shared_business_info_allowed(&self) -> bool {
        self.one_organization() && self.scope.options.shared_business_info
    }

    #[must_use]
    pub fn shared_opening_hours_allowed(&self) -> bool {
        self.one_organization() && self.scope.options.shared_opening_hours
    }

    /// The explicitly designated primary, if it resolves to a published
    /// location.
    fn explicit_primary(&self) -> Option<LocationRecord> {
        if !self.one_organization() {
            return None;
        }
        let id = self.scope.options.primary_location?;
        self.scope
            .locations
            .get(&LocationFilter::published().with_ids(vec![id]))
            .into_iter()
            .next()
    }

    /// A lone published location implicitly acts as the primary even without
    /// explicit designation.
    fn acting_primary(&self) -> Option<LocationRecord> {
        if !self.one_organization() {
            return None;
        }
        let mut published = self
            .scope
            .locations
            .get(&LocationFilter::published().with_limit(2));
        if published.len() == 1 {
            published.pop()
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_primary_location(&self) -> bool {
        self.explicit_primary().is_some()
    }

    #[must_use]
    pub fn has_location_acting_as_primary(&self) -> bool {
        self.acting_primary().is_some()
    }

    /// The effective primary: explicit designation first, acting-primary
    /// second. When both resolve they must name the same location; that can
    /// only diverge through a provider bug, so it is checked rather than
    /// assumed.
    #[must_use]
    pub fn primary_location(&self) -> Option<LocationRecord> {
        let explicit = self.explicit_primary();
        if let (Some(e), Some(a)) = (&explicit, &self.acting_primary()) {
            if e.id != a.id {
                tracing::warn!(
                    explicit = e.id,
                    acting = a.id,
                    "designated primary disagrees with the sole published location"
                );
            }
        }
        explicit.or_else(|| self.acting_primary())
    }

    /// The location the main organization describes: in single-location mode
    /// the sole published record, otherwise the primary/acting-primary.
    #[must_use]
    pub fn related_location(&self) -> Option<LocationRecord> {
        if self.multiple_locations_enabled() {
            self.primary_location()
        } else {
            self.scope
                .locations
                .get(&LocationFilter::published().with_limit(1))
                .into_iter()
                .next()
        }
    }

    /// Whether the current page's location is the effective primary. False
    /// when no primary applies or the page has no location.
    #[must_use]
    pub fn current_location_is_primary(&self) -> bool {
        let Some(current) = self.scope.locations.for_current_page() else {
            return false;
        };
        self.primary_location().is_some_and(|p| p.id == current.id)
    }

    /// Whether the branch organization piece will emit a node: the site
    /// represents a company, multi-location mode is on, the page is a
    /// location detail page whose location resolves, and that location is
    /// not the primary.
    ///
    /// Nothing outside this struct re-derives the condition; the branch
    /// builders and the organization filter all call it here.
    #[must_use]
    pub fn will_emit_branch_organization(&self) -> bool {
        self.scope.ctx.site_represents.is_company()
            && self.multiple_locations_enabled()
            && self.scope.ctx.page == PageKind::LocationDetail
            && self.scope.locations.for_current_page().is_some()
            && !self.current_location_is_primary()
    }

    /// Whether the host framework owns the canonical Organization node. When
    /// true the organization builder contributes a transform, not a node.
    #[must_use]
    pub fn should_filter_organization(&self) -> bool {
        self.scope.ctx.site_represents.is_set()
    }

    /// Whether the main organization builder generates a node directly:
    /// no host-owned organization to filter, independent-branches mode, and
    /// a location detail page whose location resolves. The node it produces
    /// is branch-identified.
    #[must_use]
    pub fn will_emit_direct_main_organization(&self) -> bool {
        !self.should_filter_organization()
            && self.multiple_locations_enabled()
            && !self.one_organization()
            && self.scope.ctx.page == PageKind::LocationDetail
            && self.scope.locations.for_current_page().is_some()
    }

    /// Whether any branch-identified organization node will appear in this
    /// render, via either generation path. The branch address and branch
    /// logo pieces gate on this so their nodes exist exactly when something
    /// references them.
    #[must_use]
    pub fn will_emit_branch_identified_organization(&self) -> bool {
        self.will_emit_branch_organization() || self.will_emit_direct_main_organization()
    }

    /// Whether the node currently being filled may claim `mainEntityOfPage`.
    ///
    /// Exactly one node per render claims the page: the location list on the
    /// archive, the branch organization on a non-primary detail page, the
    /// main organization otherwise.
    #[must_use]
    pub fn should_output_main_entity(&self, is_branch: bool) -> bool {
        match self.scope.ctx.page {
            PageKind::LocationArchive => false,
            PageKind::Other => true,
            PageKind::LocationDetail => {
                if !self.multiple_locations_enabled() {
                    return true;
                }
                if is_branch {
                    return true;
                }
                if self.will_emit_branch_organization() {
                    return false;
                }
                self.current_location_is_primary()
            }
        }
    }
}
