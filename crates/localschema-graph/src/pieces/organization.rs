//! The Organization node builder — the most involved piece.
//!
//! Two operating modes:
//!
//! - **Filter mode** (the site represents a company or person): the host
//!   framework owns the canonical Organization node, and
//!   [`OrganizationFilter`] transforms it — appending `Place`, filling from
//!   the related location, or filling from shared settings when no single
//!   location stands for the organization.
//! - **Direct mode** (the host emits no organization, or a branch node is
//!   due): [`OrganizationPiece`] generates a branch-identified node for the
//!   current page's location.
//!
//! Both modes share [`fill_from_location`]; all topology questions are
//! answered by [`Topology`], never re-derived here.

use localschema_core::{business_type, is_filled, LocationRecord};
use serde_json::Value;

use crate::fragments;
use crate::hours::{resolve_schedule, schedule_to_nodes, HoursSource};
use crate::piece::{GraphPiece, GraphScope, NodeTransform, SchemaNode, Variant};
use crate::pieces::address::{insert_filled, AddressPiece};
use crate::pieces::logo::{resolve_logo_url, LogoPiece};
use crate::topology::Topology;

pub struct OrganizationPiece {
    pub variant: Variant,
}

impl OrganizationPiece {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        OrganizationPiece { variant }
    }

    /// Id of the host framework's own Organization node.
    #[must_use]
    pub fn host_organization_id(scope: &GraphScope<'_>) -> String {
        fragments::fragment_id(&scope.ctx.site_url, fragments::ORGANIZATION)
    }

    /// Id of the branch organization node for the current page.
    #[must_use]
    pub fn branch_organization_id(scope: &GraphScope<'_>) -> String {
        fragments::fragment_id(&scope.ctx.canonical_url, fragments::BRANCH_ORGANIZATION)
    }
}

impl GraphPiece for OrganizationPiece {
    fn name(&self) -> &'static str {
        match self.variant {
            Variant::Main => "main-organization",
            Variant::Branch => "branch-organization",
        }
    }

    fn is_needed(&self, scope: &GraphScope<'_>) -> bool {
        let topology = Topology::new(scope);
        match self.variant {
            // Direct generation only: with a host-owned organization the
            // main variant works through the filter instead.
            Variant::Main => topology.will_emit_direct_main_organization(),
            Variant::Branch => topology.will_emit_branch_organization(),
        }
    }

    fn generate(&self, scope: &GraphScope<'_>) -> Option<SchemaNode> {
        let topology = Topology::new(scope);
        let location = scope.locations.for_current_page()?;

        let mut node = SchemaNode::new();
        node.insert(
            "@type".to_string(),
            serde_json::json!(["Organization", "Place"]),
        );
        fill_from_location(&mut node, &location, scope, true);
        node.insert(
            "name".to_string(),
            Value::from(scope.ctx.page_title.clone()),
        );
        if topology.one_organization() {
            node.insert(
                "parentOrganization".to_string(),
                fragments::id_ref(&Self::host_organization_id(scope)),
            );
        }
        Some(node)
    }
}

/// The transform registered against the host framework's Organization node.
pub struct OrganizationFilter {
    url_override: Option<Box<dyn Fn(&str) -> String>>,
}

impl OrganizationFilter {
    #[must_use]
    pub fn new() -> Self {
        OrganizationFilter { url_override: None }
    }

    /// Install the site-URL override hook applied after a location fill.
    #[must_use]
    pub fn with_url_override(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.url_override = Some(Box::new(f));
        self
    }
}

impl Default for OrganizationFilter {
    fn default() -> Self {
        OrganizationFilter::new()
    }
}

impl NodeTransform for OrganizationFilter {
    fn transform(&self, mut node: SchemaNode, scope: &GraphScope<'_>) -> SchemaNode {
        let topology = Topology::new(scope);

        append_type(&mut node, "Place");

        // Branch organization nodes are independently complete.
        let branch_id = OrganizationPiece::branch_organization_id(scope);
        if node.get("@id").and_then(Value::as_str) == Some(branch_id.as_str()) {
            return node;
        }

        // Independent-branches setup: the host node stays generic; it may
        // only claim the page when no branch node does.
        if topology.multiple_locations_enabled() && !topology.one_organization() {
            if !topology.will_emit_branch_organization()
                && topology.should_output_main_entity(false)
            {
                node.insert(
                    "mainEntityOfPage".to_string(),
                    fragments::id_ref(&scope.ctx.main_entity_id),
                );
            }
            return node;
        }

        let related = topology.related_location();

        // One organization, no single location standing for it: fill from
        // the shared settings instead.
        if related.is_none()
            && topology.one_organization()
            && (topology.shared_business_info_allowed()
                || topology.shared_opening_hours_allowed())
        {
            fill_from_shared(&mut node, scope, &topology);
            return node;
        }

        if let Some(location) = related {
            fill_from_location(&mut node, &location, scope, false);
            if let Some(filter) = &self.url_override {
                if let Some(url) = node.get("url").and_then(Value::as_str) {
                    let filtered = filter(url);
                    node.insert("url".to_string(), Value::from(filtered));
                }
            }
        }
        node
    }
}

/// Fill an organization node from a single location record. `is_branch`
/// selects the branch-scoped identifiers; everything else is identical
/// between the variants.
pub(crate) fn fill_from_location(
    node: &mut SchemaNode,
    location: &LocationRecord,
    scope: &GraphScope<'_>,
    is_branch: bool,
) {
    let topology = Topology::new(scope);
    let variant = if is_branch { Variant::Branch } else { Variant::Main };

    if let Some(ty) = location.business_type.as_deref() {
        if is_filled(Some(ty)) {
            append_type(node, ty);
        }
    }

    // The reference mirrors the address piece's own emission conditions; a
    // pointer to a node that will not exist is worse than no pointer.
    let address_will_emit = location.has_required_address_fields()
        && (is_branch || scope.ctx.site_represents.is_company());
    if address_will_emit {
        node.insert(
            "address".to_string(),
            fragments::id_ref(&AddressPiece::schema_id(variant, scope)),
        );
    }

    let id = if is_branch {
        OrganizationPiece::branch_organization_id(scope)
    } else {
        OrganizationPiece::host_organization_id(scope)
    };
    node.insert("@id".to_string(), Value::from(id));

    if topology.should_output_main_entity(is_branch) {
        node.insert(
            "mainEntityOfPage".to_string(),
            fragments::id_ref(&scope.ctx.main_entity_id),
        );
    }

    if resolve_logo_url(Some(location), scope.ctx).is_some() {
        let logo_id = LogoPiece::schema_id(variant, scope);
        node.insert("logo".to_string(), fragments::id_ref(&logo_id));
        node.insert("image".to_string(), fragments::id_ref(&logo_id));
    }

    if let (Some(latitude), Some(longitude)) = (location.latitude, location.longitude) {
        node.insert(
            "geo".to_string(),
            serde_json::json!({
                "@type": "GeoCoordinates",
                "latitude": latitude,
                "longitude": longitude,
            }),
        );
    }

    let telephone: Vec<&str> = [location.phone.as_deref(), location.phone2.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if !telephone.is_empty() {
        node.insert("telephone".to_string(), serde_json::json!(telephone));
    }

    if let Some(contact_point) = contact_point(
        location.contact_phone.as_deref(),
        location.contact_email.as_deref(),
    ) {
        node.insert("contactPoint".to_string(), contact_point);
    }

    let schedule = resolve_schedule(HoursSource::Location(location), scope.options);
    let hours_nodes = schedule_to_nodes(&schedule);
    if !hours_nodes.is_empty() {
        node.insert(
            "openingHoursSpecification".to_string(),
            Value::from(hours_nodes),
        );
    }

    insert_filled(node, "email", location.email.clone());
    insert_filled(node, "faxNumber", location.fax.clone());
    insert_filled(node, "areaServed", location.area_served.clone());
    insert_filled(node, "vatID", location.vat_id.clone());
    insert_filled(node, "taxID", location.tax_id.clone());
    insert_filled(node, "url", location.url.clone());
    insert_filled(
        node,
        "globalLocationNumber",
        location.global_location_number.clone(),
    );

    let effective_type = location
        .business_type
        .as_deref()
        .filter(|t| is_filled(Some(t)))
        .or(scope.options.default_business_type.as_deref());
    if effective_type
        .is_some_and(|t| business_type::is_descendant_of(t, business_type::LOCAL_BUSINESS))
    {
        insert_filled(node, "priceRange", location.price_range.clone());
        insert_filled(node, "currenciesAccepted", location.currencies_accepted.clone());
        insert_filled(node, "paymentAccepted", location.payment_accepted.clone());
    }
}

/// Fill from the global shared settings: the virtual organization with no
/// single location behind it.
fn fill_from_shared(node: &mut SchemaNode, scope: &GraphScope<'_>, topology: &Topology<'_>) {
    let options = scope.options;

    if let Some(ty) = options.default_business_type.as_deref() {
        if is_filled(Some(ty)) {
            append_type(node, ty);
        }
    }

    if topology.shared_business_info_allowed() {
        let telephone: Vec<&str> = [options.phone.as_deref(), options.phone2.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if !telephone.is_empty() {
            node.insert("telephone".to_string(), serde_json::json!(telephone));
        }
        if let Some(contact_point) = contact_point(
            options.contact_phone.as_deref(),
            options.contact_email.as_deref(),
        ) {
            node.insert("contactPoint".to_string(), contact_point);
        }
    }

    if topology.shared_opening_hours_allowed() {
        let schedule = resolve_schedule(HoursSource::Shared, options);
        let hours_nodes = schedule_to_nodes(&schedule);
        if !hours_nodes.is_empty() {
            node.insert(
                "openingHoursSpecification".to_string(),
                Value::from(hours_nodes),
            );
        }
    }
}

/// Normalize `@type` to an array and append `ty` if absent.
pub(crate) fn append_type(node: &mut SchemaNode, ty: &str) {
    let mut types: Vec<String> = match node.get("@type") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    if !types.iter().any(|existing| existing == ty) {
        types.push(ty.to_string());
    }
    node.insert("@type".to_string(), serde_json::json!(types));
}

fn contact_point(phone: Option<&str>, email: Option<&str>) -> Option<Value> {
    let phone = phone.filter(|p| !p.trim().is_empty());
    let email = email.filter(|e| !e.trim().is_empty());
    if phone.is_none() && email.is_none() {
        return None;
    }
    let mut point = SchemaNode::new();
    point.insert("@type".to_string(), Value::from("ContactPoint"));
    point.insert("contactType".to_string(), Value::from("customer support"));
    if let Some(phone) = phone {
        point.insert("telephone".to_string(), Value::from(phone));
    }
    if let Some(email) = email {
        point.insert("email".to_string(), Value::from(email));
    }
    Some(Value::Object(point))
}
