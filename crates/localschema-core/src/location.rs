//! The per-location attribute snapshot consumed by the graph subsystem.

use serde::{Deserialize, Serialize};

use crate::schedule::WeekSchedule;

/// Publish status of a location record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Published,
    Draft,
}

impl Default for PublishStatus {
    fn default() -> Self {
        PublishStatus::Published
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStatus::Published => write!(f, "published"),
            PublishStatus::Draft => write!(f, "draft"),
        }
    }
}

/// Per-location opening-hours overrides.
///
/// `open_247 = Some(..)` overrides the global flag. `overrides_shared` is the
/// explicit opt-out a location must set before its own week is consulted
/// under shared opening hours; without it the shared schedule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationHours {
    pub open_247: Option<bool>,
    pub overrides_shared: bool,
    pub week: WeekSchedule,
}

/// Read-only snapshot of one business location.
///
/// Fetched per-request from the [`LocationRepository`]; the graph subsystem
/// never mutates it. Persistence is owned by the provider.
///
/// [`LocationRepository`]: crate::repository::LocationRepository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    pub permalink: String,
    #[serde(default)]
    pub status: PublishStatus,
    /// schema.org business type, e.g. `"LocalBusiness"` or a subtype.
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub street2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone2: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub vat_id: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub coc_id: Option<String>,
    #[serde(default)]
    pub global_location_number: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub currencies_accepted: Option<String>,
    #[serde(default)]
    pub payment_accepted: Option<String>,
    #[serde(default)]
    pub area_served: Option<String>,
    /// Logo image URL for this location, if it has its own.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub hours: LocationHours,
}

impl LocationRecord {
    /// A published record with only the identity fields set. Tests and
    /// loaders fill in the rest.
    #[must_use]
    pub fn new(id: i64, name: &str, permalink: &str) -> Self {
        LocationRecord {
            id,
            name: name.to_string(),
            permalink: permalink.to_string(),
            status: PublishStatus::Published,
            business_type: None,
            street: None,
            street2: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            latitude: None,
            longitude: None,
            phone: None,
            phone2: None,
            fax: None,
            email: None,
            url: None,
            contact_phone: None,
            contact_email: None,
            vat_id: None,
            tax_id: None,
            coc_id: None,
            global_location_number: None,
            price_range: None,
            currencies_accepted: None,
            payment_accepted: None,
            area_served: None,
            logo: None,
            hours: LocationHours::default(),
        }
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }

    /// Whether the record carries the minimum fields a `PostalAddress` node
    /// requires: street, postal code and country, all non-empty. Builders
    /// must omit the address (and any reference to it) when this is false.
    #[must_use]
    pub fn has_required_address_fields(&self) -> bool {
        is_filled(self.street.as_deref())
            && is_filled(self.postal_code.as_deref())
            && is_filled(self.country.as_deref())
    }

    /// Street lines joined with `", "`, skipping empty parts. `None` when
    /// no street line is set.
    #[must_use]
    pub fn street_address(&self) -> Option<String> {
        let parts: Vec<&str> = [self.street.as_deref(), self.street2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// True when the value is present and non-blank.
#[must_use]
pub fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}
