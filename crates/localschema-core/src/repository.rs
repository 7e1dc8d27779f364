//! The location provider interface the graph subsystem consumes.
//!
//! Storage itself is an external collaborator; this crate only defines the
//! read contract plus an in-memory implementation for tests and the CLI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::location::{LocationRecord, PublishStatus};

/// Filter criteria for location queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFilter {
    /// Restrict to these record ids.
    pub ids: Option<Vec<i64>>,
    /// Restrict to locations tagged with this category.
    pub category_id: Option<i64>,
    /// Restrict to this publish status.
    pub status: Option<PublishStatus>,
    /// Cap the number of returned records.
    pub limit: Option<usize>,
}

impl LocationFilter {
    /// Filter matching all published locations.
    #[must_use]
    pub fn published() -> Self {
        LocationFilter {
            status: Some(PublishStatus::Published),
            ..LocationFilter::default()
        }
    }

    #[must_use]
    pub fn with_ids(mut self, ids: Vec<i64>) -> Self {
        self.ids = Some(ids);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read-only access to location records.
///
/// Implementations must return records in a stable order: the graph output
/// (list positions in particular) follows provider order verbatim.
pub trait LocationRepository {
    /// All records matching `filter`, in the provider's stable order.
    fn get(&self, filter: &LocationFilter) -> Vec<LocationRecord>;

    /// The location the current page is about, if the current page is a
    /// single-location detail page.
    fn for_current_page(&self) -> Option<LocationRecord>;
}

/// In-memory repository backing tests and the CLI.
///
/// Records keep their insertion order; category tags are held separately so
/// the record type stays a pure attribute snapshot.
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    records: Vec<LocationRecord>,
    categories: HashMap<i64, Vec<i64>>,
    current_page: Option<i64>,
}

impl InMemoryLocationRepository {
    #[must_use]
    pub fn new(records: Vec<LocationRecord>) -> Self {
        InMemoryLocationRepository {
            records,
            categories: HashMap::new(),
            current_page: None,
        }
    }

    /// Mark the record the current page is about.
    #[must_use]
    pub fn with_current_page(mut self, location_id: i64) -> Self {
        self.current_page = Some(location_id);
        self
    }

    /// Tag a location with a category id.
    pub fn tag_category(&mut self, location_id: i64, category_id: i64) {
        self.categories.entry(location_id).or_default().push(category_id);
    }

    fn matches(&self, record: &LocationRecord, filter: &LocationFilter) -> bool {
        if let Some(ids) = &filter.ids {
            if !ids.contains(&record.id) {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(category_id) = filter.category_id {
            let tagged = self
                .categories
                .get(&record.id)
                .is_some_and(|cats| cats.contains(&category_id));
            if !tagged {
                return false;
            }
        }
        true
    }
}

impl LocationRepository for InMemoryLocationRepository {
    fn get(&self, filter: &LocationFilter) -> Vec<LocationRecord> {
        let mut out: Vec<LocationRecord> = self
            .records
            .iter()
            .filter(|r| self.matches(r, filter))
            .cloned()
            .collect();
        if let Some(limit) = filter.limit {
            out.truncate(limit);
        }
        out
    }

    fn for_current_page(&self) -> Option<LocationRecord> {
        let id = self.current_page?;
        self.records.iter().find(|r| r.id == id).cloned()
    }
}
