//! The YAML site description: options, locations and a render context in
//! one file, enough to assemble a graph outside a host framework.

use std::path::Path;

use anyhow::Context;
use localschema_core::{InMemoryLocationRepository, LocationRecord, Options};
use localschema_graph::RenderContext;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SiteFile {
    #[serde(default)]
    pub options: Options,
    pub context: RenderContext,
    #[serde(default)]
    pub locations: Vec<LocationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LocationEntry {
    #[serde(flatten)]
    pub record: LocationRecord,
    /// Category ids this location is tagged with.
    #[serde(default)]
    pub categories: Vec<i64>,
    /// Marks the location the rendered page is about.
    #[serde(default)]
    pub current_page: bool,
}

/// Load a site description from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_site(path: &Path) -> anyhow::Result<SiteFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read site file {}", path.display()))?;
    let site: SiteFile = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse site file {}", path.display()))?;
    Ok(site)
}

/// Build the in-memory repository backing one render.
#[must_use]
pub fn build_repository(site: &SiteFile) -> InMemoryLocationRepository {
    let records: Vec<LocationRecord> = site.locations.iter().map(|l| l.record.clone()).collect();
    let mut repo = InMemoryLocationRepository::new(records);
    for entry in &site.locations {
        for category in &entry.categories {
            repo.tag_category(entry.record.id, *category);
        }
    }
    if let Some(current) = site.locations.iter().find(|l| l.current_page) {
        repo = repo.with_current_page(current.record.id);
    }
    repo
}
