//! Global plugin configuration.
//!
//! Loaded once per request into an immutable snapshot and passed explicitly;
//! nothing in the graph subsystem re-reads configuration ad hoc.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schedule::WeekSchedule;

/// The plugin-wide settings map.
///
/// Mutated only by the (out-of-scope) settings surface; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Multi-location mode.
    pub multiple_locations: bool,
    /// All locations belong to one organization (vs. independent branches).
    pub same_organization: bool,
    /// All locations share one set of business/contact info.
    pub shared_business_info: bool,
    /// All locations share one opening-hours schedule.
    pub shared_opening_hours: bool,
    /// Designated primary location id.
    pub primary_location: Option<i64>,
    /// Business type applied when no location provides one.
    pub default_business_type: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    /// Globally open around the clock; per-location `open_247` overrides it.
    pub open_247: bool,
    /// Two opening-hour slots per day instead of one.
    pub multiple_opening_hours: bool,
    /// Stored times use `"h:mm AM/PM"` instead of `"HH:MM"`.
    pub format_12h: bool,
    /// The shared/global weekly schedule.
    pub hours: WeekSchedule,
    pub location_label_singular: String,
    pub location_label_plural: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            multiple_locations: false,
            same_organization: false,
            shared_business_info: false,
            shared_opening_hours: false,
            primary_location: None,
            default_business_type: None,
            phone: None,
            phone2: None,
            fax: None,
            email: None,
            contact_phone: None,
            contact_email: None,
            open_247: false,
            multiple_opening_hours: false,
            format_12h: false,
            hours: WeekSchedule::default(),
            location_label_singular: "location".to_string(),
            location_label_plural: "locations".to_string(),
        }
    }
}

/// Load and validate options from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::OptionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let options: Options = serde_yaml::from_str(&content)?;
    validate_options(&options)?;
    Ok(options)
}

/// Reject option combinations that are silently meaningless.
///
/// The flags form a dependency chain: shared info requires one-organization
/// mode, which requires multi-location mode. A primary location only exists
/// in multi-location mode.
///
/// # Errors
///
/// Returns `ConfigError::Validation` naming the offending combination.
pub fn validate_options(options: &Options) -> Result<(), ConfigError> {
    if options.primary_location.is_some() && !options.multiple_locations {
        return Err(ConfigError::Validation(
            "primary_location is set but multiple_locations is off".to_string(),
        ));
    }

    if options.same_organization && !options.multiple_locations {
        return Err(ConfigError::Validation(
            "same_organization requires multiple_locations".to_string(),
        ));
    }

    if (options.shared_business_info || options.shared_opening_hours) && !options.same_organization {
        return Err(ConfigError::Validation(
            "shared business info / opening hours require same_organization".to_string(),
        ));
    }

    if options.location_label_singular.trim().is_empty()
        || options.location_label_plural.trim().is_empty()
    {
        return Err(ConfigError::Validation(
            "location labels must be non-empty".to_string(),
        ));
    }

    Ok(())
}
