//! Domain types for the local-business structured-data plugin: location
//! records, the provider interface, global options and the business-type
//! taxonomy. The graph assembly itself lives in `localschema-graph`.

pub mod business_type;
mod error;
pub mod location;
pub mod options;
pub mod repository;
pub mod schedule;

pub use error::ConfigError;
pub use location::{is_filled, LocationHours, LocationRecord, PublishStatus};
pub use options::{load_options, validate_options, Options};
pub use repository::{InMemoryLocationRepository, LocationFilter, LocationRepository};
pub use schedule::{Day, DayHours, WeekSchedule};
