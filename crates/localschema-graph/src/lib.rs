//! Schema graph assembly for local-business structured data.
//!
//! For a given page render, a set of collaborating node builders decides
//! which JSON-LD nodes (Organization, `PostalAddress`,
//! `OpeningHoursSpecification`, logo `ImageObject`, `ItemList`) to emit and
//! how they reference each other by identifier. Single-location,
//! one-organization and independent-branches configurations change that
//! topology; every mode decision lives in [`Topology`] so the builders can
//! never disagree.
//!
//! Nodes reference each other exclusively by `{"@id": …}` pointers built
//! from the fixed fragment set in [`fragments`]; a node that cannot be
//! produced is simply absent, never an error.

pub mod assembler;
pub mod context;
pub mod fragments;
pub mod hours;
pub mod piece;
pub mod pieces;
pub mod topology;

pub use assembler::{assemble, GraphAssembler};
pub use context::{PageKind, RenderContext, SiteRepresents};
pub use hours::{is_open_at, resolve_schedule, schedule_to_nodes, HoursSource, ScheduleEntry};
pub use piece::{
    DefaultImageNodeFactory, GraphPiece, GraphScope, ImageNodeFactory, NodeTransform, SchemaNode,
    Variant,
};
pub use topology::Topology;
