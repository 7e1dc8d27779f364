//! The node builders, one module per node shape.

pub mod address;
pub mod list;
pub mod logo;
pub mod organization;

pub use address::AddressPiece;
pub use list::LocationListPiece;
pub use logo::{resolve_logo_url, LogoPiece};
pub use organization::{OrganizationFilter, OrganizationPiece};
