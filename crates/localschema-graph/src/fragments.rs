//! Node identifier fragments.
//!
//! The fragment set is fixed; every cross-reference between nodes goes
//! through [`fragment_id`] and [`id_ref`] so a referencing builder and the
//! referenced node can never disagree on the identifier.

use serde_json::Value;

/// Main organization's address node.
pub const MAIN_PLACE_ADDRESS: &str = "local-main-place-address";
/// Branch organization's address node.
pub const BRANCH_PLACE_ADDRESS: &str = "local-branch-place-address";
/// Branch organization node.
pub const BRANCH_ORGANIZATION: &str = "local-branch-organization";
/// Main organization's logo image node.
pub const MAIN_ORGANIZATION_LOGO: &str = "local-main-organization-logo";
/// Branch organization's logo image node.
pub const BRANCH_ORGANIZATION_LOGO: &str = "local-branch-organization-logo";
/// The location list node on archive pages.
pub const LIST: &str = "list";
/// The host framework's own Organization node.
pub const ORGANIZATION: &str = "organization";

/// Full node identifier: `<base_url>#<fragment>`.
#[must_use]
pub fn fragment_id(base_url: &str, fragment: &str) -> String {
    format!("{base_url}#{fragment}")
}

/// A `{"@id": "<id>"}` reference value.
#[must_use]
pub fn id_ref(id: &str) -> Value {
    serde_json::json!({ "@id": id })
}
