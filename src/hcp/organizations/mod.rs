//! Organization module

mod api;
mod models;
pub mod resolver;

pub use models::Organization;
pub use resolver::{resolve_organizations, OrgSource, ResolvedOrganizations};
