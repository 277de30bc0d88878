//! Organization data models

use serde::Deserialize;

/// Organization data from TFE API
///
/// TFE uses the organization name as the JSON:API `id`; attributes are not read.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
}
