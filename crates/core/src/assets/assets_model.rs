//! Asset domain models.

use serde::{Deserialize, Serialize};

/// An asset known to the backend, resolved via ticker lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub ticker: String,
    pub name: Option<String>,
    pub currency: String,
}

/// Input model for lazily creating an asset that a corporate action
/// references but the backend does not know yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub ticker: String,
    pub name: Option<String>,
    pub currency: String,
}
