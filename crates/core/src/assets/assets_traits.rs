use async_trait::async_trait;

use crate::assets::assets_model::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for asset lookup and creation
/// (`GET/POST asset` on the backend).
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Ticker search; the backend matches by prefix/substring.
    async fn search_by_ticker(&self, query: &str) -> Result<Vec<Asset>>;

    /// Creates an asset that does not exist yet.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
}
