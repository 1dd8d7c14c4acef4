//! Asset resolution for corporate-action targets.

use log::debug;
use std::sync::Arc;

use crate::assets::assets_model::{Asset, NewAsset};
use crate::assets::assets_traits::AssetRepositoryTrait;
use crate::errors::{Error, Result};

/// Resolves the new-asset reference of a MERGER/DEMERGER/RENAME intent
/// before synthesis runs.
#[derive(Clone)]
pub struct AssetResolver {
    repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetResolver {
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Looks the ticker up; exact matches win. When nothing matches and
    /// `create_if_missing` is set, the asset is created lazily. Returns an
    /// actionable error otherwise, so the caller never submits a batch with
    /// an unresolved reference.
    pub async fn resolve_ticker(
        &self,
        ticker: &str,
        currency: &str,
        create_if_missing: bool,
    ) -> Result<Asset> {
        let matches = self.repository.search_by_ticker(ticker).await?;
        if let Some(asset) = matches.into_iter().find(|a| a.ticker == ticker) {
            return Ok(asset);
        }

        if !create_if_missing {
            return Err(Error::Asset(format!(
                "No asset found for ticker '{}'; create it before submitting the corporate action",
                ticker
            )));
        }

        debug!("Creating asset for unresolved ticker {}", ticker);
        self.repository
            .create(NewAsset {
                ticker: ticker.to_string(),
                name: None,
                currency: currency.to_string(),
            })
            .await
    }
}
