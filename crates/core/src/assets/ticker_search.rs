//! Debounced ticker search with cancel-on-supersede.

use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::assets::assets_model::Asset;
use crate::assets::assets_traits::AssetRepositoryTrait;
use crate::constants::SEARCH_DEBOUNCE_MS;

/// One search box worth of state: a debounce window plus a generation
/// counter so only the most recent keystroke's result may update the form.
///
/// Every call bumps the generation; a search finding itself superseded on
/// either side of an await returns `None` and its result is discarded. A
/// failed lookup degrades to an empty list rather than blocking the user.
pub struct TickerSearchSession {
    repository: Arc<dyn AssetRepositoryTrait>,
    generation: AtomicU64,
    debounce: Duration,
}

impl TickerSearchSession {
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self::with_debounce(repository, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    pub fn with_debounce(repository: Arc<dyn AssetRepositoryTrait>, debounce: Duration) -> Self {
        Self {
            repository,
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    /// Runs one debounced search. `None` means a newer keystroke superseded
    /// this one and nothing should change on screen.
    pub async fn search(&self, query: &str) -> Option<Vec<Asset>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return None;
        }

        let results = match self.repository.search_by_ticker(query).await {
            Ok(assets) => assets,
            Err(e) => {
                warn!("Ticker search for '{}' failed: {}. Returning empty result list", query, e);
                Vec::new()
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            return None;
        }
        Some(results)
    }
}
