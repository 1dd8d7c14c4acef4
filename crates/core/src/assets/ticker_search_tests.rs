#[cfg(test)]
mod tests {
    use crate::assets::{Asset, AssetRepositoryTrait, NewAsset, TickerSearchSession};
    use crate::errors::{Error, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn asset(id: &str, ticker: &str) -> Asset {
        Asset {
            id: id.to_string(),
            ticker: ticker.to_string(),
            name: None,
            currency: "USD".to_string(),
        }
    }

    struct MockAssetRepository {
        results: Vec<Asset>,
        fail_search: bool,
        searches: AtomicUsize,
    }

    impl MockAssetRepository {
        fn with_results(results: Vec<Asset>) -> Self {
            Self {
                results,
                fail_search: false,
                searches: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                results: Vec::new(),
                fail_search: true,
                searches: AtomicUsize::new(0),
            }
        }

        fn search_count(&self) -> usize {
            self.searches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetRepositoryTrait for MockAssetRepository {
        async fn search_by_ticker(&self, query: &str) -> Result<Vec<Asset>> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            if self.fail_search {
                return Err(Error::Repository("search backend unavailable".to_string()));
            }
            Ok(self
                .results
                .iter()
                .filter(|a| a.ticker.starts_with(query))
                .cloned()
                .collect())
        }

        async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
            Ok(Asset {
                id: format!("created-{}", new_asset.ticker),
                ticker: new_asset.ticker,
                name: new_asset.name,
                currency: new_asset.currency,
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn a_lone_search_returns_its_results() {
        let repository = Arc::new(MockAssetRepository::with_results(vec![
            asset("1", "VTI"),
            asset("2", "VTIAX"),
        ]));
        let session = TickerSearchSession::new(repository);

        let results = session.search("VTI").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ticker, "VTI");
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_search_supersedes_an_in_flight_one() {
        let repository = Arc::new(MockAssetRepository::with_results(vec![
            asset("1", "VTI"),
            asset("2", "AAPL"),
        ]));
        let session = TickerSearchSession::new(repository);

        // Both start before either debounce window elapses; only the later
        // keystroke may update the form.
        let (stale, fresh) = tokio::join!(session.search("VT"), session.search("AAP"));

        assert_eq!(stale, None);
        let fresh = fresh.unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].ticker, "AAPL");
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_search_skips_the_backend_call() {
        let repository = Arc::new(MockAssetRepository::with_results(vec![asset("1", "VTI")]));
        let session = TickerSearchSession::new(repository.clone());

        tokio::join!(session.search("V"), session.search("VT"), session.search("VTI"));

        // The first two die inside the debounce window.
        assert_eq!(repository.search_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_lookup_degrades_to_an_empty_list() {
        let repository = Arc::new(MockAssetRepository::failing());
        let session = TickerSearchSession::new(repository);

        let results = session.search("VTI").await;
        assert_eq!(results, Some(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_searches_each_complete() {
        let repository = Arc::new(MockAssetRepository::with_results(vec![asset("1", "VTI")]));
        let session =
            TickerSearchSession::with_debounce(repository.clone(), Duration::from_millis(10));

        assert!(session.search("V").await.is_some());
        assert!(session.search("VT").await.is_some());
        assert_eq!(repository.search_count(), 2);
    }
}
