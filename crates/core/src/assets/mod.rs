//! Assets module - ticker lookup, lazy creation, and debounced search.

mod assets_model;
mod assets_service;
mod assets_traits;
mod ticker_search;

#[cfg(test)]
mod ticker_search_tests;

pub use assets_model::{Asset, NewAsset};
pub use assets_service::AssetResolver;
pub use assets_traits::AssetRepositoryTrait;
pub use ticker_search::TickerSearchSession;
