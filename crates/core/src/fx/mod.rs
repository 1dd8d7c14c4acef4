//! FX (Foreign Exchange) module - historical rate resolution for
//! cross-currency transactions.

mod fx_errors;
mod fx_model;
mod fx_resolver;
mod fx_traits;


pub use fx_errors::FxError;
pub use fx_model::{FxKey, FxRateSource, FxResolution};
pub use fx_resolver::FxConversionResolver;
pub use fx_traits::FxRateProviderTrait;
