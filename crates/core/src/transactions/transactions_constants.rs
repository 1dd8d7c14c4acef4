/// Transaction types
///
/// Each constant represents one of the supported ledger entry categories.

/// Purchase of an asset. Decreases cash and opens a new lot.
pub const TRANSACTION_TYPE_BUY: &str = "BUY";

/// Disposal of an asset. Increases cash and consumes open lots.
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

/// Cash dividend. The cash amount is carried in the `quantity` field with
/// `pricePerUnit = 1` (the backend expects the same convention).
pub const TRANSACTION_TYPE_DIVIDEND: &str = "DIVIDEND";

/// Stock split or reverse split. `quantity` carries the new ratio units and
/// `pricePerUnit` the old ratio units; total cost basis is unchanged.
pub const TRANSACTION_TYPE_SPLIT: &str = "SPLIT";

/// Bonus issue. `quantity` carries the new ratio units and `pricePerUnit`
/// the held ratio units; bonus shares open a zero-cost lot.
pub const TRANSACTION_TYPE_BONUS: &str = "BONUS";

/// Merger into another asset. `quantity` carries the conversion ratio and
/// `details.newAssetTicker` names the surviving asset. Cost basis carries
/// over to the new asset on the backend.
pub const TRANSACTION_TYPE_MERGER: &str = "MERGER";

/// Demerger / spin-off. `quantity` carries the entitlement ratio and
/// `details.costAllocationPercent` the share of original cost basis that
/// moves to the new asset.
pub const TRANSACTION_TYPE_DEMERGER: &str = "DEMERGER";

/// Ticker rename. Quantity and price are placeholders; holding period and
/// cost basis pass through unchanged.
pub const TRANSACTION_TYPE_RENAME: &str = "RENAME";

/// Cash contribution into the portfolio. Increases cash.
pub const TRANSACTION_TYPE_CONTRIBUTION: &str = "CONTRIBUTION";

/// Bond coupon payment. Same cash-in-quantity convention as dividends.
pub const TRANSACTION_TYPE_COUPON: &str = "COUPON";

/// Interest credited on idle cash. Increases cash.
pub const TRANSACTION_TYPE_INTEREST_CREDIT: &str = "INTEREST_CREDIT";

/// Types that open or adjust lots in the per-asset inventory
pub const LOT_AFFECTING_TRANSACTION_TYPES: [&str; 5] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_SPLIT,
    TRANSACTION_TYPE_BONUS,
    TRANSACTION_TYPE_MERGER,
];

/// Types whose `quantity` field carries a cash amount
pub const CASH_AMOUNT_TRANSACTION_TYPES: [&str; 4] = [
    TRANSACTION_TYPE_DIVIDEND,
    TRANSACTION_TYPE_CONTRIBUTION,
    TRANSACTION_TYPE_COUPON,
    TRANSACTION_TYPE_INTEREST_CREDIT,
];

/// `details` key carrying the historical FX rate for cross-currency legs
pub const DETAILS_KEY_FX_RATE: &str = "fxRate";

/// `details` key naming the new asset for MERGER/DEMERGER/RENAME
pub const DETAILS_KEY_NEW_ASSET_TICKER: &str = "newAssetTicker";

/// `details` key carrying the pre-resolved id of the new asset
pub const DETAILS_KEY_NEW_ASSET_ID: &str = "newAssetId";

/// `details` key carrying the demerger cost allocation percentage
pub const DETAILS_KEY_COST_ALLOCATION_PERCENT: &str = "costAllocationPercent";

/// `details` key carrying an explicit lot allocation on a SELL
pub const DETAILS_KEY_LINKS: &str = "links";
