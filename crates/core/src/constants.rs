/// Quantity threshold below which a lot is considered closed
pub const QUANTITY_THRESHOLD: &str = "0.00000001";

/// Days per year used for annualized-return (CAGR) calculations
pub const DAYS_PER_YEAR: &str = "365.25";

/// Debounce window for ticker search inputs, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
