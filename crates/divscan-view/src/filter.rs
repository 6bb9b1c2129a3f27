//! Record filters.
//!
//! Two fixed stages run over each category. The load stage decides what is
//! stored in the [`Dataset`](divscan_ingest::Dataset) and what the category
//! badge counts; the render stage runs again on every view. Neither stage
//! is configurable.

use divscan_model::{Category, StockRecord};

/// Minimum total yield, in percentage points, for a stock to be kept.
pub const YIELD_THRESHOLD: f64 = 5.0;

/// Ticker suffix marking a bond ETF.
pub const BOND_ETF_SUFFIX: char = 'B';

pub fn meets_yield_threshold(record: &StockRecord) -> bool {
    record.total_yield >= YIELD_THRESHOLD
}

/// True for bond ETFs listed in the ETF category.
pub fn is_bond_etf(category: Category, record: &StockRecord) -> bool {
    category.is_etf() && record.code.ends_with(BOND_ETF_SUFFIX)
}

pub fn has_cash_dividend(record: &StockRecord) -> bool {
    record.cash_dividend > 0.0
}

/// Load stage: yield threshold, then bond-ETF exclusion.
pub fn load_filter(category: Category, records: Vec<StockRecord>) -> Vec<StockRecord> {
    records
        .into_iter()
        .filter(meets_yield_threshold)
        .filter(|record| !is_bond_etf(category, record))
        .collect()
}

/// Render stage: bond-ETF exclusion again, then zero-cash-dividend exclusion.
///
/// Keeps the relative order of `records`.
pub fn render_filter(category: Category, records: &[StockRecord]) -> Vec<&StockRecord> {
    records
        .iter()
        .filter(|record| !is_bond_etf(category, record))
        .filter(|record| has_cash_dividend(record))
        .collect()
}
