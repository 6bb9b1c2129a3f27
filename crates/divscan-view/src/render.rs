//! Presentation-neutral projection of the selected category.
//!
//! [`render`] is pure: the same state and dataset always give the same
//! view. Front-ends format [`ViewRow`]s however they like.

use std::borrow::Borrow;

use divscan_ingest::Dataset;
use divscan_model::{Category, StockRecord};

use crate::filter::render_filter;
use crate::sort::{SortSpec, sort_records};
use crate::state::ViewState;

/// Stock detail page, parameterized by ticker.
pub const DETAIL_URL_BASE: &str = "https://goodinfo.tw/tw/StockDetail.asp?STOCK_ID=";

/// Yield band used to highlight the yield column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldTier {
    /// 8% and above.
    High,
    /// 6% up to 8%.
    Medium,
    Low,
}

impl YieldTier {
    pub fn of(total_yield: f64) -> Self {
        if total_yield >= 8.0 {
            YieldTier::High
        } else if total_yield >= 6.0 {
            YieldTier::Medium
        } else {
            YieldTier::Low
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub frequency: String,
    pub cash_dividend: f64,
    pub stock_dividend: f64,
    pub total_dividend: f64,
    pub total_yield: f64,
    pub ex_dividend_date: String,
    pub payment_date: String,
    pub yield_tier: YieldTier,
    /// Stock dividends are rare enough to be emphasised.
    pub has_stock_dividend: bool,
    pub detail_url: String,
}

impl ViewRow {
    pub fn from_record(record: &StockRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            price: record.price,
            frequency: record.frequency.clone(),
            cash_dividend: record.cash_dividend,
            stock_dividend: record.stock_dividend,
            total_dividend: record.total_dividend,
            total_yield: record.total_yield,
            ex_dividend_date: record.ex_dividend_date.clone(),
            payment_date: record.payment_date.clone(),
            yield_tier: YieldTier::of(record.total_yield),
            has_stock_dividend: record.stock_dividend > 0.0,
            detail_url: detail_url(&record.code),
        }
    }
}

pub fn detail_url(code: &str) -> String {
    format!("{DETAIL_URL_BASE}{code}")
}

/// Sorts `records` and maps them to rows.
pub fn project<R>(records: &[R], spec: SortSpec) -> Vec<ViewRow>
where
    R: Borrow<StockRecord> + Clone,
{
    sort_records(records, spec)
        .iter()
        .map(|record| ViewRow::from_record(Borrow::<StockRecord>::borrow(record)))
        .collect()
}

/// What the front-end should show.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    /// No category has been selected yet.
    NoSelection,
    /// The selected category has no qualifying stocks.
    Empty { category: Category, sort: SortSpec },
    Table {
        category: Category,
        sort: SortSpec,
        rows: Vec<ViewRow>,
    },
}

impl RenderedView {
    pub fn rows(&self) -> &[ViewRow] {
        match self {
            RenderedView::Table { rows, .. } => rows,
            RenderedView::NoSelection | RenderedView::Empty { .. } => &[],
        }
    }

    /// Number of stocks shown (the view's own count, which may be lower
    /// than the category badge).
    pub fn count(&self) -> usize {
        self.rows().len()
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            RenderedView::NoSelection => None,
            RenderedView::Empty { category, .. } | RenderedView::Table { category, .. } => {
                Some(*category)
            }
        }
    }
}

/// Builds the view for `state` over `dataset`.
///
/// Stored records pass through the render-stage filter before sorting.
pub fn render(state: &ViewState, dataset: &Dataset) -> RenderedView {
    let Some(category) = state.selected_category else {
        return RenderedView::NoSelection;
    };
    let visible = render_filter(category, dataset.records(category));
    if visible.is_empty() {
        return RenderedView::Empty {
            category,
            sort: state.sort,
        };
    }
    RenderedView::Table {
        category,
        sort: state.sort,
        rows: project(&visible, state.sort),
    }
}
