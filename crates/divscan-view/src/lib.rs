//! Dividend screening and presentation.
//!
//! Everything between a loaded [`Dataset`](divscan_ingest::Dataset) and a
//! front-end lives here:
//!
//! - **Filters**: [`load_filter`] and [`render_filter`], the two fixed stages
//! - **Sorting**: [`SortSpec`] and [`sort_records`], stable in both directions
//! - **State**: [`ViewState`] with pure [`select_category`] / [`apply_sort`]
//! - **Rendering**: [`render`] projects the selected category to [`ViewRow`]s
//! - **Reports**: the cross-industry high-yield CSV and the meeting-gift
//!   cross-reference
//!
//! # Example
//!
//! ```ignore
//! use divscan_model::{Category, SortField};
//! use divscan_view::{ViewState, apply_sort, render, select_category};
//!
//! let state = select_category(ViewState::default(), Category::Etf);
//! let state = apply_sort(state, SortField::Price);
//! let view = render(&state, &dataset);
//! println!("{} stocks", view.count());
//! ```

mod error;
mod export;
mod filter;
mod gifts;
mod render;
mod sort;
mod state;

// === Error Types ===
pub use error::{Result, ViewError};

// === Filters ===
pub use filter::{
    BOND_ETF_SUFFIX, YIELD_THRESHOLD, has_cash_dividend, is_bond_etf, load_filter,
    meets_yield_threshold, render_filter,
};

// === Sorting and State ===
pub use sort::{SortSpec, collate, compare_field, sort_records};
pub use state::{ViewState, apply_sort, select_category};

// === Rendering ===
pub use render::{DETAIL_URL_BASE, RenderedView, ViewRow, YieldTier, detail_url, project, render};

// === Reports ===
pub use export::{
    DEFAULT_DIVIDEND_BLACKLIST, ExportOptions, HighYieldRow, collect_high_yield,
    write_high_yield, write_high_yield_file,
};
pub use gifts::{
    GiftEntry, GiftMatch, match_gifts, read_gift_file, read_gift_list, write_gift_matches,
    write_gift_matches_file,
};
