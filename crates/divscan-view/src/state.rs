//! User-controlled view state.
//!
//! State is a plain value: every interaction takes the current state and
//! returns the next one. Nothing here is persisted.

use divscan_model::{Category, SortField};

use crate::sort::SortSpec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// `None` until the first category selection.
    pub selected_category: Option<Category>,
    pub sort: SortSpec,
}

/// Selects `category`, keeping the current sort.
#[must_use]
pub fn select_category(state: ViewState, category: Category) -> ViewState {
    ViewState {
        selected_category: Some(category),
        ..state
    }
}

/// Applies a click on the `field` column header.
#[must_use]
pub fn apply_sort(state: ViewState, field: SortField) -> ViewState {
    ViewState {
        sort: state.sort.toggle(field),
        ..state
    }
}
