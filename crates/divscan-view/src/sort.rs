//! Stable, direction-aware record ordering.

use std::borrow::Borrow;
use std::cmp::Ordering;

use divscan_model::{FieldValue, SortField, StockRecord};

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortSpec {
    /// Total yield, highest first.
    fn default() -> Self {
        Self {
            field: SortField::TotalYield,
            ascending: false,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Header-click rule: the active field flips direction, any other field
    /// becomes active in descending order.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                ascending: !self.ascending,
            }
        } else {
            Self {
                field,
                ascending: false,
            }
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(&self) -> char {
        if self.ascending { '▲' } else { '▼' }
    }
}

/// Returns a sorted copy of `records`; the input is left untouched.
///
/// The sort is stable in both directions: descending order swaps the
/// operands of the comparison, so records with equal keys keep their
/// relative order.
pub fn sort_records<R>(records: &[R], spec: SortSpec) -> Vec<R>
where
    R: Borrow<StockRecord> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let (left, right) = if spec.ascending { (a, b) } else { (b, a) };
        compare_field(
            Borrow::<StockRecord>::borrow(left),
            Borrow::<StockRecord>::borrow(right),
            spec.field,
        )
    });
    sorted
}

/// Ascending comparison of one attribute of two records.
///
/// Two numbers compare numerically; anything else compares as collated text.
pub fn compare_field(a: &StockRecord, b: &StockRecord, field: SortField) -> Ordering {
    match (a.field(field), b.field(field)) {
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (x, y) => collate(&as_text(x), &as_text(y)),
    }
}

fn as_text(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Number(number) => number.to_string(),
        FieldValue::Text(text) => text.to_string(),
    }
}

/// Approximate locale-style string collation.
///
/// Strings are compared case-insensitively first (Unicode lowercase
/// folding), with raw code point order breaking ties so that the ordering
/// stays total. No locale tables are consulted: Chinese names order by code
/// point rather than stroke count, full-width Latin letters sort after every
/// CJK ideograph, and punctuation keeps its code point position.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
