//! Data model for the dividend yield dashboard.
//!
//! - [`Category`]: the fixed industry catalog, including the synthetic ETF group
//! - [`StockRecord`]: one parsed row of a per-industry dividend file
//! - [`SortField`] / [`FieldValue`]: orderable attributes of a record

pub mod category;
pub mod error;
pub mod record;

pub use category::Category;
pub use error::{ModelError, Result};
pub use record::{FieldValue, SortField, StockRecord};
