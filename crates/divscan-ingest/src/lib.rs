//! Dividend dataset ingestion.
//!
//! This crate turns per-industry dividend CSV files into typed
//! [`StockRecord`](divscan_model::StockRecord) sets.
//!
//! # Features
//!
//! - **Tokenizing**: [`tokenize_line`] splits a line, honoring quoted delimiters
//! - **Parsing**: [`parse_records`] maps rows by fixed column position
//! - **Sources**: [`DirectorySource`], [`MemorySource`], and `HttpSource`
//!   (with the `http` feature)
//! - **Loading**: [`DatasetLoader`] builds a [`Dataset`] one category at a time
//!
//! # Example
//!
//! ```ignore
//! use divscan_ingest::{DatasetLoader, DirectorySource};
//! use divscan_model::Category;
//!
//! let loader = DatasetLoader::new(DirectorySource::new("data")?);
//! let (dataset, report) = loader.load(&Category::ALL, |_, records| records);
//! println!("ETF: {} stocks", dataset.count(Category::Etf));
//! ```

mod csv;
mod error;
mod registry;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{MIN_FIELDS, parse_number_or_zero, parse_record, parse_records, tokenize_line};

// === Sources ===
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{DatasetSource, DirectorySource, MemorySource};

// === Registry ===
pub use registry::{Dataset, DatasetLoader, LoadReport};
