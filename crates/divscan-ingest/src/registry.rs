//! Per-category dataset registry and its loader.

use std::collections::BTreeMap;
use std::time::Instant;

use divscan_model::{Category, StockRecord};
use tracing::{debug, info, info_span, warn};

use crate::csv::parse_records;
use crate::source::DatasetSource;

/// Filtered record sets keyed by category.
///
/// Built once by [`DatasetLoader::load`] and only ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    sets: BTreeMap<Category, Vec<StockRecord>>,
}

impl Dataset {
    /// Builds a dataset from pre-filtered record sets.
    pub fn from_sets(sets: BTreeMap<Category, Vec<StockRecord>>) -> Self {
        Self { sets }
    }

    /// Records stored for `category`, in source order. Empty when the
    /// category was never loaded.
    pub fn records(&self, category: Category) -> &[StockRecord] {
        self.sets.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of stored records for `category` (the category badge count).
    pub fn count(&self, category: Category) -> usize {
        self.records(category).len()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.sets.contains_key(&category)
    }

    /// Loaded categories with their records, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[StockRecord])> {
        self.sets
            .iter()
            .map(|(category, records)| (*category, records.as_slice()))
    }

    pub fn total_records(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }
}

/// Summary of one [`DatasetLoader::load`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Categories whose fetch failed, with the error message.
    pub failures: Vec<(Category, String)>,
}

/// Fetches, parses and filters every requested category.
pub struct DatasetLoader<S> {
    source: S,
}

impl<S: DatasetSource> DatasetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads `categories` one after another.
    ///
    /// `filter` narrows each parsed set before it is stored. A fetch error
    /// is logged and stores an empty set; it never stops the loop.
    pub fn load<F>(&self, categories: &[Category], filter: F) -> (Dataset, LoadReport)
    where
        F: Fn(Category, Vec<StockRecord>) -> Vec<StockRecord>,
    {
        let span = info_span!("load_dataset", categories = categories.len());
        let _guard = span.enter();
        let start = Instant::now();

        let mut sets = BTreeMap::new();
        let mut report = LoadReport::default();
        for &category in categories {
            let records = match self.source.fetch(category) {
                Ok(text) => {
                    let parsed = parse_records(&text);
                    let parsed_count = parsed.len();
                    let kept = filter(category, parsed);
                    debug!(
                        category = %category,
                        parsed = parsed_count,
                        kept = kept.len(),
                        "category loaded"
                    );
                    kept
                }
                Err(error) => {
                    warn!(
                        category = %category,
                        location = %self.source.location(category),
                        %error,
                        "failed to load category"
                    );
                    report.failures.push((category, error.to_string()));
                    Vec::new()
                }
            };
            sets.insert(category, records);
        }

        let dataset = Dataset::from_sets(sets);
        info!(
            categories = categories.len(),
            records = dataset.total_records(),
            failures = report.failures.len(),
            duration_ms = start.elapsed().as_millis(),
            "dataset load complete"
        );
        (dataset, report)
    }
}
