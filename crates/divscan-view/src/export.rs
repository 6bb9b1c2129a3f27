//! Cross-industry high-yield report.
//!
//! Collects every qualifying stock of every loaded category into one list,
//! highest total yield first, and writes it as CSV.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use divscan_ingest::Dataset;
use divscan_model::{Category, StockRecord};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::error::{Result, ViewError};
use crate::filter::{has_cash_dividend, is_bond_etf, meets_yield_threshold};

/// Codes excluded from the report because they skipped last year's payout.
pub const DEFAULT_DIVIDEND_BLACKLIST: &[&str] = &["1806"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub blacklist: BTreeSet<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            blacklist: DEFAULT_DIVIDEND_BLACKLIST
                .iter()
                .map(|code| (*code).to_string())
                .collect(),
        }
    }
}

impl ExportOptions {
    /// Replaces the blacklist.
    #[must_use]
    pub fn with_blacklist<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = codes.into_iter().map(Into::into).collect();
        self
    }
}

/// One row of the high-yield report. Column names follow the published report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighYieldRow {
    #[serde(rename = "產業")]
    pub industry: Category,
    #[serde(rename = "股票代號")]
    pub code: String,
    #[serde(rename = "股票名稱")]
    pub name: String,
    #[serde(rename = "股價", serialize_with = "two_decimals")]
    pub price: f64,
    #[serde(rename = "發放頻率")]
    pub frequency: String,
    #[serde(rename = "現金股利", serialize_with = "two_decimals")]
    pub cash_dividend: f64,
    #[serde(rename = "股票股利", serialize_with = "two_decimals")]
    pub stock_dividend: f64,
    #[serde(rename = "合計股利", serialize_with = "two_decimals")]
    pub total_dividend: f64,
    #[serde(rename = "殖利率(%)", serialize_with = "two_decimals")]
    pub total_yield: f64,
    #[serde(rename = "除息日")]
    pub ex_dividend_date: String,
    #[serde(rename = "發放日")]
    pub payment_date: String,
}

impl HighYieldRow {
    fn new(industry: Category, record: &StockRecord) -> Self {
        Self {
            industry,
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
        }
    }
}

/// Leading byte-order mark, so spreadsheet tools detect UTF-8.
pub(crate) const UTF8_BOM: &[u8] = "\u{feff}".as_bytes();

/// Serializes a number with exactly two decimals.
pub(crate) fn two_decimals<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Gathers qualifying stocks across all loaded categories.
///
/// A stock qualifies with a total yield of at least 5%, a positive cash
/// dividend, a code outside the blacklist, and (in the ETF category) a
/// non-bond ticker. The result is stably sorted by total yield, highest
/// first; ties keep category order, then source order.
pub fn collect_high_yield(dataset: &Dataset, options: &ExportOptions) -> Vec<HighYieldRow> {
    let mut rows: Vec<HighYieldRow> = dataset
        .iter()
        .flat_map(|(category, records)| {
            records
                .iter()
                .filter(move |record| {
                    meets_yield_threshold(record)
                        && has_cash_dividend(record)
                        && !options.blacklist.contains(&record.code)
                        && !is_bond_etf(category, record)
                })
                .map(move |record| HighYieldRow::new(category, record))
        })
        .collect();
    rows.sort_by(|a, b| b.total_yield.total_cmp(&a.total_yield));
    rows
}

/// Writes `rows` as BOM-prefixed CSV with a header line.
pub fn write_high_yield<W: Write>(rows: &[HighYieldRow], mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM).map_err(csv::Error::from)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv_writer.write_record(HIGH_YIELD_HEADER)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `rows` to `path`, replacing any existing file.
pub fn write_high_yield_file(rows: &[HighYieldRow], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ViewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_high_yield(rows, file)?;
    info!(path = %path.display(), rows = rows.len(), "high-yield report written");
    Ok(())
}

const HIGH_YIELD_HEADER: [&str; 11] = [
    "產業",
    "股票代號",
    "股票名稱",
    "股價",
    "發放頻率",
    "現金股利",
    "股票股利",
    "合計股利",
    "殖利率(%)",
    "除息日",
    "發放日",
];
