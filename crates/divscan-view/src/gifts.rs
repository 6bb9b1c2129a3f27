//! Shareholder-meeting gift cross-reference.
//!
//! Joins a gift list (codes of companies handing out meeting souvenirs)
//! with the high-yield report, so stocks offering both show up together.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use divscan_model::Category;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ViewError};
use crate::export::{HighYieldRow, UTF8_BOM, two_decimals};

/// One gift-list entry. Column names follow the published gift list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GiftEntry {
    #[serde(rename = "股票代號")]
    pub code: String,
    #[serde(rename = "股票名稱")]
    pub name: String,
    #[serde(rename = "紀念品")]
    pub gift: String,
    #[serde(rename = "股價")]
    pub price: String,
    #[serde(rename = "最後買進日")]
    pub last_buy_date: String,
}

/// A high-yield stock that also hands out a meeting gift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftMatch {
    #[serde(rename = "股票代號")]
    pub code: String,
    #[serde(rename = "股票名稱")]
    pub name: String,
    #[serde(rename = "產業")]
    pub industry: Category,
    #[serde(rename = "股價", serialize_with = "two_decimals")]
    pub price: f64,
    #[serde(rename = "紀念品")]
    pub gift: String,
    #[serde(rename = "最後買進日")]
    pub last_buy_date: String,
    #[serde(rename = "現金股利", serialize_with = "two_decimals")]
    pub cash_dividend: f64,
    #[serde(rename = "合計股利", serialize_with = "two_decimals")]
    pub total_dividend: f64,
    #[serde(rename = "殖利率(%)", serialize_with = "two_decimals")]
    pub total_yield: f64,
    #[serde(rename = "除息日")]
    pub ex_dividend_date: String,
    #[serde(rename = "發放日")]
    pub payment_date: String,
}

/// Reads a gift list. A leading UTF-8 BOM is ignored and values are trimmed.
pub fn read_gift_list<R: Read>(mut reader: R) -> Result<Vec<GiftEntry>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(csv::Error::from)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let entries = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<GiftEntry>, csv::Error>>()?;
    debug!(entries = entries.len(), "gift list parsed");
    Ok(entries)
}

pub fn read_gift_file(path: &Path) -> Result<Vec<GiftEntry>> {
    let file = File::open(path).map_err(|source| ViewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_gift_list(file)
}

/// Joins `gifts` with `high_yield` by stock code.
///
/// When a code repeats, the last entry of each list wins. Matches are
/// ordered by total yield, highest first, with ties in code order.
pub fn match_gifts(gifts: &[GiftEntry], high_yield: &[HighYieldRow]) -> Vec<GiftMatch> {
    let gifts_by_code: BTreeMap<&str, &GiftEntry> = gifts
        .iter()
        .map(|entry| (entry.code.as_str(), entry))
        .collect();
    let yields_by_code: BTreeMap<&str, &HighYieldRow> = high_yield
        .iter()
        .map(|row| (row.code.as_str(), row))
        .collect();

    let mut matches: Vec<GiftMatch> = gifts_by_code
        .iter()
        .filter_map(|(code, gift)| {
            let row = yields_by_code.get(code)?;
            Some(GiftMatch {
                code: (*code).to_string(),
                name: gift.name.clone(),
                industry: row.industry,
                price: row.price,
                gift: gift.gift.clone(),
                last_buy_date: gift.last_buy_date.clone(),
                cash_dividend: row.cash_dividend,
                total_dividend: row.total_dividend,
                total_yield: row.total_yield,
                ex_dividend_date: row.ex_dividend_date.clone(),
                payment_date: row.payment_date.clone(),
            })
        })
        .collect();
    matches.sort_by(|a, b| b.total_yield.total_cmp(&a.total_yield));
    matches
}

/// Writes gift matches as BOM-prefixed CSV with a header line.
pub fn write_gift_matches<W: Write>(matches: &[GiftMatch], mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM).map_err(csv::Error::from)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    if matches.is_empty() {
        csv_writer.write_record(GIFT_MATCH_HEADER)?;
    }
    for row in matches {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_gift_matches_file(matches: &[GiftMatch], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ViewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_gift_matches(matches, file)?;
    info!(path = %path.display(), rows = matches.len(), "gift cross-reference written");
    Ok(())
}

const GIFT_MATCH_HEADER: [&str; 11] = [
    "股票代號",
    "股票名稱",
    "產業",
    "股價",
    "紀念品",
    "最後買進日",
    "現金股利",
    "合計股利",
    "殖利率(%)",
    "除息日",
    "發放日",
];

#[cfg(test)]
mod tests {
    use super::*;

    const GIFT_LIST: &str = "\u{feff}股票代號,股票名稱,紀念品,股價,最後買進日\n2884 ,玉山金,環保袋,28.5,2025/04/10\n1101,台泥,保溫杯,33,2025/04/20\n2603,長榮,餐具組,190,2025/04/22\n";

    fn row(code: &str, total_yield: f64) -> HighYieldRow {
        HighYieldRow {
            industry: Category::FinancialHolding,
            code: code.to_string(),
            name: format!("n{code}"),
            price: 10.0,
            frequency: String::new(),
            cash_dividend: 1.0,
            stock_dividend: 0.0,
            total_dividend: 1.0,
            total_yield,
            ex_dividend_date: String::new(),
            payment_date: String::new(),
        }
    }

    #[test]
    fn reads_gift_list_with_bom_and_padding() {
        let entries = read_gift_list(GIFT_LIST.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].code, "2884");
        assert_eq!(entries[0].gift, "環保袋");
        assert_eq!(entries[2].last_buy_date, "2025/04/22");
    }

    #[test]
    fn missing_column_is_an_error() {
        let result = read_gift_list("股票代號,股票名稱\n2884,玉山金\n".as_bytes());
        assert!(matches!(result, Err(ViewError::Csv(_))));
    }

    #[test]
    fn joins_on_code_and_orders_by_yield() {
        let gifts = read_gift_list(GIFT_LIST.as_bytes()).unwrap();
        let high_yield = vec![row("2884", 5.2), row("2603", 9.1), row("2330", 7.0)];
        let matches = match_gifts(&gifts, &high_yield);
        let codes: Vec<&str> = matches.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["2603", "2884"]);
        assert_eq!(matches[1].name, "玉山金");
        assert_eq!(matches[1].gift, "環保袋");
    }

    #[test]
    fn empty_cross_reference_keeps_bom_and_header() {
        let mut out = Vec::new();
        write_gift_matches(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\u{feff}股票代號,股票名稱,產業,股價,紀念品,最後買進日,現金股利,合計股利,殖利率(%),除息日,發放日\n"
        );
    }

    #[test]
    fn equal_yields_fall_back_to_code_order() {
        let gifts = read_gift_list(GIFT_LIST.as_bytes()).unwrap();
        let high_yield = vec![row("2884", 6.0), row("1101", 6.0)];
        let matches = match_gifts(&gifts, &high_yield);
        let codes: Vec<&str> = matches.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["1101", "2884"]);
    }
}
