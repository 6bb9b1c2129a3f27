use std::fs;

use divscan_ingest::{DatasetLoader, DatasetSource, DirectorySource, IngestError, Result};
use divscan_model::{Category, StockRecord};
use tempfile::TempDir;

const HEADER: &str = "代號,名稱,日期,股價,漲跌價,漲跌幅,股利年度,發放頻率,現金股利,股票股利,合計股利,除息參考價,除息殖利率,除權參考價,除權殖利率,合計殖利率,除息日,除權日,發放日";

fn row(code: &str, cash: f64, total_yield: f64) -> String {
    format!("{code},name-{code},01/02,30.00,+0.1,+0.3%,2024,年,{cash},0,{cash},,,,,{total_yield},2024/07/01,,2024/08/01")
}

fn keep_all(_: Category, records: Vec<StockRecord>) -> Vec<StockRecord> {
    records
}

#[test]
fn loads_each_category_file_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ETF.csv"),
        format!("{HEADER}\n{}\n{}\n", row("0050", 2.0, 6.2), row("00679B", 1.5, 7.0)),
    )
    .unwrap();
    fs::write(
        dir.path().join("水泥工業.csv"),
        format!("{HEADER}\n{}\n", row("1101", 1.0, 4.1)),
    )
    .unwrap();

    let loader = DatasetLoader::new(DirectorySource::new(dir.path()).unwrap());
    let (dataset, report) = loader.load(&[Category::Cement, Category::Food, Category::Etf], keep_all);

    assert_eq!(dataset.count(Category::Etf), 2);
    assert_eq!(dataset.count(Category::Cement), 1);
    assert_eq!(dataset.count(Category::Food), 0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, Category::Food);
    assert!(report.failures[0].1.contains("食品工業.csv"));
}

#[test]
fn records_keep_source_order() {
    let dir = TempDir::new().unwrap();
    let rows: Vec<String> = ["2882", "2881", "2886", "2884"]
        .iter()
        .map(|code| row(code, 2.0, 5.5))
        .collect();
    fs::write(
        dir.path().join("金控業.csv"),
        format!("{HEADER}\n{}\n", rows.join("\n")),
    )
    .unwrap();

    let loader = DatasetLoader::new(DirectorySource::new(dir.path()).unwrap());
    let (dataset, _) = loader.load(&[Category::FinancialHolding], keep_all);
    let codes: Vec<&str> = dataset
        .records(Category::FinancialHolding)
        .iter()
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(codes, vec!["2882", "2881", "2886", "2884"]);
}

/// Fails every other category, to check the loop never stops early.
struct FlakySource;

impl DatasetSource for FlakySource {
    fn fetch(&self, category: Category) -> Result<String> {
        if (category as usize) % 2 == 0 {
            Err(IngestError::HttpStatus {
                url: self.location(category),
                status: 404,
            })
        } else {
            Ok(format!("{HEADER}\n{}", row("9999", 1.0, 9.0)))
        }
    }

    fn location(&self, category: Category) -> String {
        format!("https://example.invalid/{}", category.url_path())
    }
}

#[test]
fn failures_do_not_abort_remaining_categories() {
    let loader = DatasetLoader::new(FlakySource);
    let (dataset, report) = loader.load(&Category::ALL, keep_all);

    assert_eq!(report.failures.len(), 19);
    for category in Category::ALL {
        assert!(dataset.contains(category));
        let expected = if (category as usize) % 2 == 0 { 0 } else { 1 };
        assert_eq!(dataset.count(category), expected, "{category}");
    }
}

#[test]
fn load_result_is_independent_of_request_order() {
    let forward = Category::ALL;
    let mut backward = Category::ALL;
    backward.reverse();

    let loader = DatasetLoader::new(FlakySource);
    let (first, _) = loader.load(&forward, keep_all);
    let (second, _) = loader.load(&backward, keep_all);
    assert_eq!(first, second);
}
