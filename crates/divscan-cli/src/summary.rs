use chrono::NaiveDate;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use divscan_ingest::LoadReport;
use divscan_model::{Category, SortField};
use divscan_view::{RenderedView, SortSpec, ViewRow, YieldTier};

use crate::commands::{ExportOutcome, GiftOutcome};

/// Shown instead of an empty stock table.
pub const NO_STOCKS_MESSAGE: &str = "沒有殖利率 ≥ 5% 的股票";

/// Stock table columns, in display order.
const VIEW_COLUMNS: [(&str, SortField); 10] = [
    ("代號", SortField::Code),
    ("名稱", SortField::Name),
    ("股價", SortField::Price),
    ("發放頻率", SortField::Frequency),
    ("現金股利", SortField::CashDividend),
    ("股票股利", SortField::StockDividend),
    ("合計股利", SortField::TotalDividend),
    ("殖利率", SortField::TotalYield),
    ("除息日", SortField::ExDividendDate),
    ("發放日", SortField::PaymentDate),
];

pub fn print_load_failures(report: &LoadReport) {
    if report.failures.is_empty() {
        return;
    }
    eprintln!("Unavailable categories (shown empty):");
    for (category, message) in &report.failures {
        eprintln!("- {category}: {message}");
    }
}

pub fn print_categories(counts: &[(Category, usize)]) {
    println!("{}", categories_table(counts));
}

pub fn categories_table(counts: &[(Category, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("類股"), header_cell("檔數")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in counts {
        table.add_row(vec![Cell::new(category.as_str()), count_cell(*count)]);
    }
    table
}

pub fn print_view(view: &RenderedView, report_date: NaiveDate) {
    let Some(category) = view.category() else {
        println!("No category selected.");
        return;
    };
    println!("{category} ({} stocks)", view.count());
    println!("Updated: {}", report_date.format("%Y/%m/%d"));
    match view {
        RenderedView::Table { rows, sort, .. } => println!("{}", view_table(rows, *sort)),
        RenderedView::Empty { .. } | RenderedView::NoSelection => {
            println!("{NO_STOCKS_MESSAGE}");
        }
    }
}

pub fn view_table(rows: &[ViewRow], sort: SortSpec) -> Table {
    let mut table = Table::new();
    table.set_header(
        VIEW_COLUMNS
            .iter()
            .map(|(label, field)| sort_header_cell(label, *field, sort))
            .collect::<Vec<_>>(),
    );
    apply_summary_table_style(&mut table);
    for index in [2, 4, 5, 6, 7] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.code).fg(Color::Blue),
            Cell::new(&row.name),
            Cell::new(format!("{:.2}", row.price)),
            Cell::new(&row.frequency),
            Cell::new(format!("{:.2}", row.cash_dividend)),
            stock_dividend_cell(row),
            Cell::new(format!("{:.2}", row.total_dividend)),
            yield_cell(row.total_yield, row.yield_tier),
            Cell::new(&row.ex_dividend_date),
            Cell::new(&row.payment_date),
        ]);
    }
    table
}

pub fn print_export(outcome: &ExportOutcome) {
    println!(
        "High-yield report: {} stocks -> {}",
        outcome.rows.len(),
        outcome.path.display()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("產業"),
        header_cell("代號"),
        header_cell("名稱"),
        header_cell("殖利率"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &outcome.rows {
        table.add_row(vec![
            Cell::new(row.industry.as_str()),
            Cell::new(&row.code).fg(Color::Blue),
            Cell::new(&row.name),
            yield_cell(row.total_yield, YieldTier::of(row.total_yield)),
        ]);
    }
    println!("{table}");
}

pub fn print_gifts(outcome: &GiftOutcome) {
    println!(
        "Gift cross-reference: {} stocks -> {}",
        outcome.matches.len(),
        outcome.path.display()
    );
    if outcome.matches.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("代號"),
        header_cell("名稱"),
        header_cell("產業"),
        header_cell("紀念品"),
        header_cell("最後買進日"),
        header_cell("殖利率"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for row in &outcome.matches {
        table.add_row(vec![
            Cell::new(&row.code).fg(Color::Blue),
            Cell::new(&row.name),
            Cell::new(row.industry.as_str()),
            Cell::new(&row.gift),
            Cell::new(&row.last_buy_date),
            yield_cell(row.total_yield, YieldTier::of(row.total_yield)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Active sort column carries the direction arrow and stays highlighted.
fn sort_header_cell(label: &str, field: SortField, sort: SortSpec) -> Cell {
    if field == sort.field {
        Cell::new(format!("{label} {}", sort.indicator()))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        header_cell(label)
    }
}

fn yield_cell(total_yield: f64, tier: YieldTier) -> Cell {
    let cell = Cell::new(format!("{total_yield:.2}%"));
    match tier {
        YieldTier::High => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        YieldTier::Medium => cell.fg(Color::Yellow),
        YieldTier::Low => cell,
    }
}

fn stock_dividend_cell(row: &ViewRow) -> Cell {
    let cell = Cell::new(format!("{:.2}", row.stock_dividend));
    if row.has_stock_dividend {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use divscan_model::StockRecord;

    fn row(code: &str, total_yield: f64) -> ViewRow {
        ViewRow::from_record(&StockRecord {
            code: code.to_string(),
            name: format!("n{code}"),
            price: 12.5,
            total_yield,
            cash_dividend: 1.0,
            ..StockRecord::default()
        })
    }

    #[test]
    fn active_column_shows_direction() {
        let table = view_table(&[row("2884", 6.5)], SortSpec::default());
        let text = table.to_string();
        assert!(text.contains("殖利率 ▼"));
        assert!(!text.contains("股價 ▼"));

        let table = view_table(&[row("2884", 6.5)], SortSpec::new(SortField::Price, true));
        assert!(table.to_string().contains("股價 ▲"));
    }

    #[test]
    fn numbers_use_two_decimals() {
        let text = view_table(&[row("2884", 6.5)], SortSpec::default()).to_string();
        assert!(text.contains("12.50"));
        assert!(text.contains("6.50%"));
    }

    #[test]
    fn categories_table_lists_every_count() {
        let text = categories_table(&[(Category::Cement, 3), (Category::Etf, 0)]).to_string();
        assert!(text.contains("水泥工業"));
        assert!(text.contains("ETF"));
        assert!(text.contains('3'));
    }
}
