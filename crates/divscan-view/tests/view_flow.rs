use divscan_ingest::{Dataset, DatasetLoader, MemorySource};
use divscan_model::{Category, SortField};
use divscan_view::{
    RenderedView, SortSpec, ViewState, apply_sort, load_filter, meets_yield_threshold, render,
    select_category,
};

const HEADER: &str = "代號,名稱,日期,股價,漲跌價,漲跌幅,股利年度,發放頻率,現金股利,股票股利,合計股利,除息參考價,除息殖利率,除權參考價,除權殖利率,合計殖利率,除息日,除權日,發放日";

fn row(code: &str, name: &str, price: f64, cash: f64, total_yield: f64) -> String {
    format!(
        "{code},{name},01/02,{price},+0.1,+0.3%,2024,年,{cash},0,{cash},,,,,{total_yield},2024/07/01,,2024/08/01"
    )
}

fn etf_source() -> MemorySource {
    let text = [
        HEADER.to_string(),
        row("0050", "元大台灣50", 180.0, 2.0, 6.2),
        row("0051B", "債券A", 40.0, 1.5, 7.0),
        row("0052", "富邦科技", 120.0, 0.0, 3.0),
    ]
    .join("\n");
    MemorySource::new().with(Category::Etf, text)
}

fn codes(view: &RenderedView) -> Vec<&str> {
    view.rows().iter().map(|r| r.code.as_str()).collect()
}

#[test]
fn etf_end_to_end_with_load_filter() {
    let loader = DatasetLoader::new(etf_source());
    let (dataset, report) = loader.load(&[Category::Etf], load_filter);
    assert!(report.failures.is_empty());

    let stored: Vec<&str> = dataset
        .records(Category::Etf)
        .iter()
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(stored, vec!["0050"]);
    assert_eq!(dataset.count(Category::Etf), 1);

    let state = select_category(ViewState::default(), Category::Etf);
    let view = render(&state, &dataset);
    assert_eq!(codes(&view), vec!["0050"]);
    assert_eq!(view.category(), Some(Category::Etf));
}

#[test]
fn render_excludes_bond_etf_even_when_stored() {
    let loader = DatasetLoader::new(etf_source());
    // Yield threshold only, without the load-stage bond exclusion.
    let (dataset, _) = loader.load(&[Category::Etf], |_, records| {
        records
            .into_iter()
            .filter(meets_yield_threshold)
            .collect()
    });
    let stored: Vec<&str> = dataset
        .records(Category::Etf)
        .iter()
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(stored, vec!["0050", "0051B"]);

    let state = select_category(ViewState::default(), Category::Etf);
    assert_eq!(codes(&render(&state, &dataset)), vec!["0050"]);
}

fn shipping_dataset() -> Dataset {
    let text = [
        HEADER.to_string(),
        row("2603", "長榮", 190.0, 70.0, 36.8),
        row("2609", "陽明", 60.0, 5.0, 8.3),
        row("2615", "萬海", 80.0, 4.0, 5.0),
        row("2606", "裕民", 55.0, 0.0, 5.5),
        row("2637", "慧洋-KY", 50.0, 3.0, 6.0),
    ]
    .join("\n");
    let loader = DatasetLoader::new(MemorySource::new().with(Category::Shipping, text));
    loader.load(&[Category::Shipping], load_filter).0
}

#[test]
fn stored_count_can_exceed_rendered_count() {
    let dataset = shipping_dataset();
    let state = select_category(ViewState::default(), Category::Shipping);
    let view = render(&state, &dataset);
    assert_eq!(dataset.count(Category::Shipping), 5);
    assert_eq!(view.count(), 4);
}

#[test]
fn header_click_reverses_numeric_order() {
    let dataset = shipping_dataset();
    let state = select_category(ViewState::default(), Category::Shipping);
    let desc = render(&state, &dataset);
    assert_eq!(codes(&desc), vec!["2603", "2609", "2637", "2615"]);

    let state = apply_sort(state, SortField::TotalYield);
    let asc = render(&state, &dataset);
    let mut reversed = codes(&desc);
    reversed.reverse();
    assert_eq!(codes(&asc), reversed);
}

#[test]
fn sorting_by_price_then_switching_category_keeps_sort() {
    let dataset = shipping_dataset();
    let state = select_category(ViewState::default(), Category::Shipping);
    let state = apply_sort(state, SortField::Price);
    let view = render(&state, &dataset);
    assert_eq!(codes(&view), vec!["2603", "2615", "2609", "2637"]);

    let state = select_category(state, Category::Etf);
    assert_eq!(state.sort, SortSpec::new(SortField::Price, false));
    assert!(matches!(
        render(&state, &dataset),
        RenderedView::Empty {
            category: Category::Etf,
            ..
        }
    ));
}

#[test]
fn render_is_pure() {
    let dataset = shipping_dataset();
    let state = apply_sort(
        select_category(ViewState::default(), Category::Shipping),
        SortField::Name,
    );
    assert_eq!(render(&state, &dataset), render(&state, &dataset));
}
