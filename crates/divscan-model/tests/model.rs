use divscan_model::{Category, FieldValue, ModelError, SortField, StockRecord};

#[test]
fn every_category_parses_from_its_display_name() {
    for category in Category::ALL {
        assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        assert!(category.file_name().ends_with(".csv"));
    }
}

#[test]
fn only_etf_is_etf() {
    let etfs: Vec<Category> = Category::ALL.into_iter().filter(Category::is_etf).collect();
    assert_eq!(etfs, vec![Category::Etf]);
}

#[test]
fn unknown_names_report_the_input() {
    assert_eq!(
        "麵包業".parse::<Category>(),
        Err(ModelError::UnknownCategory("麵包業".to_string()))
    );
    assert_eq!(
        "yield".parse::<SortField>(),
        Err(ModelError::UnknownSortField("yield".to_string()))
    );
}

#[test]
fn default_record_reads_zero_and_empty() {
    let record = StockRecord::default();
    for field in SortField::ALL {
        let text = match record.field(field) {
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(text) => text.to_string(),
        };
        assert!(text.is_empty() || text == "0", "{field}: {text}");
    }
}
