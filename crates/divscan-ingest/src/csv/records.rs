//! Positional mapping of tokenized rows to [`StockRecord`]s.

use divscan_model::StockRecord;
use tracing::debug;

use super::line::tokenize_line;

/// Rows with fewer fields than this are dropped.
pub const MIN_FIELDS: usize = 10;

/// Parses a whole dataset file.
///
/// The first line is a header and is skipped without validation. Blank
/// lines and rows shorter than [`MIN_FIELDS`] are dropped silently.
pub fn parse_records(text: &str) -> Vec<StockRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut dropped = 0usize;
    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&tokenize_line(line)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    debug!(kept = records.len(), dropped, "parsed dataset rows");
    records
}

/// Maps one tokenized row by fixed column position.
///
/// Returns `None` when the row has fewer than [`MIN_FIELDS`] fields. Columns
/// past the end of a shorter row read as empty text or zero.
pub fn parse_record(fields: &[String]) -> Option<StockRecord> {
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let text = |index: usize| fields.get(index).cloned().unwrap_or_default();
    let number = |index: usize| {
        fields
            .get(index)
            .map_or(0.0, |value| parse_number_or_zero(value))
    };

    Some(StockRecord {
        code: text(0),
        name: text(1),
        as_of_date: text(2),
        price: number(3),
        change: text(4),
        change_percent: text(5),
        dividend_year: text(6),
        frequency: text(7),
        cash_dividend: number(8),
        stock_dividend: number(9),
        total_dividend: number(10),
        ex_dividend_price: text(11),
        ex_dividend_yield: number(12),
        ex_rights_price: text(13),
        ex_rights_yield: number(14),
        total_yield: number(15),
        ex_dividend_date: text(16),
        ex_rights_date: text(17),
        payment_date: text(18),
    })
}

/// Parses the leading decimal literal of `value`, or returns 0.
///
/// Matches float-prefix semantics: `"12.5%"` reads as 12.5, `"1,085"` as 1,
/// and `"-"`, `""` or `"N/A"` as 0. Non-finite results and negative zero
/// also become 0.
pub fn parse_number_or_zero(value: &str) -> f64 {
    let text = value.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits + (frac_end - frac_start) > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && *number != 0.0)
        .unwrap_or(0.0)
}
