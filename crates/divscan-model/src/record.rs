//! Stock records and their orderable attributes.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One row of a per-industry dividend dataset.
///
/// Numeric attributes are always finite: a missing or unparseable source
/// value is stored as `0.0`. Text attributes are kept verbatim (trimmed).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockRecord {
    /// Exchange ticker.
    pub code: String,
    pub name: String,
    /// Quote date, unparsed.
    pub as_of_date: String,
    pub price: f64,
    pub change: String,
    pub change_percent: String,
    pub dividend_year: String,
    /// Payout frequency label (annual, semi-annual, quarterly, ...).
    pub frequency: String,
    pub cash_dividend: f64,
    pub stock_dividend: f64,
    pub total_dividend: f64,
    pub ex_dividend_price: String,
    pub ex_dividend_yield: f64,
    pub ex_rights_price: String,
    pub ex_rights_yield: f64,
    /// Cash plus stock dividend yield, in percentage points.
    pub total_yield: f64,
    pub ex_dividend_date: String,
    pub ex_rights_date: String,
    pub payment_date: String,
}

/// A borrowed attribute value, typed for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// Orderable attributes of a [`StockRecord`], in source column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    Code,
    Name,
    AsOfDate,
    Price,
    Change,
    ChangePercent,
    DividendYear,
    Frequency,
    CashDividend,
    StockDividend,
    TotalDividend,
    ExDividendPrice,
    ExDividendYield,
    ExRightsPrice,
    ExRightsYield,
    #[default]
    TotalYield,
    ExDividendDate,
    ExRightsDate,
    PaymentDate,
}

impl SortField {
    pub const ALL: [SortField; 19] = [
        SortField::Code,
        SortField::Name,
        SortField::AsOfDate,
        SortField::Price,
        SortField::Change,
        SortField::ChangePercent,
        SortField::DividendYear,
        SortField::Frequency,
        SortField::CashDividend,
        SortField::StockDividend,
        SortField::TotalDividend,
        SortField::ExDividendPrice,
        SortField::ExDividendYield,
        SortField::ExRightsPrice,
        SortField::ExRightsYield,
        SortField::TotalYield,
        SortField::ExDividendDate,
        SortField::ExRightsDate,
        SortField::PaymentDate,
    ];

    /// Attribute name as used by the dashboard's column headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::AsOfDate => "date",
            SortField::Price => "price",
            SortField::Change => "change",
            SortField::ChangePercent => "changePercent",
            SortField::DividendYear => "dividendYear",
            SortField::Frequency => "frequency",
            SortField::CashDividend => "cashDividend",
            SortField::StockDividend => "stockDividend",
            SortField::TotalDividend => "totalDividend",
            SortField::ExDividendPrice => "exDividendPrice",
            SortField::ExDividendYield => "exDividendYield",
            SortField::ExRightsPrice => "exRightsPrice",
            SortField::ExRightsYield => "exRightsYield",
            SortField::TotalYield => "totalYield",
            SortField::ExDividendDate => "exDividendDate",
            SortField::ExRightsDate => "exRightsDate",
            SortField::PaymentDate => "paymentDate",
        }
    }

    /// Snake-case name of the backing struct field.
    pub fn field_name(&self) -> &'static str {
        match self {
            SortField::Code => "code",
            SortField::Name => "name",
            SortField::AsOfDate => "as_of_date",
            SortField::Price => "price",
            SortField::Change => "change",
            SortField::ChangePercent => "change_percent",
            SortField::DividendYear => "dividend_year",
            SortField::Frequency => "frequency",
            SortField::CashDividend => "cash_dividend",
            SortField::StockDividend => "stock_dividend",
            SortField::TotalDividend => "total_dividend",
            SortField::ExDividendPrice => "ex_dividend_price",
            SortField::ExDividendYield => "ex_dividend_yield",
            SortField::ExRightsPrice => "ex_rights_price",
            SortField::ExRightsYield => "ex_rights_yield",
            SortField::TotalYield => "total_yield",
            SortField::ExDividendDate => "ex_dividend_date",
            SortField::ExRightsDate => "ex_rights_date",
            SortField::PaymentDate => "payment_date",
        }
    }

    /// Returns true if the attribute is stored as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortField::Price
                | SortField::CashDividend
                | SortField::StockDividend
                | SortField::TotalDividend
                | SortField::ExDividendYield
                | SortField::ExRightsYield
                | SortField::TotalYield
        )
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    /// Accepts the header name (`totalYield`) or the field name (`total_yield`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SortField::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(trimmed)
                    || field.field_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownSortField(s.to_string()))
    }
}

impl StockRecord {
    /// Reads one attribute for comparison.
    pub fn field(&self, field: SortField) -> FieldValue<'_> {
        match field {
            SortField::Code => FieldValue::Text(&self.code),
            SortField::Name => FieldValue::Text(&self.name),
            SortField::AsOfDate => FieldValue::Text(&self.as_of_date),
            SortField::Price => FieldValue::Number(self.price),
            SortField::Change => FieldValue::Text(&self.change),
            SortField::ChangePercent => FieldValue::Text(&self.change_percent),
            SortField::DividendYear => FieldValue::Text(&self.dividend_year),
            SortField::Frequency => FieldValue::Text(&self.frequency),
            SortField::CashDividend => FieldValue::Number(self.cash_dividend),
            SortField::StockDividend => FieldValue::Number(self.stock_dividend),
            SortField::TotalDividend => FieldValue::Number(self.total_dividend),
            SortField::ExDividendPrice => FieldValue::Text(&self.ex_dividend_price),
            SortField::ExDividendYield => FieldValue::Number(self.ex_dividend_yield),
            SortField::ExRightsPrice => FieldValue::Text(&self.ex_rights_price),
            SortField::ExRightsYield => FieldValue::Number(self.ex_rights_yield),
            SortField::TotalYield => FieldValue::Number(self.total_yield),
            SortField::ExDividendDate => FieldValue::Text(&self.ex_dividend_date),
            SortField::ExRightsDate => FieldValue::Text(&self.ex_rights_date),
            SortField::PaymentDate => FieldValue::Text(&self.payment_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_field_names() {
        assert_eq!("totalYield".parse::<SortField>(), Ok(SortField::TotalYield));
        assert_eq!("total_yield".parse::<SortField>(), Ok(SortField::TotalYield));
        assert_eq!("TOTALYIELD".parse::<SortField>(), Ok(SortField::TotalYield));
        assert_eq!("date".parse::<SortField>(), Ok(SortField::AsOfDate));
        assert_eq!("as_of_date".parse::<SortField>(), Ok(SortField::AsOfDate));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for field in SortField::ALL {
            assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
        }
    }

    #[test]
    fn default_sort_field_is_total_yield() {
        assert_eq!(SortField::default(), SortField::TotalYield);
    }

    #[test]
    fn numeric_fields_read_numbers() {
        let record = StockRecord {
            name: "台積電".to_string(),
            cash_dividend: 3.5,
            ..StockRecord::default()
        };
        assert_eq!(record.field(SortField::CashDividend), FieldValue::Number(3.5));
        assert_eq!(record.field(SortField::Name), FieldValue::Text("台積電"));
        assert_eq!(record.field(SortField::ExDividendPrice), FieldValue::Text(""));
    }
}
