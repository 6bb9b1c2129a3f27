//! Industry categories.
//!
//! The catalog is fixed at build time. Each category names one source file
//! (`<name>.csv`); the display name is the industry name as published by
//! the exchange, which is also the file stem.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One industry partition of the stock universe.
///
/// Declaration order is the display order of the category list, with the
/// synthetic [`Category::Etf`] group last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Cement,
    Food,
    Plastics,
    Textiles,
    ElectricMachinery,
    ElectricalCable,
    Biotech,
    Chemical,
    GlassCeramics,
    Paper,
    Steel,
    Rubber,
    Automobile,
    ComputerPeripherals,
    Semiconductor,
    ElectronicComponents,
    OtherElectronics,
    Communications,
    InformationServices,
    BuildingConstruction,
    Shipping,
    Tourism,
    Banking,
    Insurance,
    FinancialHolding,
    TradingDepartmentStores,
    Optoelectronics,
    ElectronicDistribution,
    Securities,
    GreenEnergy,
    DigitalCloud,
    Other,
    SportsLeisure,
    OilGasElectricity,
    HomeLiving,
    CulturalCreative,
    AgriTech,
    Etf,
}

/// Industry names, indexed by discriminant.
const NAMES: [&str; 38] = [
    "水泥工業",
    "食品工業",
    "塑膠工業",
    "紡織纖維",
    "電機機械",
    "電器電纜",
    "生技醫療業",
    "化學工業",
    "玻璃陶瓷",
    "造紙工業",
    "鋼鐵工業",
    "橡膠工業",
    "汽車工業",
    "電腦及週邊設備業",
    "半導體業",
    "電子零組件業",
    "其他電子業",
    "通信網路業",
    "資訊服務業",
    "建材營造業",
    "航運業",
    "觀光餐旅",
    "銀行業",
    "保險業",
    "金控業",
    "貿易百貨業",
    "光電業",
    "電子通路業",
    "證券業",
    "綠能環保",
    "數位雲端",
    "其他業",
    "運動休閒",
    "油電燃氣業",
    "居家生活",
    "文化創意業",
    "農業科技業",
    "ETF",
];

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 38] = [
        Category::Cement,
        Category::Food,
        Category::Plastics,
        Category::Textiles,
        Category::ElectricMachinery,
        Category::ElectricalCable,
        Category::Biotech,
        Category::Chemical,
        Category::GlassCeramics,
        Category::Paper,
        Category::Steel,
        Category::Rubber,
        Category::Automobile,
        Category::ComputerPeripherals,
        Category::Semiconductor,
        Category::ElectronicComponents,
        Category::OtherElectronics,
        Category::Communications,
        Category::InformationServices,
        Category::BuildingConstruction,
        Category::Shipping,
        Category::Tourism,
        Category::Banking,
        Category::Insurance,
        Category::FinancialHolding,
        Category::TradingDepartmentStores,
        Category::Optoelectronics,
        Category::ElectronicDistribution,
        Category::Securities,
        Category::GreenEnergy,
        Category::DigitalCloud,
        Category::Other,
        Category::SportsLeisure,
        Category::OilGasElectricity,
        Category::HomeLiving,
        Category::CulturalCreative,
        Category::AgriTech,
        Category::Etf,
    ];

    /// Returns the industry name, which is also the data file stem.
    pub fn as_str(&self) -> &'static str {
        NAMES[*self as usize]
    }

    pub fn is_etf(&self) -> bool {
        matches!(self, Category::Etf)
    }

    /// File name of this category's dataset on disk.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// URL path segment of this category's dataset, percent-encoded the way
    /// a browser's `encodeURIComponent` would encode it.
    pub fn url_path(&self) -> String {
        format!("{}.csv", encode_uri_component(self.as_str()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Parses an industry name. `ETF` is accepted in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("etf") {
            return Ok(Category::Etf);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Percent-encodes every byte outside the `encodeURIComponent` unreserved set.
fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        let unreserved = byte.is_ascii_alphanumeric()
            || matches!(
                byte,
                b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
            );
        if unreserved {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (index, category) in Category::ALL.iter().enumerate() {
            assert_eq!(*category as usize, index);
        }
        assert_eq!(Category::ALL.last(), Some(&Category::Etf));
    }

    #[test]
    fn parses_names_and_etf_case_insensitively() {
        assert_eq!("半導體業".parse::<Category>(), Ok(Category::Semiconductor));
        assert_eq!(" 金控業 ".parse::<Category>(), Ok(Category::FinancialHolding));
        assert_eq!("etf".parse::<Category>(), Ok(Category::Etf));
        assert!("Semiconductor".parse::<Category>().is_err());
    }

    #[test]
    fn file_name_uses_raw_industry_name() {
        assert_eq!(Category::Cement.file_name(), "水泥工業.csv");
        assert_eq!(Category::Etf.file_name(), "ETF.csv");
    }

    #[test]
    fn url_path_is_percent_encoded() {
        assert_eq!(Category::Etf.url_path(), "ETF.csv");
        assert_eq!(Category::Banking.url_path(), "%E9%8A%80%E8%A1%8C%E6%A5%AD.csv");
    }

    #[test]
    fn encode_keeps_unreserved_marks() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_uri_component("a b/c"), "a%20b%2Fc");
    }
}
