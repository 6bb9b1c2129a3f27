//! CSV tokenizing and record parsing.

mod line;
mod records;

pub use line::tokenize_line;
pub use records::{MIN_FIELDS, parse_number_or_zero, parse_record, parse_records};
