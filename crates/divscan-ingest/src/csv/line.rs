//! Single-line CSV tokenizer.

/// Splits one line into trimmed fields.
///
/// A `"` toggles quoted mode and is never emitted; there is no escape for a
/// literal quote. A `,` inside quotes is field content. An unterminated
/// quote is tolerated and the remainder of the line becomes the last field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_quoted_delimiter() {
        assert_eq!(
            tokenize_line("2330,台積電,\"1,085.00\",12.5"),
            vec!["2330", "台積電", "1,085.00", "12.5"]
        );
    }

    #[test]
    fn test_tokenize_doubled_quote_is_two_toggles() {
        assert_eq!(tokenize_line("\"a\"\"b\",c"), vec!["ab", "c"]);
    }

    #[test]
    fn test_tokenize_trims_fields() {
        assert_eq!(tokenize_line("  a  ,\t b \r"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_tokenize_trailing_delimiter() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(tokenize_line("a,\"b,c"), vec!["a", "b,c"]);
    }
}
