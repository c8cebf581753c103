//! Parsing helpers for values written in behavioural feature files.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}

/// Splits a comma-separated list of (optionally quoted) error codes.
///
/// An empty or blank input yields no codes.
#[must_use]
pub fn parse_codes(list: &str) -> Vec<String> {
    list.split(',')
        .map(unquote)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_codes, unquote};

    #[test]
    fn unquote_removes_single_outer_quotes() {
        assert_eq!(unquote("'value'"), "value");
        assert_eq!(unquote(" \"value\" "), "value");
        assert_eq!(unquote("\"mixed'"), "\"mixed'");
    }

    #[test]
    fn parse_codes_splits_and_unquotes() {
        assert_eq!(
            parse_codes("\"FirstName.Empty\", \"Email.Empty\""),
            ["FirstName.Empty", "Email.Empty"]
        );
        assert!(parse_codes("  ").is_empty());
    }
}
