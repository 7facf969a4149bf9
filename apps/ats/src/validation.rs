//! Field validation and text extraction helpers shared by the checks.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Compiles a fixed pattern once. A pattern that fails to compile is logged and
/// treated as never matching.
pub(crate) fn static_regex(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(pattern, error = %e, "Failed to compile static pattern");
            None
        }
    })
    .as_ref()
}

/// True when the value exists and is not blank.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Character length of a trimmed optional value; 0 when absent.
pub fn char_len(value: Option<&str>) -> usize {
    value.map(|v| v.trim().chars().count()).unwrap_or(0)
}

/// Simple `local@domain.tld` shape check. Not an RFC 5322 validator.
pub fn is_valid_email(email: &str) -> bool {
    static_regex(&EMAIL_RE, EMAIL_PATTERN).is_some_and(|re| re.is_match(email.trim()))
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD`.
pub fn is_iso_date(value: &str) -> bool {
    let value = value.trim();
    match value.len() {
        4 => value.chars().all(|c| c.is_ascii_digit()),
        7 => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok(),
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        _ => false,
    }
}

/// Joins the present parts with single spaces, skipping blanks.
pub fn join_text<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(is_present(Some("Jane")));
        assert!(!is_present(Some("   ")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_char_len_trims() {
        assert_eq!(char_len(Some("  abc  ")), 3);
        assert_eq!(char_len(Some("ümlaut")), 6);
        assert_eq!(char_len(None), 0);
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+cv@mail.example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree\tfour "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_iso_dates() {
        assert!(is_iso_date("2021"));
        assert!(is_iso_date("2021-03"));
        assert!(is_iso_date("2021-03-15"));
        assert!(!is_iso_date("2021-13"));
        assert!(!is_iso_date("March 2021"));
        assert!(!is_iso_date("03/2021"));
        assert!(!is_iso_date("Present"));
    }

    #[test]
    fn test_join_text_skips_blanks() {
        let text = join_text([Some(" a "), None, Some(""), Some("b")]);
        assert_eq!(text, "a b");
    }
}
