//! Validation rules for public contact submissions.

use regex::Regex;
use std::sync::OnceLock;

/// Simple email shape check: non-empty local part, `@`, non-empty domain
/// with at least one dot, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));
    re.is_match(email)
}

/// Trim a form field and map an empty result to `None`.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ventas+cat@tienda.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("con espacios@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn clean_optional_trims_and_drops_empties() {
        assert_eq!(clean_optional(Some("  hola  ".into())), Some("hola".into()));
        assert_eq!(clean_optional(Some("   ".into())), None);
        assert_eq!(clean_optional(None), None);
    }
}
