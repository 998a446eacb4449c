use std::sync::OnceLock;

use regex::Regex;

/// Check an email address against the same pattern the server enforces:
/// local part, `@`, domain, dot, two-or-more letter TLD.
pub fn validate_email(value: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
    re.is_match(value)
}

/// Coerce a raw age input to an integer. Non-numeric input is a validation
/// failure, never a silent default.
pub fn parse_age(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
