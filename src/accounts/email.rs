use regex::Regex;
use std::sync::LazyLock;

// Requires a dotted domain, so `a@b` is not an address here.
static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Normalize an email for lookup/uniqueness checks.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
#[must_use]
pub fn valid_email(email_normalized: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|regex| regex.is_match(email_normalized))
}
