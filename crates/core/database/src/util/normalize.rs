//! Write-time normalization rules for events and bookings
//!
//! These are pure functions invoked by the create paths; the storage drivers
//! never mutate documents on the way in, so everything here can be tested
//! without a live store.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum accepted length for a slug
pub const MAX_SLUG_LENGTH: usize = 100;

static RE_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());
// ASCII on purpose: non-ASCII letters are stripped, not transliterated
static RE_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new("-+").unwrap());
static RE_TIME: Lazy<Regex> = Lazy::new(|| Regex::new("^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").unwrap());
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Derive a URL-safe slug from an event title
///
/// Lowercases, strips special characters, collapses whitespace and repeated
/// hyphens down to single hyphens and trims hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = RE_SPECIAL.replace_all(&lowered, "");
    let hyphenated = RE_WHITESPACE.replace_all(&stripped, "-");
    let collapsed = RE_HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Sanitize and check an externally supplied slug
///
/// Returns the trimmed, lowercased slug if it is 1-100 characters of
/// lowercase hyphen-separated segments, otherwise `None`. Intended to run
/// before any store access.
pub fn sanitize_slug(input: &str) -> Option<String> {
    let slug = input.trim().to_lowercase();
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH || !RE_SLUG.is_match(&slug) {
        return None;
    }

    Some(slug)
}

/// Normalize a date to calendar-date form (`YYYY-MM-DD`)
///
/// Accepts a plain calendar date (month and day may be unpadded) or an
/// RFC 3339 timestamp whose date component is taken.
pub fn normalize_date(input: &str) -> Option<String> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive().format("%Y-%m-%d").to_string());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Normalize a time to zero-padded 24-hour `HH:MM`
pub fn normalize_time(input: &str) -> Option<String> {
    RE_TIME.captures(input.trim()).map(|captures| {
        format!(
            "{:0>2}:{}",
            captures.get(1).unwrap().as_str(),
            captures.get(2).unwrap().as_str()
        )
    })
}

/// Normalize an email address (trim + lowercase) and check its basic shape
pub fn normalize_email(input: &str) -> Option<String> {
    let email = input.trim().to_lowercase();
    if RE_EMAIL.is_match(&email) {
        Some(email)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_derives_expected_slug() {
        assert_eq!(slugify("React Conf 2025"), "react-conf-2025");
    }

    #[test]
    fn slugify_strips_special_characters_and_collapses_hyphens() {
        assert_eq!(slugify("  Rust & WebAssembly -- Deep Dive!  "), "rust-webassembly-deep-dive");
        assert_eq!(slugify("--Already--Hyphenated--"), "already-hyphenated");
    }

    #[test]
    fn slugify_strips_non_ascii_letters() {
        assert_eq!(slugify("Café Night"), "caf-night");
        assert_eq!(slugify("Zürich Conf"), "zrich-conf");
        // Derived slugs stay retrievable through slug validation
        assert!(sanitize_slug(&slugify("Café Night")).is_some());
    }

    #[test]
    fn sanitize_slug_accepts_valid_input() {
        assert_eq!(
            sanitize_slug(" React-Conf-2025 ").as_deref(),
            Some("react-conf-2025")
        );
    }

    #[test]
    fn sanitize_slug_rejects_malformed_input() {
        assert!(sanitize_slug("").is_none());
        assert!(sanitize_slug("   ").is_none());
        assert!(sanitize_slug("-leading-hyphen").is_none());
        assert!(sanitize_slug("trailing-hyphen-").is_none());
        assert!(sanitize_slug("double--hyphen").is_none());
        assert!(sanitize_slug("spaces in slug").is_none());
        assert!(sanitize_slug(&"a".repeat(101)).is_none());
    }

    #[test]
    fn normalize_date_accepts_unpadded_and_timestamp_forms() {
        assert_eq!(normalize_date("2025-4-10").as_deref(), Some("2025-04-10"));
        assert_eq!(
            normalize_date("2025-04-10T00:00:00Z").as_deref(),
            Some("2025-04-10")
        );
    }

    #[test]
    fn normalize_date_rejects_nonsense() {
        assert!(normalize_date("not a date").is_none());
        assert!(normalize_date("2025-13-40").is_none());
    }

    #[test]
    fn normalize_time_zero_pads() {
        assert_eq!(normalize_time("9:30").as_deref(), Some("09:30"));
        assert_eq!(normalize_time("14:05").as_deref(), Some("14:05"));
    }

    #[test]
    fn normalize_time_rejects_out_of_range() {
        assert!(normalize_time("24:00").is_none());
        assert!(normalize_time("12:60").is_none());
        assert!(normalize_time("noon").is_none());
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Visitor@Example.COM ").as_deref(),
            Some("visitor@example.com")
        );
    }

    #[test]
    fn normalize_email_rejects_malformed_addresses() {
        assert!(normalize_email("not-an-email").is_none());
        assert!(normalize_email("missing@tld").is_none());
        assert!(normalize_email("two words@example.com").is_none());
    }
}
