//! Version string normalization
//!
//! Reduces a raw dependency version to its `MAJOR.MINOR` line:
//! - `19.0.0` -> `19.0`
//! - `^19.1.1` -> `19.1`
//! - `>= 19.2.0` -> `19.2`
//! - `unknown` and the empty string are returned unchanged
//!
//! Normalization never fails. Input that does not look like a version
//! (`abc`, `latest`) is returned as-is after prefix stripping.

/// Value reported when a manifest does not declare a version
pub const UNKNOWN_VERSION: &str = "unknown";

/// Characters that may form a range-operator prefix (`^`, `~`, `>=`, `<=`, `>`, `<`)
const RANGE_OPERATORS: [char; 5] = ['^', '~', '>', '=', '<'];

/// Strip a leading range-operator prefix together with the whitespace after it
///
/// The prefix only starts when the first character is an operator, so
/// `" ^19.0"` is left untouched while `"^ ^19.0"` becomes `"19.0"`.
pub fn strip_range_operator(raw: &str) -> &str {
    if raw.starts_with(RANGE_OPERATORS) {
        raw.trim_start_matches(|c: char| RANGE_OPERATORS.contains(&c) || c.is_whitespace())
    } else {
        raw
    }
}

/// Normalize a version string to `MAJOR.MINOR`
///
/// Examples:
/// - "19.0.0" -> "19.0"
/// - "~19.1.1" -> "19.1"
/// - "19" -> "19"
/// - "unknown" -> "unknown"
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() || raw == UNKNOWN_VERSION {
        return raw.to_string();
    }

    let cleaned = strip_range_operator(raw);
    let mut segments = cleaned.split('.');

    match (segments.next(), segments.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        _ => cleaned.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("^19.0.0", "19.0")]
    #[case("~19.1.1", "19.1")]
    #[case(">=19.2.0", "19.2")]
    #[case("<=19.2.0", "19.2")]
    #[case(">19.1.0", "19.1")]
    #[case("<19.1.0", "19.1")]
    #[case(">= 19.2.0", "19.2")]
    #[case("19.0.0", "19.0")]
    #[case("19.0", "19.0")]
    #[case("19.1.0-rc.1", "19.1")]
    #[case("19", "19")]
    #[case("abc", "abc")]
    #[case("^", "")]
    #[case("unknown", "unknown")]
    #[case("", "")]
    fn normalize_returns_expected(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("^19.1.0", "19.1.0")]
    #[case(">= 19.2.0", "19.2.0")]
    #[case("^ ^19.0", "19.0")]
    #[case(" ^19.0", " ^19.0")] // prefix must start at the first character
    #[case("19.1.0", "19.1.0")]
    fn strip_range_operator_returns_expected(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_range_operator(raw), expected);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_for_version_like_input(
            raw in "[\\^~<>= ]{0,3}[0-9]{1,2}(\\.[0-9]{1,2}){0,3}",
        ) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
