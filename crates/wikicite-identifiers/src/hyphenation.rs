//! ISBN hyphenation
//!
//! Splits an ISBN-10 or ISBN-13 into its prefix, registration group,
//! registrant, publication and check digit using the registration range
//! table. ISBN-10s are placed by treating them as `978` ISBN-13s and dropping
//! the prefix again. Check digits are kept as given, never recomputed.

use tracing::warn;

use crate::error::HyphenationError;
use crate::ranges::{group_rules, lookup, prefix_rules};

/// Hyphenate an ISBN-10 or ISBN-13.
///
/// Existing hyphens are ignored. Anything else that is not a digit (or a
/// trailing `X` on an ISBN-10) makes the input malformed.
pub fn hyphenate(isbn: &str) -> Result<String, HyphenationError> {
    let compact: String = isbn
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_ascii_uppercase();

    match compact.len() {
        10 if is_isbn10(&compact) => {
            let as_isbn13 = format!("978{}", compact);
            let parts = split_isbn13(&as_isbn13, isbn)?;
            Ok(parts[1..].join("-"))
        }
        13 if is_isbn13(&compact) => Ok(split_isbn13(&compact, isbn)?.join("-")),
        _ => Err(HyphenationError::Degraded(isbn.to_string())),
    }
}

/// Hyphenate a nine digit Standard Book Number.
///
/// An SBN is an ISBN-10 with the leading zero omitted, so it is placed in
/// group `0` and printed without that group.
pub fn hyphenate_sbn(sbn: &str) -> Result<String, HyphenationError> {
    let digits = sbn.chars().filter(|c| *c != '-').count();
    let hyphenated = if digits == 9 {
        hyphenate(&format!("0{}", sbn))?
    } else {
        hyphenate(sbn)?
    };
    Ok(hyphenated
        .strip_prefix("0-")
        .map(str::to_string)
        .unwrap_or(hyphenated))
}

fn is_isbn10(s: &str) -> bool {
    s.char_indices()
        .all(|(i, c)| c.is_ascii_digit() || (i == 9 && c == 'X'))
}

fn is_isbn13(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit()) && (s.starts_with("978") || s.starts_with("979"))
}

/// Seven digit lookup window, right padded with zeros.
fn window(digits: &str) -> u32 {
    let mut value = 0;
    let mut taken = 0;
    for c in digits.chars().take(7) {
        value = value * 10 + c.to_digit(10).unwrap_or(0);
        taken += 1;
    }
    for _ in taken..7 {
        value *= 10;
    }
    value
}

/// Split a validated ISBN-13 into its five parts.
///
/// A range the table marks unassigned is fatal. A group the table has no
/// registrant rules for is degraded, the identifier is kept unhyphenated.
fn split_isbn13<'a>(isbn: &'a str, raw: &str) -> Result<[&'a str; 5], HyphenationError> {
    let fatal = |cause: String| HyphenationError::Fatal {
        raw: raw.to_string(),
        cause,
    };

    let (prefix, rest) = isbn.split_at(3);
    let (body, check) = rest.split_at(rest.len() - 1);

    let prefix_table =
        prefix_rules(prefix).ok_or_else(|| fatal(format!("unknown EAN prefix {prefix}")))?;
    let group_len = match lookup(prefix_table, window(body)) {
        Some(0) | None => {
            return Err(fatal(format!(
                "no registration group for {prefix}-{}",
                &body[..body.len().min(5)]
            )))
        }
        Some(len) => len,
    };
    let (group, body) = body.split_at(group_len);

    let key = format!("{prefix}-{group}");
    let Some(group_table) = group_rules(&key) else {
        warn!(isbn = raw, group = key.as_str(), "No registrant ranges for group");
        return Err(HyphenationError::Degraded(raw.to_string()));
    };
    let registrant_len = match lookup(group_table, window(body)) {
        Some(0) | None => {
            return Err(fatal(format!(
                "registrant range in group {key} is not assigned"
            )))
        }
        Some(len) if len >= body.len() => {
            return Err(fatal(format!(
                "registrant length {len} leaves no publication number in group {key}"
            )))
        }
        Some(len) => len,
    };
    let (registrant, publication) = body.split_at(registrant_len);

    Ok([prefix, group, registrant, publication, check])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0851312779", "0-85131-277-9")]
    #[case("185315229X", "1-85315-229-X")]
    #[case("185315229x", "1-85315-229-X")]
    #[case("0306406152", "0-306-40615-2")]
    #[case("0198534531", "0-19-853453-1")]
    #[case("388022174X", "3-88022-174-X")]
    #[case("9780306406157", "978-0-306-40615-7")]
    #[case("9780321125217", "978-0-321-12521-7")]
    #[case("9781431405787", "978-1-4314-0578-7")]
    #[case("9783161484100", "978-3-16-148410-0")]
    #[case("978-0-85131-277-5", "978-0-85131-277-5")]
    #[case("0-8513-12779", "0-85131-277-9")]
    #[case("9789896160000", "978-989-616-000-0")]
    #[case("9786051234567", "978-605-123-456-7")]
    #[case("9786001234567", "978-600-123-456-7")]
    #[case("9786550000001", "978-65-5000-000-1")]
    #[case("9789861234567", "978-986-123-456-7")]
    #[case("9789871234567", "978-987-1234-56-7")]
    #[case("9789640012345", "978-964-00-1234-5")]
    #[case("9789953123456", "978-9953-12-345-6")]
    fn test_hyphenate(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(hyphenate(input).unwrap(), expected);
    }

    #[rstest]
    #[case("085131277")]
    #[case("08513127791")]
    #[case("0851312X79")]
    #[case("X851312779")]
    #[case("1234567890123")]
    #[case("97803064061X7")]
    #[case("")]
    fn test_malformed_degrades(#[case] input: &str) {
        assert_eq!(
            hyphenate(input),
            Err(HyphenationError::Degraded(input.to_string()))
        );
    }

    #[test]
    fn test_unassigned_range_is_fatal() {
        // 979-0 has no registration groups
        assert!(matches!(
            hyphenate("9790000000001"),
            Err(HyphenationError::Fatal { .. })
        ));
        // 978-6600... is defined but unassigned
        assert!(matches!(
            hyphenate("9786600000001"),
            Err(HyphenationError::Fatal { .. })
        ));
    }

    #[test]
    fn test_group_without_ranges_degrades() {
        // 978-99920 is a registered group with no registrant rules here
        assert_eq!(
            hyphenate("9789992012345"),
            Err(HyphenationError::Degraded("9789992012345".to_string()))
        );
    }

    #[test]
    fn test_hyphenate_sbn() {
        assert_eq!(hyphenate_sbn("851312779").unwrap(), "85131-277-9");
        assert_eq!(hyphenate_sbn("0851312779").unwrap(), "85131-277-9");
        assert_eq!(
            hyphenate_sbn("85131277"),
            Err(HyphenationError::Degraded("85131277".to_string()))
        );
    }

    #[test]
    fn test_window_pads_short_input() {
        assert_eq!(window("85"), 8500000);
        assert_eq!(window("123456789"), 1234567);
    }
}
