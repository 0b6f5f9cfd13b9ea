//! Chronological ordering of release identifiers
//!
//! Identifiers look like `jan26a`: a three-letter month, a two-digit year and
//! an optional sub-release letter.

use tracing::warn;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Sort key of a parsed release identifier, compared field by field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseKey {
    pub year: u8,
    pub month: u8,
    /// `a` = 1, `b` = 2, ...; 0 when the sixth character is not a letter
    pub sub: u8,
}

/// Parse a release identifier into its sort key
///
/// A missing sub-release letter counts as `a`.
///
/// Examples:
/// - "jan26a" -> ReleaseKey { year: 26, month: 1, sub: 1 }
/// - "feb24z" -> ReleaseKey { year: 24, month: 2, sub: 26 }
/// - "mar24" -> ReleaseKey { year: 24, month: 3, sub: 1 }
pub fn parse_release(release: &str) -> Option<ReleaseKey> {
    let month = release.get(..3)?.to_ascii_lowercase();
    let month = MONTHS.iter().position(|m| *m == month)? as u8 + 1;

    let year = release.get(3..5)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = year.parse().ok()?;

    let sub = match release[5..].chars().next() {
        None => 1,
        Some(letter) if letter.is_ascii_alphabetic() => {
            letter.to_ascii_lowercase() as u8 - b'a' + 1
        }
        Some(_) => 0,
    };

    Some(ReleaseKey { year, month, sub })
}

/// Sort key used for output ordering
///
/// Unparsable identifiers yield `None`, which sorts before every parsed key.
pub fn release_sort_key(release: &str) -> Option<ReleaseKey> {
    let key = parse_release(release);
    if key.is_none() {
        warn!("Unable to parse release name '{}' for sorting", release);
    }
    key
}

/// Sort items chronologically by their release identifier, oldest first
///
/// Each identifier is parsed once, so an unparsable one is warned about once.
pub fn sort_by_release<T, F>(items: &mut [T], release: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| {
        let release = release(item);
        let key = release_sort_key(release);
        // Lexicographic tie-break only among unparsable identifiers
        let fallback = key.is_none().then(|| release.to_string());
        (key, fallback)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jan26a", Some(ReleaseKey { year: 26, month: 1, sub: 1 }))]
    #[case("feb24z", Some(ReleaseKey { year: 24, month: 2, sub: 26 }))]
    #[case("DEC25B", Some(ReleaseKey { year: 25, month: 12, sub: 2 }))]
    #[case("mar24", Some(ReleaseKey { year: 24, month: 3, sub: 1 }))]
    #[case("mar241", Some(ReleaseKey { year: 24, month: 3, sub: 0 }))]
    #[case("foo24a", None)]
    #[case("jan2xa", None)]
    #[case("jan", None)]
    #[case("", None)]
    #[case("é26a", None)]
    fn parse_release_returns_expected(#[case] release: &str, #[case] expected: Option<ReleaseKey>) {
        assert_eq!(parse_release(release), expected);
    }

    #[test]
    fn sort_by_release_orders_chronologically() {
        let mut releases = vec!["dec25a", "jan26a", "jan26b", "feb24z"];

        sort_by_release(&mut releases, |r| *r);

        assert_eq!(releases, vec!["feb24z", "dec25a", "jan26a", "jan26b"]);
    }

    #[test]
    fn sort_by_release_puts_unparsable_first() {
        let mut releases = vec!["jan26a", "weird", "dec25a", "another"];

        sort_by_release(&mut releases, |r| *r);

        assert_eq!(releases, vec!["another", "weird", "dec25a", "jan26a"]);
    }
}
