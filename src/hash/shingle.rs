//! Character bigram ("shingle") extraction.
//!
//! A shingle is a pair of adjacent Unicode scalar values. For a text of
//! `n` characters there are `n - 1` overlapping shingles; fewer than two
//! characters yield none.
//!
//! Shingles are borrowed slices of the input, cut on char boundaries, so
//! multi-byte characters (CJK, emoji) are never split.

use std::iter::FusedIterator;
use std::str::CharIndices;

/// Number of characters per shingle.
pub const SHINGLE_WIDTH: usize = 2;

/// Lazily iterate the overlapping character bigrams of `text`.
///
/// ```rust
/// use simprint::shingles;
///
/// let grams: Vec<&str> = shingles("héllo").collect();
/// assert_eq!(grams, ["hé", "él", "ll", "lo"]);
/// assert_eq!(shingles("x").count(), 0);
/// ```
pub fn shingles(text: &str) -> Shingles<'_> {
    let mut chars = text.char_indices();
    // Offset of the first char of the next shingle.
    let start = chars.next().map(|(i, _)| i);
    Shingles { text, chars, start }
}

/// Iterator returned by [`shingles`].
#[derive(Debug, Clone)]
pub struct Shingles<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    start: Option<usize>,
}

impl<'a> Iterator for Shingles<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.start?;
        let (second, c) = self.chars.next()?;
        self.start = Some(second);
        Some(&self.text[start..second + c.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.start.is_none() {
            return (0, Some(0));
        }
        // Remaining chars each close exactly one shingle.
        let bytes = self.chars.as_str().len();
        ((bytes + 3) / 4, Some(bytes))
    }
}

impl FusedIterator for Shingles<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_bigrams() {
        let grams: Vec<&str> = shingles("abcd").collect();
        assert_eq!(grams, vec!["ab", "bc", "cd"]);
    }

    #[test]
    fn test_short_inputs_are_empty() {
        assert_eq!(shingles("").count(), 0);
        assert_eq!(shingles("a").count(), 0);
        assert_eq!(shingles("界").count(), 0);
        assert_eq!(shingles("ab").collect::<Vec<_>>(), vec!["ab"]);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let grams: Vec<&str> = shingles("👋 世界!").collect();
        assert_eq!(grams, vec!["👋 ", " 世", "世界", "界!"]);
        for g in &grams {
            assert_eq!(g.chars().count(), SHINGLE_WIDTH);
        }
    }

    #[test]
    fn test_count_is_chars_minus_one() {
        let text = "Hello, 世界! 👋🏽";
        let n = text.chars().count();
        assert_eq!(shingles(text).count(), n - 1);
    }

    #[test]
    fn test_size_hint_bounds_actual_count() {
        for text in ["", "a", "ab", "héllo wörld", "👋👋👋", "世界世界"] {
            let it = shingles(text);
            let (lo, hi) = it.size_hint();
            let n = it.count();
            assert!(lo <= n, "{text:?}: lower bound {lo} > {n}");
            assert!(hi.map_or(true, |h| n <= h), "{text:?}: upper bound {hi:?} < {n}");
        }
    }

    #[test]
    fn test_fused() {
        let mut it = shingles("ab");
        assert_eq!(it.next(), Some("ab"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
