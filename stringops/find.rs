//! Searching, counting and comparing strings.
//!
//! # Overlap Semantics
//!
//! [`count`] and [`nth_index_of`] share one scanning rule: after a match the
//! next search starts one character after the match *start*, not after its
//! end. Matches may therefore overlap, so `count("aaa", "aa")` is `2`.
//!
//! # Positions
//!
//! Positions are character indices (not byte indices). An empty needle never
//! matches.

use indexmap::IndexMap;

/// Counts overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
  match_starts(haystack, needle).count()
}

/// Counts how often each character occurs, keyed in first-seen order.
pub fn count_chars(text: &str) -> IndexMap<char, usize> {
  let mut counts = IndexMap::new();
  for ch in text.chars() {
    *counts.entry(ch).or_insert(0) += 1;
  }
  counts
}

/// Finds the `occurrence`-th (1-based) match of `sub` in `text`.
///
/// The returned position is one past the character index where the match
/// starts, so for `"hello hello"` the second `"hello"` is reported as `7`.
/// Returns `None` when `occurrence` is `0`, `sub` is empty, or there are fewer
/// matches than requested.
pub fn nth_index_of(text: &str, sub: &str, occurrence: usize) -> Option<usize> {
  let start = match_starts(text, sub).nth(occurrence.checked_sub(1)?)?;
  Some(text[..start].chars().count() + 1)
}

/// Byte offsets of every (possibly overlapping) match of `needle`.
fn match_starts<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
  let mut from = 0;
  std::iter::from_fn(move || {
    if needle.is_empty() || from > haystack.len() {
      return None;
    }
    let start = from + haystack[from..].find(needle)?;
    // Step over one whole char so `from` stays on a char boundary.
    let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
    from = start + step;
    Some(start)
  })
}

/// Computes the Levenshtein edit distance between two strings.
///
/// The distance is the minimum number of single-character insertions,
/// deletions and substitutions that turn `a` into `b`. Characters are compared
/// as Unicode scalar values.
///
/// Only two rows of the cost table are kept alive, sized by the shorter input,
/// so memory is `O(min(m, n))` while time stays `O(m * n)`.
pub fn levenshtein(a: &str, b: &str) -> usize {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();

  if a.is_empty() {
    return b.len();
  }
  if b.is_empty() {
    return a.len();
  }

  // The distance is symmetric, so the shorter string can index the columns.
  let (rows, cols) = if a.len() < b.len() { (&b, &a) } else { (&a, &b) };
  tracing::trace!(rows = rows.len(), cols = cols.len(), "levenshtein table");

  // Row 0: producing a j-char prefix from nothing costs j insertions.
  let mut prev: Vec<usize> = (0..=cols.len()).collect();
  let mut curr = vec![0; cols.len() + 1];

  for (i, &row_ch) in rows.iter().enumerate() {
    curr[0] = i + 1;
    for (j, &col_ch) in cols.iter().enumerate() {
      curr[j + 1] = if row_ch == col_ch {
        prev[j]
      } else {
        1 + prev[j].min(curr[j]).min(prev[j + 1])
      };
    }
    std::mem::swap(&mut prev, &mut curr);
  }

  prev[cols.len()]
}

/// Returns `true` if every character is an ASCII letter or digit.
///
/// Vacuously `true` for the empty string. Non-ASCII letters and digits do not
/// count.
pub fn is_alnum(text: &str) -> bool {
  text.chars().all(|ch| ch.is_ascii_alphanumeric())
}

/// Returns `true` if every character is an ASCII letter.
///
/// Vacuously `true` for the empty string.
pub fn is_alpha(text: &str) -> bool {
  text.chars().all(|ch| ch.is_ascii_alphabetic())
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_count() {
    assert_eq!(count("The Prince of Winterfell", "in"), 2);
    assert_eq!(count("hello hello world", "hello"), 2);
    assert_eq!(count("aaa", "aa"), 2);
    assert_eq!(count("aaaa", "a"), 4);
    assert_eq!(count("abc", "z"), 0);
    assert_eq!(count("", "a"), 0);
    assert_eq!(count("abc", ""), 0);
    assert_eq!(count("", ""), 0);
  }

  #[test]
  fn test_count_multibyte() {
    assert_eq!(count("ééé", "éé"), 2);
    assert_eq!(count("🦀x🦀", "🦀"), 2);
  }

  #[test]
  fn test_count_chars() {
    let chars = count_chars(
      "Hello there world! Let's see how many times each character has appeared in this sentence.",
    );

    let expected = [
      ('H', 1),
      ('e', 14),
      ('l', 3),
      ('o', 3),
      (' ', 14),
      ('t', 6),
      ('h', 6),
      ('r', 5),
      ('w', 2),
      ('d', 2),
      ('!', 1),
      ('L', 1),
      ('\'', 1),
      ('s', 6),
      ('m', 2),
      ('a', 7),
      ('n', 4),
      ('y', 1),
      ('i', 3),
      ('c', 4),
      ('p', 2),
      ('.', 1),
    ];

    assert_eq!(chars.into_iter().collect::<Vec<_>>(), expected);
  }

  #[test]
  fn test_count_chars_astral() {
    let chars = count_chars("🦀a🦀");
    assert_eq!(chars.len(), 2);
    assert_eq!(chars[&'🦀'], 2);
    assert_eq!(chars[&'a'], 1);
    assert!(count_chars("").is_empty());
  }

  #[test]
  fn test_nth_index_of() {
    let text = "one two there hello four five hello six seven hello eight nine ten hello";
    assert_eq!(nth_index_of(text, "hello", 1), Some(15));
    assert_eq!(nth_index_of(text, "hello", 3), Some(47));
    assert_eq!(nth_index_of(text, "hello", 4), Some(68));
    assert_eq!(nth_index_of(text, "hello", 5), None);
  }

  #[test]
  fn test_nth_index_of_absent() {
    assert_eq!(nth_index_of("abc", "z", 1), None);
    assert_eq!(nth_index_of("abc", "a", 0), None);
    assert_eq!(nth_index_of("abc", "", 1), None);
  }

  #[test]
  fn test_nth_index_of_overlapping() {
    assert_eq!(nth_index_of("aaa", "aa", 1), Some(1));
    assert_eq!(nth_index_of("aaa", "aa", 2), Some(2));
    assert_eq!(nth_index_of("aaa", "aa", 3), None);
  }

  #[test]
  fn test_nth_index_of_counts_chars() {
    // "é" is two bytes but one position.
    assert_eq!(nth_index_of("ééx", "x", 1), Some(3));
  }

  #[test]
  fn test_levenshtein() {
    assert_eq!(levenshtein("Saturday", "Sunday"), 3);
    assert_eq!(levenshtein("book", "bear"), 3);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("same", "same"), 0);
  }

  #[test]
  fn test_levenshtein_unicode() {
    assert_eq!(levenshtein("café", "cafe"), 1);
    assert_eq!(levenshtein("🦀", "🐍"), 1);
    assert_eq!(levenshtein("🦀🦀", ""), 2);
  }

  quickcheck::quickcheck! {
      fn test_levenshtein_identity(a: String) -> bool {
          levenshtein(&a, &a) == 0
      }

      fn test_levenshtein_symmetry(a: String, b: String) -> bool {
          levenshtein(&a, &b) == levenshtein(&b, &a)
      }

      fn test_levenshtein_bounds(a: String, b: String) -> bool {
          let (m, n) = (a.chars().count(), b.chars().count());
          let d = levenshtein(&a, &b);
          m.abs_diff(n) <= d && d <= m.max(n)
      }

      fn test_count_matches_nth_index_of(haystack: String, needle: String) -> bool {
          let n = count(&haystack, &needle);
          nth_index_of(&haystack, &needle, n + 1).is_none()
            && (n == 0 || nth_index_of(&haystack, &needle, n).is_some())
      }
  }

  #[test]
  fn test_is_alnum() {
    assert!(is_alnum("HelloWorld1"));
    assert!(!is_alnum("HelloWorld1#"));
    assert!(!is_alnum("Hello World"));
    assert!(!is_alnum("héllo"));
    assert!(!is_alnum("١٢٣"));
    assert!(is_alnum(""));
  }

  #[test]
  fn test_is_alpha() {
    assert!(is_alpha("HelloWorld"));
    assert!(!is_alpha("HelloWorld1"));
    assert!(!is_alpha("héllo"));
    assert!(is_alpha(""));
  }
}
