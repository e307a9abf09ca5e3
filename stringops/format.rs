//! Reshaping strings: wrapping, trimming, padding, centering and currency.
//!
//! The case transforms ([`ucword`], [`ucwords`], [`lcword`], [`lcwords`],
//! [`swapcase`]) are defined in a private sibling module and re-exported here.
//!
//! # Quirks kept on purpose
//!
//! - [`ltrim`] and [`rtrim`] strip only U+0020, not general whitespace.
//! - [`wordwrap`] inserts a single line break; it does not reflow the rest.
//! - [`nl2br`] matches the literal two-character escapes `\r` and `\n`
//!   (a backslash followed by a letter), not real control characters.

use std::{
  fmt::{
    self,
    Display,
  },
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

pub use crate::case::{
  lcword,
  lcword_with,
  lcwords,
  lcwords_with,
  swapcase,
  swapcase_with,
  ucword,
  ucword_with,
  ucwords,
  ucwords_with,
};

/// Repetitions used by [`pad`] when the caller has no preference.
pub const DEFAULT_PAD_AMOUNT: usize = 1;
/// Fill used by [`center`] when the caller has no preference.
pub const DEFAULT_FILL: &str = " ";

const LINE_BREAK_TAG: &str = "<br />";

/// Which side(s) of the string [`pad`] extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
  Left,
  #[default]
  Right,
  /// Split between both sides, the right one taking the extra repetition on
  /// odd amounts.
  Both,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pad side '{0}', expected one of 'left', 'right' or 'both'")]
pub struct ParsePadSideError(pub String);

impl FromStr for PadSide {
  type Err = ParsePadSideError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "left" => Ok(Self::Left),
      "right" => Ok(Self::Right),
      "both" => Ok(Self::Both),
      _ => Err(ParsePadSideError(s.to_owned())),
    }
  }
}

impl Display for PadSide {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Left => "left",
      Self::Right => "right",
      Self::Both => "both",
    })
  }
}

/// Currency locale for [`money_in`].
///
/// Only `US` has grouping rules. Any other code is kept as
/// [`Locale::Other`] and still formats, just without separators.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
  #[default]
  Us,
  Other(String),
}

impl From<&str> for Locale {
  fn from(code: &str) -> Self {
    if code.eq_ignore_ascii_case("US") {
      Self::Us
    } else {
      Self::Other(code.to_owned())
    }
  }
}

impl From<String> for Locale {
  fn from(code: String) -> Self {
    if code.eq_ignore_ascii_case("US") {
      Self::Us
    } else {
      Self::Other(code)
    }
  }
}

impl From<Locale> for String {
  fn from(locale: Locale) -> Self {
    locale.to_string()
  }
}

impl Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Us => f.write_str("US"),
      Self::Other(code) => f.write_str(code),
    }
  }
}

/// Splits `text` once, putting a `'\n'` after the first `char_number + 1`
/// characters.
///
/// This is a one-shot split, not a paragraph reflow: the second segment is
/// left as is even when it is still longer than `char_number`. If `text` is
/// not longer than the break point the newline is appended at the end.
pub fn wordwrap(text: &str, char_number: usize) -> String {
  let split = text
    .char_indices()
    .nth(char_number.saturating_add(1))
    .map_or(text.len(), |(idx, _)| idx);

  let (head, tail) = text.split_at(split);
  let mut wrapped = String::with_capacity(text.len() + 1);
  wrapped.push_str(head);
  wrapped.push('\n');
  wrapped.push_str(tail);
  wrapped
}

/// Reverses `text` by grapheme cluster, so neither astral characters
/// nor combining sequences get torn apart.
pub fn reverse(text: &str) -> String {
  text.graphemes(true).rev().collect()
}

/// Strips leading spaces (U+0020 only).
pub fn ltrim(text: &str) -> &str {
  text.trim_start_matches(' ')
}

/// Strips trailing spaces (U+0020 only).
pub fn rtrim(text: &str) -> &str {
  text.trim_end_matches(' ')
}

/// Formats `amount` as US dollars, e.g. `$1,234,567`.
pub fn money(amount: impl Display) -> String {
  money_in(amount, &Locale::Us)
}

/// Formats `amount` as currency for `locale`.
///
/// `amount` is rendered through [`Display`], so integers, floats and numeric
/// strings are all accepted. For [`Locale::Us`] a comma goes in front of
/// every third digit counting back from the decimal point. A leading sign is
/// not part of the digit run.
pub fn money_in(amount: impl Display, locale: &Locale) -> String {
  let amount = amount.to_string();

  let grouped = match locale {
    Locale::Us => group_thousands(&amount, ','),
    Locale::Other(code) => {
      tracing::debug!(locale = %code, "no grouping rules for locale, leaving amount ungrouped");
      amount
    },
  };

  format!("${grouped}")
}

fn group_thousands(amount: &str, separator: char) -> String {
  let (sign, unsigned) = match amount.strip_prefix(['-', '+']) {
    Some(rest) => amount.split_at(amount.len() - rest.len()),
    None => ("", amount),
  };
  let int_end = unsigned.find('.').unwrap_or(unsigned.len());
  let (int_part, fraction) = unsigned.split_at(int_end);

  let digits = int_part.chars().count();
  let mut grouped = String::with_capacity(amount.len() + digits / 3);
  grouped.push_str(sign);
  for (i, ch) in int_part.chars().enumerate() {
    if i > 0 && (digits - i) % 3 == 0 {
      grouped.push(separator);
    }
    grouped.push(ch);
  }
  grouped.push_str(fraction);
  grouped
}

/// Pads `text` with `sub` repeated `amount` times on `side`.
///
/// With [`PadSide::Both`] an even amount is split evenly and an odd amount
/// gives the right side the extra repetition:
///
/// ```
/// use stringops::{PadSide, pad};
///
/// assert_eq!(pad("Hello World!", "=-", 5, PadSide::Both), "=-=-Hello World!=-=-=-");
/// ```
pub fn pad(text: &str, sub: &str, amount: usize, side: PadSide) -> String {
  let (left, right) = match side {
    PadSide::Left => (amount, 0),
    PadSide::Right => (0, amount),
    PadSide::Both => {
      let right = amount.div_ceil(2);
      (amount - right, right)
    },
  };

  let mut padded = String::with_capacity(text.len() + sub.len() * amount);
  padded.push_str(&sub.repeat(left));
  padded.push_str(text);
  padded.push_str(&sub.repeat(right));
  padded
}

/// Replaces every literal `\r` or `\n` escape (backslash plus letter) with
/// `<br />`.
///
/// Real carriage returns and line feeds are not touched, and the escaped pair
/// `\r\n` becomes two tags.
pub fn nl2br(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut rest = text;
  while let Some(idx) = rest.find('\\') {
    out.push_str(&rest[..idx]);
    let escape = &rest[idx..];
    if escape.starts_with("\\r") || escape.starts_with("\\n") {
      out.push_str(LINE_BREAK_TAG);
      rest = &escape[2..];
    } else {
      out.push('\\');
      rest = &escape[1..];
    }
  }
  out.push_str(rest);
  out
}

/// Centers `text` in a field `length` characters wide, filled with `fill`.
///
/// `length - len(text)` is the *total* number of fill repetitions, split by
/// [`pad`]'s right-favoured rule. Text that already fills the field is
/// returned unchanged.
pub fn center(text: &str, length: usize, fill: &str) -> String {
  let len = text.chars().count();
  if len >= length {
    return text.to_owned();
  }
  pad(text, fill, length - len, PadSide::Both)
}
