//! Stateless string utilities.
//!
//! Everything is re-exported at the crate root:
//!
//! - [`convert`]: binary and hexadecimal digit strings
//! - [`find`]: counting, searching, edit distance and ASCII class checks
//! - [`format`]: casing, wrapping, trimming, padding, centering and currency
//!
//! No function keeps state between calls, so all of them can be used from any
//! thread without synchronization.

use smartstring::{
  LazyCompact,
  SmartString,
};

mod case;
pub mod convert;
pub mod find;
pub mod format;

pub use convert::{
  ConvertError,
  bin2hex,
  hex2bin,
};
pub use find::{
  count,
  count_chars,
  is_alnum,
  is_alpha,
  levenshtein,
  nth_index_of,
};
pub use format::{
  DEFAULT_FILL,
  DEFAULT_PAD_AMOUNT,
  Locale,
  PadSide,
  ParsePadSideError,
  center,
  lcword,
  lcwords,
  ltrim,
  money,
  money_in,
  nl2br,
  pad,
  reverse,
  rtrim,
  swapcase,
  ucword,
  ucwords,
  wordwrap,
};

pub type Tendril = SmartString<LazyCompact>;
