//! Conversion between binary and hexadecimal digit strings.
//!
//! Both directions work one hex digit (four bits) at a time, so there is no
//! integer width limit: a 200-bit binary literal converts just as well as a
//! 20-bit one.
//!
//! Unlike a `parseInt`-style conversion, malformed input is reported through
//! [`ConvertError`] rather than producing a degenerate result.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
  #[error("no digits to convert")]
  Empty,
  #[error("invalid base-{radix} digit {digit:?} at index {index}")]
  InvalidDigit {
    digit: char,
    index: usize,
    radix: u32,
  },
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Converts a binary string to uppercase hexadecimal with no leading zeros.
///
/// ```
/// assert_eq!(stringops::bin2hex("1100110111101010110111").unwrap(), "337AB7");
/// ```
pub fn bin2hex(bin: &str) -> Result<String> {
  let bits = digits(bin.trim(), 2)?;
  let bits = strip_leading_zeros(&bits);

  // Left-align the first group so every following group is a full nibble.
  let head = bits.len() % 4;
  let mut hex = String::with_capacity(bits.len() / 4 + 1);
  if head != 0 {
    hex.push(nibble_to_hex(&bits[..head]));
  }
  for group in bits[head..].chunks(4) {
    hex.push(nibble_to_hex(group));
  }

  Ok(hex)
}

/// Converts a hexadecimal string (either case, optional `0x` prefix) to
/// binary with no leading zeros.
///
/// ```
/// assert_eq!(stringops::hex2bin("337ab7").unwrap(), "1100110111101010110111");
/// ```
pub fn hex2bin(hex: &str) -> Result<String> {
  let hex = hex.trim();
  let hex = hex
    .strip_prefix("0x")
    .or_else(|| hex.strip_prefix("0X"))
    .unwrap_or(hex);

  let nibbles = digits(hex, 16)?;
  let mut bits = Vec::with_capacity(nibbles.len() * 4);
  for nibble in nibbles {
    bits.extend((0..4).rev().map(|shift| (nibble >> shift) & 1));
  }

  Ok(
    strip_leading_zeros(&bits)
      .iter()
      .map(|&bit| if bit == 1 { '1' } else { '0' })
      .collect(),
  )
}

fn digits(text: &str, radix: u32) -> Result<Vec<u8>> {
  if text.is_empty() {
    return Err(ConvertError::Empty);
  }

  text
    .chars()
    .enumerate()
    .map(|(index, digit)| {
      digit
        .to_digit(radix)
        .map(|value| value as u8)
        .ok_or(ConvertError::InvalidDigit {
          digit,
          index,
          radix,
        })
    })
    .collect()
}

/// Always leaves at least one digit so zero renders as `0`.
fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
  let first = digits
    .iter()
    .position(|&d| d != 0)
    .unwrap_or(digits.len().saturating_sub(1));
  &digits[first..]
}

fn nibble_to_hex(bits: &[u8]) -> char {
  let value = bits.iter().fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
  HEX_DIGITS[value] as char
}
