use crate::Tendril;

pub fn ucword(text: &str) -> Tendril {
  let mut res = Tendril::new();
  ucword_with(text.chars(), &mut res);
  res
}

pub fn ucword_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  map_first_with(text, buf, char::to_uppercase);
}

pub fn lcword(text: &str) -> Tendril {
  let mut res = Tendril::new();
  lcword_with(text.chars(), &mut res);
  res
}

pub fn lcword_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  map_first_with(text, buf, char::to_lowercase);
}

pub fn ucwords(text: &str) -> Tendril {
  let mut res = Tendril::new();
  ucwords_with(text.chars(), &mut res);
  res
}

pub fn ucwords_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  map_word_starts_with(text, buf, char::to_uppercase);
}

pub fn lcwords(text: &str) -> Tendril {
  let mut res = Tendril::new();
  lcwords_with(text.chars(), &mut res);
  res
}

pub fn lcwords_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  map_word_starts_with(text, buf, char::to_lowercase);
}

pub fn swapcase(text: &str) -> Tendril {
  let mut res = Tendril::new();
  swapcase_with(text.chars(), &mut res);
  res
}

/// Only ASCII letters are flipped.
pub fn swapcase_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| {
    if c.is_ascii_uppercase() {
      buf.push(c.to_ascii_lowercase());
    } else if c.is_ascii_lowercase() {
      buf.push(c.to_ascii_uppercase());
    } else {
      buf.push(c);
    }
  });
}

fn map_first_with<I>(mut text: impl Iterator<Item = char>, buf: &mut Tendril, map: fn(char) -> I)
where
  I: Iterator<Item = char>,
{
  if let Some(first) = text.next() {
    buf.extend(map(first));
  }
  buf.extend(text);
}

/// Words are delimited by a single ASCII space, so a run of spaces yields
/// empty words and nothing else is treated as a boundary.
fn map_word_starts_with<I>(text: impl Iterator<Item = char>, buf: &mut Tendril, map: fn(char) -> I)
where
  I: Iterator<Item = char>,
{
  text.fold(true, |word_start, c| {
    if c == ' ' {
      buf.push(c);
      return true;
    }
    if word_start {
      buf.extend(map(c));
    } else {
      buf.push(c);
    }
    false
  });
}
