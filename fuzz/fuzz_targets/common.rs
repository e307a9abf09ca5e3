const MAX_INPUT_CHARS: usize = 512;

/// Splits fuzz input into two strings at the first NUL byte.
///
/// Invalid UTF-8 is replaced rather than rejected so every input exercises
/// the library, and each side is capped to keep the O(m * n) targets fast.
pub fn split_pair(data: &[u8]) -> (String, String) {
  let (left, right) = match data.iter().position(|&b| b == 0) {
    Some(idx) => (&data[..idx], &data[idx + 1..]),
    None => (data, &[][..]),
  };
  (capped(left), capped(right))
}

fn capped(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes)
    .chars()
    .take(MAX_INPUT_CHARS)
    .collect()
}
