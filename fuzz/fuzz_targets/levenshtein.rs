#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use stringops::levenshtein;

use crate::common::split_pair;

fuzz_target!(|data: &[u8]| {
  let (a, b) = split_pair(data);
  let (m, n) = (a.chars().count(), b.chars().count());

  let d = levenshtein(&a, &b);
  assert_eq!(d, levenshtein(&b, &a), "distance must be symmetric");
  assert!(m.abs_diff(n) <= d, "distance below length difference");
  assert!(d <= m.max(n), "distance above longer length");
  assert_eq!(levenshtein(&a, &a), 0);
});
