#![no_main]

mod common;

use libfuzzer_sys::fuzz_target;
use stringops::{
  count,
  nth_index_of,
};

use crate::common::split_pair;

fuzz_target!(|data: &[u8]| {
  let (haystack, needle) = split_pair(data);

  let n = count(&haystack, &needle);
  assert!(nth_index_of(&haystack, &needle, n + 1).is_none());
  if n > 0 {
    let last = nth_index_of(&haystack, &needle, n).expect("last match exists");
    assert!(last <= haystack.chars().count());
  }
});
