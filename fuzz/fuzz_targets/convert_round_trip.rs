#![no_main]

use libfuzzer_sys::fuzz_target;
use stringops::{
  bin2hex,
  hex2bin,
};

fuzz_target!(|data: &[u8]| {
  let bin: String = data
    .iter()
    .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
    .map(|bit| if bit == 1 { '1' } else { '0' })
    .collect();
  if bin.is_empty() {
    return;
  }

  let hex = bin2hex(&bin).expect("binary digits always convert");
  let back = hex2bin(&hex).expect("hex output always parses");

  let stripped = bin.trim_start_matches('0');
  assert_eq!(back, if stripped.is_empty() { "0" } else { stripped });

  // Arbitrary text must never panic, only error.
  let _ = hex2bin(&String::from_utf8_lossy(data));
  let _ = bin2hex(&String::from_utf8_lossy(data));
});
