//! Chooses the per-item payload width `b` that minimizes the crossing
//! layout's word count. Both codecs call `solve`; the non-crossing codec
//! intentionally reuses the crossing cost function rather than modeling
//! its own `b + 2` body-slot cost, so it targets the crossing layout's
//! size even though its own slots are two bits wider.

use crate::bits::{bit_length, ceil_div};

/// The result of running the optimizer over an input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthParams {
  pub best_bit_length: u32,
  pub max_width: u32,
}

/// Finds `b*` and `max_width` for a non-empty input. Callers must reject
/// empty input themselves; this function assumes `array` is non-empty.
pub fn solve(array: &[u64]) -> WidthParams {
  debug_assert!(!array.is_empty());

  let lengths: Vec<u32> = array.iter().map(|&v| bit_length(v)).collect();
  let max_width = lengths.iter().copied().max().unwrap_or(0);

  let mut best_b = 1;
  let mut best_words: Option<u64> = None;

  // candidates are 1..=max_width-1; empty when max_width <= 1
  for b in 1..max_width {
    let k = lengths.iter().filter(|&&len| len > b).count() as u64;
    if bit_length(k) > b {
      continue;
    }

    let mut total_bits: u64 = 0;
    for &len in &lengths {
      total_bits += if len <= b {
        (b + 1) as u64
      } else {
        (b + 1 + max_width) as u64
      };
    }
    let words = ceil_div(total_bits, 32);

    // keep the largest b achieving the minimum word count
    if best_words.is_none() || words <= best_words.unwrap() {
      best_b = b;
      best_words = Some(words);
    }
  }

  WidthParams {
    best_bit_length: best_b,
    max_width,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_s1_example() {
    let params = solve(&[0, 1, 2, 3]);
    assert_eq!(params.best_bit_length, 1);
    assert_eq!(params.max_width, 2);
  }

  #[test]
  fn test_repeated_small_values() {
    let array = vec![7_u64; 1000];
    let params = solve(&array);
    assert_eq!(params.max_width, 3);
    assert_eq!(params.best_bit_length, 3);
  }

  #[test]
  fn test_pathological_all_ones_falls_back_to_b_one() {
    // every value has bit_length 1, so max_width == 1 and the candidate
    // range 1..max_width is empty.
    let params = solve(&[1, 1, 1]);
    assert_eq!(params.max_width, 1);
    assert_eq!(params.best_bit_length, 1);
  }

  #[test]
  fn test_single_zero() {
    let params = solve(&[0]);
    assert_eq!(params.max_width, 0);
    assert_eq!(params.best_bit_length, 1);
  }
}
