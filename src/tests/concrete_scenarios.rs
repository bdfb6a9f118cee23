//! Concrete end-to-end scenarios covering small ascending sequences,
//! repeated values, deduplicated overflow, a mixed-magnitude distribution,
//! empty input, width boundaries, and the cost model, all exercised
//! through the public API.

use crate::cost_model::CostStats;
use crate::crossing::CrossingCodec;
use crate::errors::ErrorKind;
use crate::non_crossing::NonCrossingCodec;
use crate::variant::{Codec, Variant};

#[test]
fn s1_small_ascending_sequence_crossing() {
  let array = vec![0_u64, 1, 2, 3];
  let codec = CrossingCodec::compress(&array).unwrap();
  let header = codec.header();
  assert_eq!(header.total_items, 4);
  assert_eq!(header.best_bit_length, 1);
  assert_eq!(header.max_width, 2);
  assert_eq!(header.total_overflow, 2);
  assert_eq!(codec.uncompress(), array);
  assert_eq!(codec.get(2).unwrap(), 2);
}

#[test]
fn s2_repeated_value_no_overflow_crossing() {
  let array = vec![7_u64; 1000];
  let codec = CrossingCodec::compress(&array).unwrap();
  assert_eq!(codec.header().total_overflow, 0);
  assert_eq!(codec.uncompress(), array);
  assert_eq!(codec.get(999).unwrap(), 7);
}

#[test]
fn s3_dedup_overflow_non_crossing() {
  let mut array = vec![5_u64; 500];
  array.extend(vec![100_000_u64; 3]);
  let codec = NonCrossingCodec::compress(&array).unwrap();
  assert_eq!(codec.header().total_overflow, 1);
  assert_eq!(codec.uncompress().unwrap(), array);
  assert_eq!(codec.get(500).unwrap(), 100_000);
}

#[test]
fn s4_mixed_distribution_round_trip_and_random_probes() {
  let mut array = Vec::with_capacity(10_000);
  array.extend((0..4500).map(|i| (i * 2) % 10_000));
  array.extend((0..4500).map(|i| 9_999 + (i * 20) % 90_000));
  array.extend((0..1000).map(|i| 99_999 + (i * 900) % 900_000));
  let array: Vec<u64> = array.into_iter().map(|v| v as u64).collect();

  // deterministic "random" probe indices, spread across the sequence
  let probes = [0usize, 137, 1001, 2500, 4499, 4501, 6000, 7999, 8999, 9999];

  for variant in [Variant::Crossing, Variant::NonCrossing] {
    let codec = Codec::compress(variant, &array).unwrap();
    assert_eq!(codec.uncompress().unwrap(), array);
    for &i in &probes {
      assert_eq!(codec.get(i).unwrap(), array[i]);
    }
  }
}

#[test]
fn s5_empty_input_rejected() {
  let err = CrossingCodec::compress(&[]).unwrap_err();
  assert_eq!(err.kind, ErrorKind::EmptyInput);
  let err = NonCrossingCodec::compress(&[]).unwrap_err();
  assert_eq!(err.kind, ErrorKind::EmptyInput);
}

#[test]
fn s6_value_too_wide_for_non_crossing_but_not_crossing() {
  let value = 1_u64 << 31;
  let err = NonCrossingCodec::compress(&[value]).unwrap_err();
  assert!(matches!(err.kind, ErrorKind::ValueTooWide { max_bits: 30 }));
  assert!(CrossingCodec::compress(&[value]).is_ok());
}

#[test]
fn s7_cost_model_predicts_compression_wins() {
  let stats = CostStats {
    compressed_words: 3000,
    total_items: 10_000,
    compression_time: 0.01,
    decompression_time: 0.01,
  };
  assert!(stats.is_compression_better(1e6, 0.05));
}
