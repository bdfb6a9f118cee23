//! Variant selection and dispatch: a caller picks `crossing` or
//! `nocrossing` by tag, gets back a `Codec` that hides which concrete
//! struct it wraps.

use std::str::FromStr;

use crate::crossing::CrossingCodec;
use crate::errors::{PackError, PackResult};
use crate::non_crossing::NonCrossingCodec;

/// Which packing layout a `Codec` uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
  Crossing,
  NonCrossing,
}

impl FromStr for Variant {
  type Err = PackError;

  fn from_str(tag: &str) -> PackResult<Self> {
    match tag {
      "crossing" => Ok(Variant::Crossing),
      "nocrossing" => Ok(Variant::NonCrossing),
      other => Err(PackError::unknown_variant(other)),
    }
  }
}

/// A codec instance of either variant, dispatched at the call site so
/// callers that pick a variant by runtime tag don't need to match on it
/// themselves for every operation.
#[derive(Clone, Debug)]
pub enum Codec {
  Crossing(CrossingCodec),
  NonCrossing(NonCrossingCodec),
}

impl Codec {
  /// Packs `array` using the requested variant.
  pub fn compress(variant: Variant, array: &[u64]) -> PackResult<Self> {
    match variant {
      Variant::Crossing => CrossingCodec::compress(array).map(Codec::Crossing),
      Variant::NonCrossing => NonCrossingCodec::compress(array).map(Codec::NonCrossing),
    }
  }

  /// Wraps a previously-packed word sequence known to be in `variant`'s
  /// layout. The variant tag itself is not recoverable from `words` alone;
  /// there is no framing or magic number in the wire format, so callers
  /// must know the variant out-of-band.
  pub fn from_words(variant: Variant, words: Vec<u32>) -> Self {
    match variant {
      Variant::Crossing => Codec::Crossing(CrossingCodec::from_words(words)),
      Variant::NonCrossing => Codec::NonCrossing(NonCrossingCodec::from_words(words)),
    }
  }

  pub fn words(&self) -> &[u32] {
    match self {
      Codec::Crossing(c) => c.words(),
      Codec::NonCrossing(c) => c.words(),
    }
  }

  pub fn uncompress(&self) -> PackResult<Vec<u64>> {
    match self {
      Codec::Crossing(c) => Ok(c.uncompress()),
      Codec::NonCrossing(c) => c.uncompress(),
    }
  }

  pub fn get(&self, i: usize) -> PackResult<u64> {
    match self {
      Codec::Crossing(c) => c.get(i),
      Codec::NonCrossing(c) => c.get(i),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_variant_from_str() {
    assert_eq!("crossing".parse::<Variant>().unwrap(), Variant::Crossing);
    assert_eq!(
      "nocrossing".parse::<Variant>().unwrap(),
      Variant::NonCrossing
    );
  }

  #[test]
  fn test_unknown_variant_tag() {
    let err = "sideways".parse::<Variant>().unwrap_err();
    assert_eq!(err.kind, crate::errors::ErrorKind::UnknownVariant);
  }

  #[test]
  fn test_dispatch_round_trip_both_variants() {
    let array = vec![0_u64, 1, 2, 3, 100_000];
    for variant in [Variant::Crossing, Variant::NonCrossing] {
      let codec = Codec::compress(variant, &array).unwrap();
      assert_eq!(codec.uncompress().unwrap(), array);
      assert_eq!(codec.get(4).unwrap(), 100_000);

      let reloaded = Codec::from_words(variant, codec.words().to_vec());
      assert_eq!(reloaded.uncompress().unwrap(), array);
    }
  }
}
