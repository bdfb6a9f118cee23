//! Named bit widths for the header fields and variant value limits.
//!
//! Kept as named constants rather than inline literals so the header
//! layout in `header.rs` stays self-documenting.

pub const WORD_BITS: u32 = 32;

// header field widths, in emission order
pub const BITS_FOR_TOTAL_ITEMS: u32 = 32;
pub const BITS_FOR_BEST_BIT_LENGTH: u32 = 6; // (32).bit_length() == 6
pub const BITS_FOR_MAX_WIDTH: u32 = 6;
pub const BITS_FOR_TOTAL_OVERFLOW: u32 = 32;

pub const HEADER_BITS: u32 =
  BITS_FOR_TOTAL_ITEMS + BITS_FOR_BEST_BIT_LENGTH + BITS_FOR_MAX_WIDTH + BITS_FOR_TOTAL_OVERFLOW;

// per-variant value width limits
pub const MAX_CROSSING_VALUE_BITS: u32 = 32;
pub const MAX_NONCROSSING_VALUE_BITS: u32 = 30;

// non-crossing framing overhead: 1 leading framing bit + 1 kind bit per body slot
pub const NONCROSSING_BODY_FRAMING_BITS: u32 = 2;
// non-crossing suffix slot overhead: 1 leading framing bit per overflow entry
pub const NONCROSSING_SUFFIX_FRAMING_BITS: u32 = 1;
