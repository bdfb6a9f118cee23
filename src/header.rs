//! The 76-bit header shared by both codec variants.

use crate::bit_stream::{BitReader, BitWriter};
use crate::constants::{
  BITS_FOR_BEST_BIT_LENGTH, BITS_FOR_MAX_WIDTH, BITS_FOR_TOTAL_ITEMS, BITS_FOR_TOTAL_OVERFLOW,
  HEADER_BITS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
  pub total_items: u32,
  pub best_bit_length: u32,
  pub max_width: u32,
  pub total_overflow: u32,
}

impl Header {
  pub fn write_to(&self, writer: &mut BitWriter) {
    writer.write_bits(self.total_items, BITS_FOR_TOTAL_ITEMS);
    writer.write_bits(self.best_bit_length, BITS_FOR_BEST_BIT_LENGTH);
    writer.write_bits(self.max_width, BITS_FOR_MAX_WIDTH);
    writer.write_bits(self.total_overflow, BITS_FOR_TOTAL_OVERFLOW);
  }

  /// Parses a header starting at bit offset 0, returning it along with the
  /// cursor immediately after it (always `HEADER_BITS`).
  pub fn parse_from(reader: &BitReader) -> (Self, usize) {
    let mut cursor = 0;
    let (total_items, next) = reader.read_bits(cursor, BITS_FOR_TOTAL_ITEMS);
    cursor = next;
    let (best_bit_length, next) = reader.read_bits(cursor, BITS_FOR_BEST_BIT_LENGTH);
    cursor = next;
    let (max_width, next) = reader.read_bits(cursor, BITS_FOR_MAX_WIDTH);
    cursor = next;
    let (total_overflow, next) = reader.read_bits(cursor, BITS_FOR_TOTAL_OVERFLOW);
    cursor = next;
    debug_assert_eq!(cursor, HEADER_BITS as usize);

    (
      Header {
        total_items,
        best_bit_length,
        max_width,
        total_overflow,
      },
      cursor,
    )
  }
}
