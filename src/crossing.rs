//! The crossing codec: slots may straddle 32-bit word boundaries, so the
//! body is a flat run of `(1 + b)`-bit tag+payload slots followed by the
//! overflow table.

use crate::bit_stream::{BitReader, BitWriter};
use crate::constants::{HEADER_BITS, MAX_CROSSING_VALUE_BITS};
use crate::errors::{PackError, PackResult};
use crate::header::Header;
use crate::overflow::OverflowTable;
use crate::{bits::bit_length, width_optimizer};

/// A codec instance built either by `compress` (which retains the
/// original array) or `from_words` (which retains only the packed words
/// and reconstructs everything else from the header).
#[derive(Clone, Debug)]
pub struct CrossingCodec {
  header: Header,
  words: Vec<u32>,
  array: Option<Vec<u64>>,
}

impl CrossingCodec {
  pub fn header(&self) -> &Header {
    &self.header
  }

  pub fn words(&self) -> &[u32] {
    &self.words
  }

  /// Packs `array` into a crossing-layout codec instance.
  pub fn compress(array: &[u64]) -> PackResult<Self> {
    if array.is_empty() {
      return Err(PackError::empty_input());
    }
    for &v in array {
      let len = bit_length(v);
      if len > MAX_CROSSING_VALUE_BITS {
        return Err(PackError::value_too_wide(v, len));
      }
    }

    let params = width_optimizer::solve(array);
    let b = params.best_bit_length;
    let max_width = params.max_width;
    let overflow = OverflowTable::build(array, b);

    let header = Header {
      total_items: array.len() as u32,
      best_bit_length: b,
      max_width,
      total_overflow: overflow.len(),
    };

    let mut writer = BitWriter::new();
    header.write_to(&mut writer);

    for &v in array {
      if bit_length(v) <= b {
        writer.write_bits(0, 1);
        writer.write_bits(v as u32, b);
      } else {
        writer.write_bits(1, 1);
        writer.write_bits(overflow.index_of(v), b);
      }
    }

    for &entry in overflow.entries() {
      writer.write_bits(entry as u32, max_width);
    }

    writer.pad_to_word();
    let words = writer.finalize();

    Ok(CrossingCodec {
      header,
      words,
      array: Some(array.to_vec()),
    })
  }

  /// Wraps a previously-packed word sequence, parsing just the header.
  pub fn from_words(words: Vec<u32>) -> Self {
    let reader = BitReader::from_words(&words);
    let (header, _) = Header::parse_from(&reader);
    CrossingCodec {
      header,
      words,
      array: None,
    }
  }

  fn overflow_index_start(&self) -> usize {
    HEADER_BITS as usize
      + self.header.total_items as usize * (self.header.best_bit_length as usize + 1)
  }

  /// Fully reconstructs the original sequence from `words`.
  pub fn uncompress(&self) -> Vec<u64> {
    let reader = BitReader::from_words(&self.words);
    let b = self.header.best_bit_length;
    let max_width = self.header.max_width;
    let overflow_index_start = self.overflow_index_start();

    let mut result = Vec::with_capacity(self.header.total_items as usize);
    let mut cursor = HEADER_BITS as usize;
    for _ in 0..self.header.total_items {
      let (tag, next) = reader.read_bit(cursor);
      cursor = next;
      let (payload, next) = reader.read_bits(cursor, b);
      cursor = next;

      let value = if tag {
        let overflow_position = overflow_index_start + payload as usize * max_width as usize;
        let (overflow_value, _) = reader.read_bits(overflow_position, max_width);
        overflow_value as u64
      } else {
        payload as u64
      };
      result.push(value);
    }
    result
  }

  /// Random-access read of the `i`-th original value. O(1).
  pub fn get(&self, i: usize) -> PackResult<u64> {
    let total_items = self.header.total_items as usize;
    if i >= total_items {
      return Err(PackError::get_out_of_range(i, total_items));
    }

    let reader = BitReader::from_words(&self.words);
    let b = self.header.best_bit_length;
    let cursor = HEADER_BITS as usize + i * (b as usize + 1);
    let (tag, next) = reader.read_bit(cursor);
    let (payload, _) = reader.read_bits(next, b);

    if tag {
      let overflow_position =
        self.overflow_index_start() + payload as usize * self.header.max_width as usize;
      let (overflow_value, _) = reader.read_bits(overflow_position, self.header.max_width);
      Ok(overflow_value as u64)
    } else {
      Ok(payload as u64)
    }
  }

  /// The original array, if this instance was built by `compress` rather
  /// than loaded from packed words.
  pub fn array(&self) -> Option<&[u64]> {
    self.array.as_deref()
  }
}
