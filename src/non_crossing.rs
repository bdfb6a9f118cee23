//! The non-crossing codec: every slot lies entirely within one 32-bit
//! word. Each slot opens with a framing bit `1`; a `0` encountered where a
//! slot is expected is padding and is skipped.

use crate::bit_stream::{BitReader, BitWriter};
use crate::constants::{HEADER_BITS, MAX_NONCROSSING_VALUE_BITS};
use crate::errors::{PackError, PackResult};
use crate::header::Header;
use crate::overflow::OverflowTable;
use crate::{bits::bit_length, width_optimizer};

#[derive(Clone, Debug)]
pub struct NonCrossingCodec {
  header: Header,
  words: Vec<u32>,
  array: Option<Vec<u64>>,
}

impl NonCrossingCodec {
  pub fn header(&self) -> &Header {
    &self.header
  }

  pub fn words(&self) -> &[u32] {
    &self.words
  }

  pub fn array(&self) -> Option<&[u64]> {
    self.array.as_deref()
  }

  pub fn compress(array: &[u64]) -> PackResult<Self> {
    if array.is_empty() {
      return Err(PackError::empty_input());
    }
    for &v in array {
      let len = bit_length(v);
      if len > MAX_NONCROSSING_VALUE_BITS {
        return Err(PackError::value_too_wide_no_crossing(v, len));
      }
    }

    // Deliberately the same optimizer the crossing codec uses: it targets
    // the crossing layout's bit cost, not this variant's b+2 body slots.
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

    let slot_width = b + 2;
    for &v in array {
      writer.align_to_word_if_needed(slot_width);
      if bit_length(v) <= b {
        writer.write_bits(0b10, 2);
        writer.write_bits(v as u32, b);
      } else {
        writer.write_bits(0b11, 2);
        writer.write_bits(overflow.index_of(v), b);
      }
    }

    let suffix_slot_width = max_width + 1;
    for &entry in overflow.entries() {
      writer.align_to_word_if_needed(suffix_slot_width);
      writer.write_bits(1, 1);
      writer.write_bits(entry as u32, max_width);
    }

    writer.pad_to_word();
    let words = writer.finalize();

    Ok(NonCrossingCodec {
      header,
      words,
      array: Some(array.to_vec()),
    })
  }

  pub fn from_words(words: Vec<u32>) -> Self {
    let reader = BitReader::from_words(&words);
    let (header, _) = Header::parse_from(&reader);
    NonCrossingCodec {
      header,
      words,
      array: None,
    }
  }

  /// Resolves overflow index `p` by scanning forward from the end of the
  /// header, skipping padding, past the `total_items` body slots and into
  /// the suffix region. O(total_bits).
  fn get_overflow(&self, p: u32) -> PackResult<u64> {
    let reader = BitReader::from_words(&self.words);
    let b = self.header.best_bit_length;
    let max_width = self.header.max_width;
    let total_items = self.header.total_items;
    let bit_len = reader.bit_len();

    let mut cursor = HEADER_BITS as usize;
    let mut body_count = 0_u32;
    let mut overflow_count = 0_u32;
    while cursor < bit_len {
      let (framed, next) = reader.read_bit(cursor);
      cursor = next;
      if !framed {
        continue;
      }
      if body_count < total_items {
        body_count += 1;
        cursor += 1 + b as usize;
      } else if overflow_count == p {
        let (value, _) = reader.read_bits(cursor, max_width);
        return Ok(value as u64);
      } else {
        overflow_count += 1;
        cursor += max_width as usize;
      }
    }
    Err(PackError::overflow_not_found(p as usize))
  }

  /// Fully reconstructs the original sequence from `words`.
  pub fn uncompress(&self) -> PackResult<Vec<u64>> {
    let reader = BitReader::from_words(&self.words);
    let b = self.header.best_bit_length;
    let total_items = self.header.total_items as usize;

    let mut result = Vec::with_capacity(total_items);
    let mut cursor = HEADER_BITS as usize;
    while result.len() < total_items {
      let (framed, next) = reader.read_bit(cursor);
      cursor = next;
      if !framed {
        continue;
      }
      let (kind, next) = reader.read_bit(cursor);
      cursor = next;
      let (payload, next) = reader.read_bits(cursor, b);
      cursor = next;

      let value = if kind {
        self.get_overflow(payload)?
      } else {
        payload as u64
      };
      result.push(value);
    }
    Ok(result)
  }

  /// Random-access read of the `i`-th original value. O(total_bits) in
  /// the worst case because locating overflow values rescans the suffix
  /// region from the header.
  pub fn get(&self, i: usize) -> PackResult<u64> {
    let total_items = self.header.total_items as usize;
    if i >= total_items {
      return Err(PackError::get_out_of_range(i, total_items));
    }

    let reader = BitReader::from_words(&self.words);
    let b = self.header.best_bit_length;

    let mut cursor = HEADER_BITS as usize;
    let mut count = 0_usize;
    loop {
      let (framed, next) = reader.read_bit(cursor);
      cursor = next;
      if !framed {
        continue;
      }
      let (kind, next) = reader.read_bit(cursor);
      cursor = next;
      let (payload, next) = reader.read_bits(cursor, b);
      cursor = next;

      if count == i {
        return if kind {
          self.get_overflow(payload)
        } else {
          Ok(payload as u64)
        };
      }
      count += 1;
    }
  }
}
