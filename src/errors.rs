use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The different kinds of errors this crate can return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
  /// `compress` was called with a zero-length input.
  EmptyInput,
  /// An input value's bit length exceeded the variant's limit
  /// (32 bits for crossing, 30 bits for non-crossing).
  ValueTooWide { max_bits: u32 },
  /// The variant factory was given a tag other than `crossing`/`nocrossing`.
  UnknownVariant,
  /// The non-crossing `get_overflow` scan reached the end of the stream
  /// without finding the requested overflow index. Indicates corrupted
  /// input; never happens on streams produced by this crate's own
  /// `compress`.
  OverflowNotFound,
  /// `get(i)` was called with `i >= total_items`.
  GetOutOfRange { index: usize, total_items: usize },
}

/// The error type used in results for all `packedseq` functionality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackError {
  pub kind: ErrorKind,
  pub message: String,
}

impl PackError {
  pub(crate) fn new<S: AsRef<str>>(kind: ErrorKind, message: S) -> Self {
    PackError {
      kind,
      message: message.as_ref().to_string(),
    }
  }

  pub(crate) fn empty_input() -> Self {
    Self::new(
      ErrorKind::EmptyInput,
      "cannot compress an empty input sequence",
    )
  }

  pub(crate) fn value_too_wide(value: u64, bit_length: u32) -> Self {
    Self::new(
      ErrorKind::ValueTooWide { max_bits: 32 },
      format!(
        "value {} has bit length {}, exceeding the 32-bit crossing limit",
        value, bit_length,
      ),
    )
  }

  pub(crate) fn value_too_wide_no_crossing(value: u64, bit_length: u32) -> Self {
    Self::new(
      ErrorKind::ValueTooWide { max_bits: 30 },
      format!(
        "value {} has bit length {}, exceeding the 30-bit non-crossing limit",
        value, bit_length,
      ),
    )
  }

  pub(crate) fn unknown_variant<S: AsRef<str>>(tag: S) -> Self {
    Self::new(
      ErrorKind::UnknownVariant,
      format!("unknown codec variant tag {:?}", tag.as_ref()),
    )
  }

  pub(crate) fn overflow_not_found(index: usize) -> Self {
    Self::new(
      ErrorKind::OverflowNotFound,
      format!(
        "scanned to the end of the stream without finding overflow index {}",
        index,
      ),
    )
  }

  pub(crate) fn get_out_of_range(index: usize, total_items: usize) -> Self {
    Self::new(
      ErrorKind::GetOutOfRange { index, total_items },
      format!(
        "index {} is out of range for a sequence of {} items",
        index, total_items,
      ),
    )
  }
}

impl Display for PackError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "packedseq {:?} error: {}", self.kind, &self.message)
  }
}

impl Error for PackError {}

pub type PackResult<T> = Result<T, PackError>;
