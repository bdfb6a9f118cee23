//! `packedseq` packs a sequence of non-negative integers into 32-bit words
//! using a per-item bit width chosen to minimize the packed size, with
//! values above that width indirected through a deduplicated overflow
//! table.
//!
//! Two layouts are available:
//! - [`crossing::CrossingCodec`] — slots may straddle 32-bit word
//!   boundaries; `get` is O(1).
//! - [`non_crossing::NonCrossingCodec`] — every slot fits within one word;
//!   `get` is O(total bits) because overflow resolution rescans the
//!   suffix region from the header.
//!
//! [`variant::Codec`] dispatches between the two by a runtime
//! [`variant::Variant`] tag, and [`cost_model::CostStats`] predicts whether
//! shipping the compressed form over a link beats shipping the raw one.

pub use bit_stream::{BitReader, BitWriter};
pub use cost_model::CostStats;
pub use crossing::CrossingCodec;
pub use errors::{ErrorKind, PackError, PackResult};
pub use non_crossing::NonCrossingCodec;
pub use variant::{Codec, Variant};

mod bit_stream;
mod bits;
mod constants;
mod cost_model;
mod crossing;
pub mod errors;
mod header;
mod non_crossing;
mod overflow;
mod variant;
mod width_optimizer;

#[cfg(test)]
mod tests;
