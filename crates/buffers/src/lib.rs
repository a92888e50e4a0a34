//! Fixed-width legacy string buffers.
//!
//! This crate models the on-disk and on-wire string records of the classic
//! Mac toolbox: length-prefixed Pascal strings of a fixed capacity, and the
//! UTF-16 file names used by HFS+ catalogs. It only moves bytes around;
//! turning those bytes into text is the job of `mactypes`.
//!
//! # Overview
//!
//! - [`BoundedByteBuffer`] - A length byte followed by `N` payload bytes
//! - [`Str255`], [`Str63`], [`Str32`], [`Str31`], [`Str27`], [`Str15`] - The toolbox capacities
//! - [`Str32Field`] - A `Str32` with one reserved trailing byte
//! - [`HfsUniStr255`] - An HFS+ name, up to 255 UTF-16 code units
//!
//! # Example
//!
//! ```
//! use mactypes_buffers::Str31;
//!
//! let mut wire = vec![0u8; Str31::WIRE_SIZE];
//! wire[0] = 3;
//! wire[1..4].copy_from_slice(b"abc");
//!
//! let buffer = Str31::from_wire(&wire).unwrap();
//! assert_eq!(buffer.payload(), Some(&b"abc"[..]));
//! assert_eq!(buffer.to_wire(), wire);
//! ```

mod bounded;
mod hfs_uni_str;

pub use bounded::{BoundedByteBuffer, Str15, Str255, Str27, Str31, Str32, Str32Field, Str63};
pub use hfs_uni_str::HfsUniStr255;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The wire record does not have the fixed size of the buffer type.
    #[error("expected a {expected}-byte record, got {actual} bytes")]
    WireSize { expected: usize, actual: usize },
    /// The payload does not fit in the buffer.
    #[error("payload of {length} units exceeds capacity {capacity}")]
    Overflow { length: usize, capacity: usize },
}
