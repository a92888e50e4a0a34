//! Length-prefixed fixed-capacity byte buffers.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::BufferError;

/// A Pascal string record with room for `N` payload bytes.
///
/// The wire layout is one length byte, `N` payload bytes, then `RESERVED`
/// bytes that are never interpreted. The length byte is kept exactly as it
/// was read, so a record may claim more bytes than it can hold. Such a
/// record has no payload; it is never truncated to fit.
///
/// # Example
///
/// ```
/// use mactypes_buffers::{Str15, Str32Field};
///
/// let name = Str15::from_payload(b"Untitled").unwrap();
/// assert_eq!(name.length_prefix(), 8);
/// assert_eq!(name.payload(), Some(&b"Untitled"[..]));
///
/// assert_eq!(Str32Field::WIRE_SIZE, 34);
/// ```
///
/// Equality and hashing look at the length byte, the bytes it covers and the
/// reserved trailer. Junk past the length is ignored. A record whose length
/// byte exceeds the capacity compares its whole payload area.
#[derive(Clone)]
pub struct BoundedByteBuffer<const N: usize, const RESERVED: usize = 0> {
    length: u8,
    payload: [u8; N],
    reserved: [u8; RESERVED],
}

/// 256-byte record, up to 255 characters.
pub type Str255 = BoundedByteBuffer<255>;
/// 64-byte record, up to 63 characters.
pub type Str63 = BoundedByteBuffer<63>;
/// 33-byte record, up to 32 characters.
pub type Str32 = BoundedByteBuffer<32>;
/// 32-byte record, up to 31 characters.
pub type Str31 = BoundedByteBuffer<31>;
/// 28-byte record, up to 27 characters.
pub type Str27 = BoundedByteBuffer<27>;
/// 16-byte record, up to 15 characters.
pub type Str15 = BoundedByteBuffer<15>;
/// 34-byte record, up to 32 characters.
///
/// The last byte pads the record for network transfer and is never read.
pub type Str32Field = BoundedByteBuffer<32, 1>;

impl<const N: usize, const RESERVED: usize> BoundedByteBuffer<N, RESERVED> {
    /// Maximum payload length.
    pub const CAPACITY: usize = N;

    /// Size of the record on the wire, length byte and trailer included.
    pub const WIRE_SIZE: usize = 1 + N + RESERVED;

    const LENGTH_FITS_IN_PREFIX: () = assert!(
        N <= u8::MAX as usize,
        "Pascal string capacity must fit in the length byte"
    );

    /// Creates an empty record with every byte zeroed.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LENGTH_FITS_IN_PREFIX;
        Self {
            length: 0,
            payload: [0; N],
            reserved: [0; RESERVED],
        }
    }

    /// Copies a record from its exact wire representation.
    ///
    /// The length byte and the reserved trailer are kept as-is.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, BufferError> {
        if bytes.len() != Self::WIRE_SIZE {
            return Err(BufferError::WireSize {
                expected: Self::WIRE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut buffer = Self::new();
        buffer.length = bytes[0];
        buffer.payload.copy_from_slice(&bytes[1..1 + N]);
        buffer.reserved.copy_from_slice(&bytes[1 + N..]);
        Ok(buffer)
    }

    /// Creates a record holding `bytes`.
    pub fn from_payload(bytes: &[u8]) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer.set_payload(bytes)?;
        Ok(buffer)
    }

    /// Returns the wire representation of the record.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIRE_SIZE);
        out.push(self.length);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.reserved);
        out
    }

    /// The length byte as stored, which may exceed [`Self::CAPACITY`].
    pub fn length_prefix(&self) -> u8 {
        self.length
    }

    /// Returns `true` when the length byte is within capacity.
    pub fn is_valid(&self) -> bool {
        usize::from(self.length) <= N
    }

    /// Returns the bytes covered by the length byte.
    ///
    /// Returns `None` if the length byte exceeds the capacity.
    pub fn payload(&self) -> Option<&[u8]> {
        let length = usize::from(self.length);
        if length > N {
            return None;
        }
        Some(&self.payload[..length])
    }

    /// The bytes covered by the length byte, clamped to the capacity.
    fn visible(&self) -> &[u8] {
        &self.payload[..usize::from(self.length).min(N)]
    }

    /// The whole payload area, including bytes past the length.
    pub fn payload_area(&self) -> &[u8; N] {
        &self.payload
    }

    /// The reserved trailer.
    pub fn reserved(&self) -> &[u8; RESERVED] {
        &self.reserved
    }

    /// Replaces the payload, zeroing unused payload bytes.
    ///
    /// The reserved trailer is left untouched.
    pub fn set_payload(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.len() > N {
            return Err(BufferError::Overflow {
                length: bytes.len(),
                capacity: N,
            });
        }
        self.payload = [0; N];
        self.payload[..bytes.len()].copy_from_slice(bytes);
        // Fits: N <= 255 is checked in `new`.
        self.length = bytes.len() as u8;
        Ok(())
    }
}

impl<const N: usize, const RESERVED: usize> Default for BoundedByteBuffer<N, RESERVED> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const RESERVED: usize> TryFrom<&[u8]> for BoundedByteBuffer<N, RESERVED> {
    type Error = BufferError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_wire(bytes)
    }
}

impl<const N: usize, const RESERVED: usize> PartialEq for BoundedByteBuffer<N, RESERVED> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.visible() == other.visible()
            && self.reserved == other.reserved
    }
}

impl<const N: usize, const RESERVED: usize> Eq for BoundedByteBuffer<N, RESERVED> {}

impl<const N: usize, const RESERVED: usize> Hash for BoundedByteBuffer<N, RESERVED> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.visible().hash(state);
        self.reserved.hash(state);
    }
}

impl<const N: usize, const RESERVED: usize> fmt::Debug for BoundedByteBuffer<N, RESERVED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedByteBuffer")
            .field("capacity", &N)
            .field("length", &self.length)
            .field("payload", &format_octets(self.visible()))
            .finish()
    }
}

fn format_octets(octets: &[u8]) -> String {
    let mut out = String::with_capacity(octets.len() * 3);
    for (i, byte) in octets.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
