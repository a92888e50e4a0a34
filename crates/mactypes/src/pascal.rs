//! Pascal string decoding.
//!
//! A Pascal string is a length byte followed by that many characters in a
//! legacy 8-bit encoding. The fixed-capacity records live in
//! `mactypes_buffers`; this module turns them into text and back.

use mactypes_buffers::BoundedByteBuffer;
use mactypes_encoding::{resolve_current_legacy_encoding, LegacyEncoding};
use tracing::debug;

use crate::MacTypesError;

/// Decodes Pascal strings written in one legacy encoding.
///
/// A record whose length byte exceeds the maximum length, or the capacity
/// of the record, is rejected rather than truncated.
///
/// # Example
///
/// ```
/// use mactypes::{PascalStringDecoder, Str31};
///
/// let name = Str31::from_payload(b"Read Me").unwrap();
/// let decoder = PascalStringDecoder::default();
/// assert_eq!(decoder.decode(&name).as_deref(), Some("Read Me"));
/// assert_eq!(decoder.maximum_length(4).decode(&name), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PascalStringDecoder {
    encoding: LegacyEncoding,
    maximum_length: u8,
}

impl Default for PascalStringDecoder {
    fn default() -> Self {
        Self::new(LegacyEncoding::mac_roman())
    }
}

impl PascalStringDecoder {
    pub fn new(encoding: LegacyEncoding) -> Self {
        Self {
            encoding,
            maximum_length: u8::MAX,
        }
    }

    /// Creates a decoder for the encoding named by a WHATWG label.
    pub fn with_label(label: &str) -> Result<Self, MacTypesError> {
        Ok(Self::new(LegacyEncoding::for_label(label)?))
    }

    /// Creates a decoder for the host's current Classic-compatible encoding.
    pub fn current_classic() -> Self {
        Self::new(resolve_current_legacy_encoding())
    }

    /// Sets the largest length byte accepted.
    pub fn maximum_length(mut self, maximum_length: u8) -> Self {
        self.maximum_length = maximum_length;
        self
    }

    pub fn encoding(&self) -> LegacyEncoding {
        self.encoding
    }

    /// Decodes a length-prefixed record of any capacity.
    pub fn try_decode<const N: usize, const R: usize>(
        &self,
        buffer: &BoundedByteBuffer<N, R>,
    ) -> Result<String, MacTypesError> {
        let maximum = usize::from(self.maximum_length).min(N);
        let length = usize::from(buffer.length_prefix());
        if length > maximum {
            return Err(MacTypesError::InvalidLength { length, maximum });
        }
        let payload = buffer
            .payload()
            .ok_or(MacTypesError::InvalidLength { length, maximum })?;
        Ok(self.encoding.try_decode_bytes(payload)?)
    }

    pub fn decode<const N: usize, const R: usize>(
        &self,
        buffer: &BoundedByteBuffer<N, R>,
    ) -> Option<String> {
        self.try_decode(buffer)
            .inspect_err(|err| debug!(%err, capacity = N, "Pascal string rejected"))
            .ok()
    }

    /// Decodes a Pascal string at the start of `bytes`.
    ///
    /// Bytes past the declared length are ignored.
    pub fn try_decode_bytes(&self, bytes: &[u8]) -> Result<String, MacTypesError> {
        let (&length, rest) = bytes.split_first().ok_or(MacTypesError::Truncated {
            needed: 1,
            actual: 0,
        })?;
        let length = usize::from(length);
        let maximum = usize::from(self.maximum_length);
        if length > maximum {
            return Err(MacTypesError::InvalidLength { length, maximum });
        }
        let payload = rest.get(..length).ok_or(MacTypesError::Truncated {
            needed: 1 + length,
            actual: bytes.len(),
        })?;
        Ok(self.encoding.try_decode_bytes(payload)?)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Option<String> {
        self.try_decode_bytes(bytes)
            .inspect_err(|err| debug!(%err, "Pascal string rejected"))
            .ok()
    }
}

/// Decodes a Mac OS Roman Pascal string record.
pub fn string_from_pascal<const N: usize, const R: usize>(
    buffer: &BoundedByteBuffer<N, R>,
) -> Option<String> {
    PascalStringDecoder::default().decode(buffer)
}

/// Encodes `text` into a Pascal string record.
///
/// Text longer than the capacity once encoded is
/// [`MacTypesError::InvalidLength`]; it is not truncated.
///
/// # Example
///
/// ```
/// use mactypes::{pascal_from_string, LegacyEncoding, Str15};
///
/// let name: Str15 = pascal_from_string("Café", LegacyEncoding::mac_roman()).unwrap();
/// assert_eq!(name.payload(), Some(&[0x43, 0x61, 0x66, 0x8E][..]));
/// ```
pub fn pascal_from_string<const N: usize, const R: usize>(
    text: &str,
    encoding: LegacyEncoding,
) -> Result<BoundedByteBuffer<N, R>, MacTypesError> {
    let bytes = encoding.try_encode_text(text)?;
    if bytes.len() > N {
        return Err(MacTypesError::InvalidLength {
            length: bytes.len(),
            maximum: N,
        });
    }
    Ok(BoundedByteBuffer::from_payload(&bytes)?)
}
