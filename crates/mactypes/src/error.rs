//! Error type shared by the codecs.

use mactypes_buffers::BufferError;
use mactypes_encoding::EncodingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacTypesError {
    /// The length byte exceeds the capacity or the caller's maximum.
    #[error("length prefix {length} exceeds maximum {maximum}")]
    InvalidLength { length: usize, maximum: usize },
    /// A raw slice is shorter than its length byte claims.
    #[error("Pascal string needs {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    /// No single-byte legacy encoding matches the label.
    #[error("legacy encoding unavailable: `{0}`")]
    EncodingUnavailable(String),
    /// The payload has bytes unmapped in the decoding encoding.
    #[error("bytes are not valid {encoding}")]
    UndecodableBytes { encoding: &'static str },
    /// One of the four bytes is a control character.
    #[error("type code 0x{0:08X} contains control characters")]
    NonPrintableTypeCode(u32),
    /// Text given for a type code is empty or outside Mac OS Roman.
    #[error("text is empty or not representable in {encoding}")]
    EmptyOrUnencodableText { encoding: &'static str },
    /// Text given for a Pascal string is outside the target encoding.
    #[error("text cannot be represented in {encoding}")]
    UnencodableText { encoding: &'static str },
    /// The code matches no icon type code.
    #[error("0x{0:08X} is not a known icon type code")]
    UnknownIconCode(u32),
    /// A record could not be built or parsed.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl From<EncodingError> for MacTypesError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::Unavailable(label) => MacTypesError::EncodingUnavailable(label),
            EncodingError::UndecodableBytes { encoding } => {
                MacTypesError::UndecodableBytes { encoding }
            }
            EncodingError::UnencodableText { encoding } => {
                MacTypesError::UnencodableText { encoding }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_errors_keep_their_kind() {
        assert_eq!(
            MacTypesError::from(EncodingError::Unavailable("bogus".into())),
            MacTypesError::EncodingUnavailable("bogus".into())
        );
        let err = MacTypesError::from(EncodingError::UnencodableText {
            encoding: "macintosh",
        });
        assert_eq!(err.to_string(), "text cannot be represented in macintosh");
    }

    #[test]
    fn test_buffer_errors_are_transparent() {
        let err = MacTypesError::from(BufferError::Overflow {
            length: 40,
            capacity: 31,
        });
        assert_eq!(
            err.to_string(),
            BufferError::Overflow {
                length: 40,
                capacity: 31
            }
            .to_string()
        );
    }
}
