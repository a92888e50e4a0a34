//! Legacy 8-bit text encodings of the classic Mac OS.
//!
//! The conversion tables themselves come from `encoding_rs`; this crate only
//! names the encodings Pascal strings and type codes are written in, and
//! answers which of them best matches the host's current configuration.
//!
//! # Example
//!
//! ```
//! use mactypes_encoding::LegacyEncoding;
//!
//! let roman = LegacyEncoding::mac_roman();
//! assert_eq!(roman.decode_bytes(&[0x43, 0x61, 0x66, 0x8E]).as_deref(), Some("Café"));
//! assert_eq!(roman.encode_text("Café"), Some(vec![0x43, 0x61, 0x66, 0x8E]));
//! assert_eq!(roman.encode_text("日本"), None);
//! ```

mod host;

pub use host::{resolve_current_legacy_encoding, resolve_legacy_encoding_with, OVERRIDE_VAR};

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The label names no encoding, or a multi-byte one.
    #[error("no single-byte legacy encoding for label `{0}`")]
    Unavailable(String),
    /// A byte has no mapping in the code page.
    #[error("bytes are not valid {encoding}")]
    UndecodableBytes { encoding: &'static str },
    /// A character is outside the code page.
    #[error("text cannot be represented in {encoding}")]
    UnencodableText { encoding: &'static str },
}

/// A single-byte legacy text encoding.
///
/// Conversions are strict: bytes unmapped in the code page and characters
/// outside it are errors, never replacement characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LegacyEncoding {
    encoding: &'static Encoding,
}

impl LegacyEncoding {
    /// Mac OS Roman, the default encoding of the classic toolbox.
    pub fn mac_roman() -> Self {
        Self {
            encoding: encoding_rs::MACINTOSH,
        }
    }

    /// Mac OS Cyrillic.
    pub fn mac_cyrillic() -> Self {
        Self {
            encoding: encoding_rs::X_MAC_CYRILLIC,
        }
    }

    /// Resolves a WHATWG encoding label such as `"macintosh"` or `"koi8-r"`.
    ///
    /// Only single-byte encodings are legacy encodings; any other label is
    /// [`EncodingError::Unavailable`].
    pub fn for_label(label: &str) -> Result<Self, EncodingError> {
        match Encoding::for_label(label.as_bytes()) {
            Some(encoding) if encoding.is_single_byte() => Ok(Self { encoding }),
            _ => {
                debug!(label, "no single-byte encoding for label");
                Err(EncodingError::Unavailable(label.to_string()))
            }
        }
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Returns the classic Mac encoding covering the same script.
    ///
    /// Cyrillic code pages map to Mac OS Cyrillic; everything else maps to
    /// Mac OS Roman.
    pub fn most_compatible_classic(self) -> Self {
        let cyrillic = [
            encoding_rs::X_MAC_CYRILLIC,
            encoding_rs::WINDOWS_1251,
            encoding_rs::KOI8_R,
            encoding_rs::KOI8_U,
            encoding_rs::ISO_8859_5,
            encoding_rs::IBM866,
        ];
        if cyrillic.contains(&self.encoding) {
            Self::mac_cyrillic()
        } else {
            Self::mac_roman()
        }
    }

    pub fn try_decode_bytes(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or(EncodingError::UndecodableBytes {
                encoding: self.name(),
            })
    }

    /// Decodes `bytes`, or `None` if any byte is unmapped.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Option<String> {
        self.try_decode_bytes(bytes)
            .inspect_err(|err| debug!(%err, len = bytes.len(), "legacy decode failed"))
            .ok()
    }

    pub fn try_encode_text(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(EncodingError::UnencodableText {
                encoding: self.name(),
            });
        }
        Ok(bytes.into_owned())
    }

    /// Encodes `text`, or `None` if a character is outside the code page.
    pub fn encode_text(&self, text: &str) -> Option<Vec<u8>> {
        self.try_encode_text(text)
            .inspect_err(|err| debug!(%err, "legacy encode failed"))
            .ok()
    }
}

impl Default for LegacyEncoding {
    fn default() -> Self {
        Self::mac_roman()
    }
}

impl fmt::Debug for LegacyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LegacyEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for LegacyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LegacyEncoding::for_label("macintosh").unwrap(), LegacyEncoding::mac_roman());
        assert_eq!(LegacyEncoding::for_label("x-mac-roman").unwrap(), LegacyEncoding::mac_roman());
        assert_eq!(LegacyEncoding::for_label("x-mac-cyrillic").unwrap().name(), "x-mac-cyrillic");
        assert_eq!(
            LegacyEncoding::for_label("utf-8").unwrap_err(),
            EncodingError::Unavailable("utf-8".into())
        );
        assert!(LegacyEncoding::for_label("shift_jis").is_err());
        assert!(LegacyEncoding::for_label("no-such-encoding").is_err());
    }

    #[test]
    fn test_most_compatible_classic() {
        let classic = |label: &str| LegacyEncoding::for_label(label).unwrap().most_compatible_classic();
        assert_eq!(classic("windows-1252"), LegacyEncoding::mac_roman());
        assert_eq!(classic("iso-8859-2"), LegacyEncoding::mac_roman());
        assert_eq!(classic("koi8-r"), LegacyEncoding::mac_cyrillic());
        assert_eq!(classic("windows-1251"), LegacyEncoding::mac_cyrillic());
        assert_eq!(classic("x-mac-cyrillic"), LegacyEncoding::mac_cyrillic());
    }

    #[test]
    fn test_display() {
        assert_eq!(LegacyEncoding::default().to_string(), "macintosh");
        assert_eq!(format!("{:?}", LegacyEncoding::mac_roman()), "LegacyEncoding(\"macintosh\")");
    }
}
