//! Four-character type codes (`OSType`).
//!
//! A type code is a `u32` whose four big-endian bytes are usually Mac OS
//! Roman characters, e.g. `'TEXT'` or `'tcus'`. Codes that are not printable
//! are rendered as `0x` followed by eight uppercase hex digits, and that
//! rendering is accepted back when parsing with hex detection.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use mactypes_encoding::LegacyEncoding;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::MacTypesError;

/// Bytes below this value are control characters.
const FIRST_PRINTABLE: u8 = 0x20;
const PADDING: u8 = b' ';
/// Scan result that is never accepted as a hex code.
const HEX_SENTINEL: u32 = u32::MAX;

/// Decodes a type code as four Mac OS Roman characters.
///
/// Fails with [`MacTypesError::NonPrintableTypeCode`] if any byte is a
/// control character (0x00 to 0x1F).
pub fn try_os_type_to_string(code: u32) -> Result<String, MacTypesError> {
    let bytes = code.to_be_bytes();
    if bytes.iter().any(|&b| b < FIRST_PRINTABLE) {
        return Err(MacTypesError::NonPrintableTypeCode(code));
    }
    Ok(LegacyEncoding::mac_roman().try_decode_bytes(&bytes)?)
}

/// Decodes a type code as text, or `None` if it is not printable.
///
/// # Example
///
/// ```
/// use mactypes::os_type_to_string;
///
/// assert_eq!(os_type_to_string(0x54455854).as_deref(), Some("TEXT"));
/// assert_eq!(os_type_to_string(0x00000001), None);
/// ```
pub fn os_type_to_string(code: u32) -> Option<String> {
    try_os_type_to_string(code)
        .inspect_err(|err| debug!(%err, "type code has no text form"))
        .ok()
}

/// Decodes a type code as text, falling back to `0x%08X`.
///
/// # Example
///
/// ```
/// use mactypes::os_type_to_string_or_hex;
///
/// assert_eq!(os_type_to_string_or_hex(0x74637573), "tcus");
/// assert_eq!(os_type_to_string_or_hex(0x0000BEEF), "0x0000BEEF");
/// ```
pub fn os_type_to_string_or_hex(code: u32) -> String {
    match os_type_to_string(code) {
        Some(text) if text.chars().count() == 4 => text,
        _ => format!("0x{:08X}", code),
    }
}

/// Encodes text as a type code.
///
/// With `detect_hex`, text longer than four characters that is entirely a
/// hex number (an optional `0x` prefix allowed) is returned as that number,
/// unless it is `0xFFFFFFFF`. Otherwise the text is encoded as Mac OS Roman,
/// truncated to four bytes and padded with spaces.
///
/// Fails with [`MacTypesError::EmptyOrUnencodableText`] for empty text and
/// text outside Mac OS Roman.
pub fn try_to_os_type(text: &str, detect_hex: bool) -> Result<u32, MacTypesError> {
    if detect_hex && text.chars().count() > 4 {
        if let Some(code) = parse_hex_code(text) {
            return Ok(code);
        }
    }

    let roman = LegacyEncoding::mac_roman();
    let bytes = match roman.try_encode_text(text) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return Err(MacTypesError::EmptyOrUnencodableText {
                encoding: roman.name(),
            })
        }
    };
    let mut packed = [PADDING; 4];
    let len = bytes.len().min(4);
    packed[..len].copy_from_slice(&bytes[..len]);
    Ok(u32::from_be_bytes(packed))
}

/// Encodes text as a type code, or `0` if it cannot be encoded.
///
/// # Example
///
/// ```
/// use mactypes::to_os_type;
///
/// assert_eq!(to_os_type("abcd", false), 0x61626364);
/// assert_eq!(to_os_type("ab", false), 0x61622020);
/// assert_eq!(to_os_type("0x74637573", true), 0x74637573);
/// assert_eq!(to_os_type("", false), 0);
/// ```
pub fn to_os_type(text: &str, detect_hex: bool) -> u32 {
    try_to_os_type(text, detect_hex)
        .inspect_err(|err| debug!(%err, "using the zero type code"))
        .unwrap_or(0)
}

fn parse_hex_code(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(code) if code != HEX_SENTINEL => Some(code),
        _ => None,
    }
}

/// A four-character type code.
///
/// Displays as its text form, or hex when not printable. Parsing detects
/// hex, so `Display` and `FromStr` round trip.
///
/// # Serde
///
/// Serializes as [`OsType::string_value`]. Deserializes from that string or
/// from an integer in `u32` range, which needs a self-describing format such
/// as JSON; formats without type hints (bincode, postcard) cannot read it.
/// Like [`FromStr`], a string that is neither hex nor Mac OS Roman becomes
/// `OsType(0)` rather than an error.
///
/// # Example
///
/// ```
/// use mactypes::OsType;
///
/// let code: OsType = "tcus".parse().unwrap();
/// assert_eq!(code, OsType(0x74637573));
/// assert_eq!(code.to_bytes(), *b"tcus");
/// assert_eq!(OsType(1).to_string(), "0x00000001");
/// assert_eq!("0x00000001".parse::<OsType>().unwrap(), OsType(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OsType(pub u32);

impl OsType {
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Packs the first four of five C characters; the terminator is ignored.
    pub const fn from_c_bytes(bytes: [u8; 5]) -> Self {
        Self::from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// The four bytes followed by a NUL terminator.
    pub const fn to_c_bytes(self) -> [u8; 5] {
        let [a, b, c, d] = self.to_bytes();
        [a, b, c, d, 0]
    }

    /// The text form, or `None` if the code is not printable.
    pub fn to_text(self) -> Option<String> {
        os_type_to_string(self.0)
    }

    /// The text form, or the `0x%08X` hex form.
    pub fn string_value(self) -> String {
        os_type_to_string_or_hex(self.0)
    }

    /// Parses text or hex, falling back to the zero code.
    pub fn from_string_value(text: &str) -> Self {
        Self(to_os_type(text, true))
    }
}

impl From<u32> for OsType {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<OsType> for u32 {
    fn from(code: OsType) -> Self {
        code.0
    }
}

impl From<[u8; 4]> for OsType {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for OsType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string_value(s))
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value())
    }
}

impl fmt::Debug for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) if text.chars().count() == 4 => write!(f, "OsType('{}')", text),
            _ => write!(f, "OsType(0x{:08X})", self.0),
        }
    }
}

impl Serialize for OsType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.string_value())
    }
}

impl<'de> Deserialize<'de> for OsType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OsTypeVisitor)
    }
}

struct OsTypeVisitor;

impl Visitor<'_> for OsTypeVisitor {
    type Value = OsType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a four-character code, a hex string or a u32")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OsType, E> {
        Ok(OsType::from_string_value(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<OsType, E> {
        u32::try_from(v)
            .map(OsType)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<OsType, E> {
        u32::try_from(v)
            .map(OsType)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }
}
