//! Classic Mac OS type codes and Pascal strings.
//!
//! Conversions between the legacy data types of the classic Mac toolbox and
//! Rust strings:
//!
//! - [`OsType`] and the `os_type_*` functions - four-character type codes,
//!   with a `0x%08X` fallback for codes that are not printable
//! - [`PascalStringDecoder`] - length-prefixed strings of every toolbox
//!   capacity, in Mac OS Roman or the host's Classic-compatible encoding
//! - [`string_from_hfs_uni_str`] - HFS+ catalog names
//! - [`CarbonToolbarIcon`], [`CarbonFolderIcon`] - icon type codes
//!
//! # Example
//!
//! ```
//! use mactypes::{to_os_type, os_type_to_string_or_hex, string_from_pascal, Str31};
//!
//! assert_eq!(to_os_type("ab", false), 0x61622020);
//! assert_eq!(os_type_to_string_or_hex(0x00000001), "0x00000001");
//!
//! let name = Str31::from_payload(b"Macintosh HD").unwrap();
//! assert_eq!(string_from_pascal(&name).as_deref(), Some("Macintosh HD"));
//! ```

mod error;
pub mod hfs;
pub mod icons;
pub mod logging;
pub mod os_type;
pub mod pascal;

pub use error::MacTypesError;
pub use hfs::string_from_hfs_uni_str;
pub use icons::{file_type_for_hfs_type_code, CarbonFolderIcon, CarbonToolbarIcon, IconProvider};
pub use os_type::{
    os_type_to_string, os_type_to_string_or_hex, to_os_type, try_os_type_to_string,
    try_to_os_type, OsType,
};
pub use pascal::{pascal_from_string, string_from_pascal, PascalStringDecoder};

pub use mactypes_buffers::{
    BoundedByteBuffer, BufferError, HfsUniStr255, Str15, Str255, Str27, Str31, Str32, Str32Field,
    Str63,
};
pub use mactypes_encoding::{
    resolve_current_legacy_encoding, resolve_legacy_encoding_with, EncodingError, LegacyEncoding,
};
