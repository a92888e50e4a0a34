//! HFS+ Unicode names.

use mactypes_buffers::HfsUniStr255;
use tracing::debug;

/// Converts an HFS+ name to a string.
///
/// Returns `None` if the length exceeds 255 or the code units are not
/// well-formed UTF-16. Unpaired surrogates are not repaired.
///
/// # Example
///
/// ```
/// use mactypes::{string_from_hfs_uni_str, HfsUniStr255};
///
/// let units: Vec<u16> = "Desktop".encode_utf16().collect();
/// let name = HfsUniStr255::from_units(&units).unwrap();
/// assert_eq!(string_from_hfs_uni_str(&name).as_deref(), Some("Desktop"));
/// ```
pub fn string_from_hfs_uni_str(name: &HfsUniStr255) -> Option<String> {
    let Some(units) = name.units() else {
        debug!(length = name.length, "HFS+ name length exceeds 255");
        return None;
    };
    String::from_utf16(units)
        .inspect_err(|_| debug!("HFS+ name is invalid UTF-16"))
        .ok()
}
