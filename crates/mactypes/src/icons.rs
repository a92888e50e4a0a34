//! Carbon icon type codes.
//!
//! The icons themselves belong to the host's icon service, which is reached
//! through an [`IconProvider`] keyed by the HFS file type string.

use serde::{Deserialize, Serialize};

use crate::os_type::{os_type_to_string, os_type_to_string_or_hex};
use crate::{MacTypesError, OsType};

/// Looks up displayable icons by HFS file type.
pub trait IconProvider {
    type Icon;

    /// Returns the icon for a file type such as `'fldr'`.
    fn icon_for_file_type(&self, file_type: &str) -> Self::Icon;
}

/// Formats a type code as an HFS file type string: the code in apostrophes.
///
/// # Example
///
/// ```
/// use mactypes::file_type_for_hfs_type_code;
///
/// assert_eq!(file_type_for_hfs_type_code(0x666C6472), "'fldr'");
/// ```
pub fn file_type_for_hfs_type_code(code: u32) -> String {
    format!("'{}'", os_type_to_string_or_hex(code))
}

macro_rules! icon_type_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[repr(u32)]
        pub enum $name {
            $($(#[$variant_meta])* $variant = $code,)+
        }

        impl $name {
            /// Every code, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn os_type(self) -> OsType {
                OsType(self as u32)
            }

            /// The four characters of the code, or four spaces.
            pub fn string_value(self) -> String {
                os_type_to_string(self as u32).unwrap_or_else(|| "    ".to_string())
            }

            /// Asks `provider` for the icon of this type code.
            pub fn icon_representation<P: IconProvider>(self, provider: &P) -> P::Icon {
                provider.icon_for_file_type(&file_type_for_hfs_type_code(self as u32))
            }
        }

        impl TryFrom<u32> for $name {
            type Error = MacTypesError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(MacTypesError::UnknownIconCode(code)),
                }
            }
        }

        impl From<$name> for OsType {
            fn from(icon: $name) -> Self {
                icon.os_type()
            }
        }
    };
}

icon_type_codes! {
    /// Standard toolbar item icons.
    pub enum CarbonToolbarIcon {
        Customize = 0x74637573,
        Delete = 0x7464656C,
        Favorite = 0x74666176,
        Home = 0x74686F6D,
        Advanced = 0x74626176,
        Info = 0x7462696E,
        Labels = 0x74626C62,
        ApplicationFolder = 0x74417073,
        DocumentsFolder = 0x74446F63,
        MoviesFolder = 0x744D6F76,
        MusicFolder = 0x744D7573,
        PicturesFolder = 0x74506963,
        PublicFolder = 0x74507562,
        DesktopFolder = 0x7444736B,
        DownloadsFolder = 0x7444776E,
        LibraryFolder = 0x744C6962,
        UtilitiesFolder = 0x7455746C,
        SitesFolder = 0x74537473,
    }
}

icon_type_codes! {
    /// Folder icons.
    pub enum CarbonFolderIcon {
        Generic = 0x666C6472,
        Drop = 0x64626F78,
        Mounted = 0x6D6E7464,
        Open = 0x6F666C64,
        Owned = 0x6F776E64,
        Private = 0x70727666,
        Shared = 0x7368666C,
    }
}
