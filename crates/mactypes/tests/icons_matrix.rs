//! Icon type codes and the icon lookup seam.

use std::cell::RefCell;

use mactypes::{
    file_type_for_hfs_type_code, string_from_hfs_uni_str, CarbonFolderIcon, CarbonToolbarIcon,
    HfsUniStr255, IconProvider, OsType,
};

/// Records every lookup and answers with the file type it was given.
#[derive(Default)]
struct RecordingProvider {
    requests: RefCell<Vec<String>>,
}

impl IconProvider for RecordingProvider {
    type Icon = String;

    fn icon_for_file_type(&self, file_type: &str) -> String {
        self.requests.borrow_mut().push(file_type.to_string());
        format!("icon:{}", file_type)
    }
}

// ---------------------------------------------------------------------------
// Codes
// ---------------------------------------------------------------------------

#[test]
fn every_icon_code_is_printable_and_round_trips() {
    for icon in CarbonToolbarIcon::ALL {
        let text = icon.string_value();
        assert_eq!(text.chars().count(), 4);
        assert!(text.starts_with('t'), "{:?} -> {}", icon, text);
        assert_eq!(CarbonToolbarIcon::try_from(*icon as u32).unwrap(), *icon);
        assert_eq!(OsType::from(*icon).string_value(), text);
    }
    for icon in CarbonFolderIcon::ALL {
        assert_eq!(icon.string_value().chars().count(), 4);
        assert_eq!(CarbonFolderIcon::try_from(*icon as u32).unwrap(), *icon);
    }
}

#[test]
fn known_string_values() {
    let values: Vec<String> = CarbonFolderIcon::ALL.iter().map(|i| i.string_value()).collect();
    assert_eq!(values, ["fldr", "dbox", "mntd", "ofld", "ownd", "prvf", "shfl"]);
    assert_eq!(CarbonToolbarIcon::Home.string_value(), "thom");
    assert_eq!(CarbonToolbarIcon::DownloadsFolder.string_value(), "tDwn");
}

#[test]
fn serde_names() {
    assert_eq!(
        serde_json::to_string(&CarbonToolbarIcon::ApplicationFolder).unwrap(),
        "\"applicationFolder\""
    );
    let icon: CarbonFolderIcon = serde_json::from_str("\"private\"").unwrap();
    assert_eq!(icon, CarbonFolderIcon::Private);
}

// ---------------------------------------------------------------------------
// Icon lookup
// ---------------------------------------------------------------------------

#[test]
fn icon_lookup_uses_hfs_file_type() {
    let provider = RecordingProvider::default();
    assert_eq!(
        CarbonToolbarIcon::Customize.icon_representation(&provider),
        "icon:'tcus'"
    );
    assert_eq!(CarbonFolderIcon::Drop.icon_representation(&provider), "icon:'dbox'");
    assert_eq!(*provider.requests.borrow(), ["'tcus'", "'dbox'"]);
}

#[test]
fn hfs_file_type_of_unprintable_code() {
    assert_eq!(file_type_for_hfs_type_code(0x00000001), "'0x00000001'");
}

// ---------------------------------------------------------------------------
// HFS+ names
// ---------------------------------------------------------------------------

#[test]
fn hfs_name_from_wire() {
    let units: Vec<u16> = "Système".encode_utf16().collect();
    let wire = HfsUniStr255::from_units(&units).unwrap().to_be_wire();
    let name = HfsUniStr255::from_be_wire(&wire).unwrap();
    assert_eq!(string_from_hfs_uni_str(&name).as_deref(), Some("Système"));
}
