//! Host query for the current Classic-compatible encoding.
//!
//! The host's notion of its system encoding is the process environment:
//! an explicit override, then the POSIX locale. Nothing is cached, so a
//! changed environment is picked up on the next call.

use tracing::{debug, warn};

use crate::LegacyEncoding;

/// Environment variable naming the system encoding, by WHATWG label.
pub const OVERRIDE_VAR: &str = "MACTYPES_LEGACY_ENCODING";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// ISO 639-1 codes of languages written in Cyrillic script.
const CYRILLIC_LANGUAGES: &[&str] = &["be", "bg", "kk", "ky", "mk", "mn", "ru", "sr", "tg", "uk"];

/// Returns the classic Mac encoding most compatible with the current
/// system encoding.
pub fn resolve_current_legacy_encoding() -> LegacyEncoding {
    resolve_legacy_encoding_with(|name| std::env::var(name).ok())
}

/// Same as [`resolve_current_legacy_encoding`], reading variables through
/// `lookup` instead of the process environment.
///
/// # Example
///
/// ```
/// use mactypes_encoding::{resolve_legacy_encoding_with, LegacyEncoding};
///
/// let encoding = resolve_legacy_encoding_with(|name| match name {
///     "LANG" => Some("ru_RU.UTF-8".to_string()),
///     _ => None,
/// });
/// assert_eq!(encoding, LegacyEncoding::mac_cyrillic());
/// ```
pub fn resolve_legacy_encoding_with<F>(lookup: F) -> LegacyEncoding
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(label) = lookup(OVERRIDE_VAR).filter(|v| !v.trim().is_empty()) {
        match LegacyEncoding::for_label(&label) {
            Ok(encoding) => return encoding.most_compatible_classic(),
            Err(err) => warn!(%err, "ignoring {}", OVERRIDE_VAR),
        }
    }

    let locale = LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty());
    match locale {
        Some(locale) => classic_for_locale(&locale),
        None => LegacyEncoding::mac_roman(),
    }
}

fn classic_for_locale(locale: &str) -> LegacyEncoding {
    let (language_territory, codeset) = split_locale(locale);
    if let Some(codeset) = codeset {
        if let Ok(encoding) = LegacyEncoding::for_label(codeset) {
            return encoding.most_compatible_classic();
        }
    }

    let language = language_territory
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    debug!(locale, language = %language, "choosing legacy encoding by language");
    if CYRILLIC_LANGUAGES.contains(&language.as_str()) {
        LegacyEncoding::mac_cyrillic()
    } else {
        LegacyEncoding::mac_roman()
    }
}

/// Splits `language_TERRITORY.codeset@modifier` into its name and codeset.
fn split_locale(locale: &str) -> (&str, Option<&str>) {
    let without_modifier = locale.split('@').next().unwrap_or(locale);
    match without_modifier.split_once('.') {
        Some((name, codeset)) => (name, Some(codeset)),
        None => (without_modifier, None),
    }
}
