//! Rendering of Apple `.strings` localization files.
//!
//! Each entry becomes one `"key" = "value";` line. Keys and values are
//! written verbatim; escaping is the responsibility of whoever built the
//! catalog.

use crate::types::TranslationMap;

/// File name written inside every `<locale>.lproj` directory.
pub const FILE_NAME: &str = "Localizable.strings";

/// Suffix of the per-locale resource directory.
pub const LPROJ_EXTENSION: &str = "lproj";

/// Directory name for a locale, e.g. `en.lproj`.
pub fn lproj_dir_name(locale: &str) -> String {
    format!("{}.{}", locale, LPROJ_EXTENSION)
}

/// Renders the body of a `.strings` file, one newline-terminated line per entry.
pub fn render(translations: &TranslationMap) -> String {
    let mut content = String::new();
    for pair in translations {
        content.push_str(&pair.to_string());
        content.push('\n');
    }
    content
}
