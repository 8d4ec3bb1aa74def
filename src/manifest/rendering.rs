//! Render the `.qrc` XML document from discovered asset paths.

use std::borrow::Cow;

use crate::models::ResourceEntry;

/// Separator placed between consecutive `<file>` elements.
const ENTRY_SEPARATOR: &str = "\n        ";

const HEADER: &str = "<RCC>\n    <qresource prefix=\"/\">\n        ";
const FOOTER: &str = "\n    </qresource>\n</RCC>";

/// Application icon entries that always open the resource list.
pub fn fixed_entries() -> [ResourceEntry; 2] {
    [
        ResourceEntry::aliased("icon.png", "res/icon.png"),
        ResourceEntry::aliased("icon.svg", "res/icon.svg"),
    ]
}

/// Escape characters that are not allowed verbatim in XML character data or attribute values.
pub fn escape_xml_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Produce the complete manifest document for the given asset paths.
///
/// The icon entries come first, followed by one `<file>` element per path in the order
/// given. With no paths an indentation-only line remains between the icon entries and the
/// closing `</qresource>` tag.
pub fn render_manifest<S: AsRef<str>>(asset_paths: &[S]) -> String {
    let icons: Vec<String> = fixed_entries().iter().map(ResourceEntry::render).collect();
    let files: Vec<String> = asset_paths
        .iter()
        .map(|path| ResourceEntry::file(path.as_ref()).render())
        .collect();

    let document = format!(
        "{HEADER}{}{ENTRY_SEPARATOR}{}{FOOTER}",
        icons.join(ENTRY_SEPARATOR),
        files.join(ENTRY_SEPARATOR),
    );
    document.trim().to_string()
}
