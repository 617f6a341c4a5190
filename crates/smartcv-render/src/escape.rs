//! Escaping of field values interpolated into markup.

use std::borrow::Cow;

/// How field values are written into the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Replace `& < > " '` with character references.
    #[default]
    Html,
    /// Insert values verbatim. Output matches files produced before escaping existed.
    Raw,
}

impl Escaping {
    pub fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Html => escape_html(value),
            Escaping::Raw => Cow::Borrowed(value),
        }
    }
}

/// Escape HTML special characters. Borrows when nothing needs replacing.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;"),
    )
}
