//! Render configuration.
//!
//! Page and PDF settings for the generated CV. Only `encoding` reaches
//! the output today; the PDF options are kept for a future PDF backend.

use crate::escape::Escaping;

/// Options for one render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub escaping: Escaping,
    pub page: PageConfig,
}

impl RenderOptions {
    pub fn with_escaping(escaping: Escaping) -> Self {
        Self {
            escaping,
            ..Self::default()
        }
    }
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_size: String,
    pub margin: String,
    /// Written to the charset meta tag. Files are always written as UTF-8.
    pub encoding: String,
    pub enable_local_file_access: bool,
    /// Reserved; nothing renders PDF yet.
    pub pdf: Option<PdfOptions>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: "A4".into(),
            margin: "0mm".into(),
            encoding: "UTF-8".into(),
            enable_local_file_access: true,
            pdf: None,
        }
    }
}

/// Settings a PDF converter would receive.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub page_size: String,
    pub margin_top: String,
    pub margin_right: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub encoding: String,
    pub enable_local_file_access: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".into(),
            margin_top: "0mm".into(),
            margin_right: "0mm".into(),
            margin_bottom: "0mm".into(),
            margin_left: "0mm".into(),
            encoding: "UTF-8".into(),
            enable_local_file_access: true,
        }
    }
}
