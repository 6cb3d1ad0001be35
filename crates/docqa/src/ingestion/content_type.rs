//! File extension to MIME type resolution

use serde::{Deserialize, Serialize};

/// MIME type used when the extension is not recognized
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Document formats the system knows a MIME type for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
    /// CSV file
    Csv,
    /// Excel spreadsheet (.xlsx)
    Xlsx,
    /// Old Excel spreadsheet (.xls)
    Xls,
    /// Old Microsoft Word document (.doc)
    Doc,
    /// Microsoft Word document (.docx)
    Docx,
}

impl DocumentKind {
    /// Detect kind from a bare extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Txt),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect kind from a file name or object path
    ///
    /// The extension is whatever follows the last `.`; a name with no `.`
    /// is treated as having its whole text as the extension, which never
    /// matches a known kind unless the name itself is e.g. `pdf`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        let ext = lower.rsplit('.').next().unwrap_or("");
        Self::from_extension(ext)
    }

    /// Standard MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Txt => "text/plain",
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Xls => "application/vnd.ms-excel",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// Resolve the MIME type for a file name; never fails
pub fn resolve(filename: &str) -> &'static str {
    let mime = DocumentKind::from_filename(filename)
        .map(|kind| kind.mime_type())
        .unwrap_or(OCTET_STREAM);
    tracing::debug!("File type for {}: {}", filename, mime);
    mime
}

/// Whether the extension has a known MIME type
pub fn is_supported(filename: &str) -> bool {
    DocumentKind::from_filename(filename).is_some()
}
