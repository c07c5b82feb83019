use std::path::Path;

/// The closed set of decoding strategies a resume file can be routed to.
///
/// `PlainText` is the convergence path for OCR output: image files are OCRed
/// and the resulting text is normalized exactly like a text-bearing file, so
/// no on-disk extension maps to it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    PlainText,
    Image,
}

/// Lowercased extension (without the dot) to handler.
const EXTENSION_TABLE: &[(&str, FileFormat)] = &[
    ("pdf", FileFormat::Pdf),
    ("docx", FileFormat::Docx),
    ("png", FileFormat::Image),
    ("jpg", FileFormat::Image),
    ("jpeg", FileFormat::Image),
    ("tiff", FileFormat::Image),
    ("bmp", FileFormat::Image),
    ("gif", FileFormat::Image),
];

impl FileFormat {
    /// Resolve the handler for a path by its lowercased extension.
    ///
    /// `None` marks the file unsupported. That is a skip signal for the
    /// pipeline, not an error.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, format)| *format)
    }
}

/// Lowercased extension including the leading dot, e.g. `.pdf`.
///
/// This is the `file_format` value persisted on a record; extensionless paths
/// never reach record assembly because dispatch rejects them first.
pub fn format_label(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}
