use std::path::Path;

use crate::config::OcrConfig;
use crate::error::{EtlError, Result};
use crate::models::{ExtractedContent, FileFormat};
use crate::ocr::OcrProvider;

use super::extractors::{DocxExtractor, ImageExtractor, PdfExtractor, TextExtractor};

/// Separator inserted between decoded pages.
///
/// Three newlines keep visual page breaks distinct from the double-newline
/// paragraph breaks that occur inside a page.
pub const PAGE_DELIMITER: &str = "\n\n\n";

/// Routes a candidate file to the decoder for its format and normalizes the
/// output.
///
/// Every read, decode, or OCR error is converted to [`EtlError::Extraction`]
/// at this boundary, so the pipeline can classify failures uniformly without
/// seeing raw decoder errors.
pub struct ResumeExtractor {
    ocr: OcrProvider,
    ocr_config: OcrConfig,
}

impl ResumeExtractor {
    pub fn new(ocr: OcrProvider, ocr_config: OcrConfig) -> Self {
        Self { ocr, ocr_config }
    }

    pub async fn extract(&self, path: &Path, format: FileFormat) -> Result<ExtractedContent> {
        self.extract_inner(path, format)
            .await
            .map_err(|e| EtlError::Extraction {
                path: path.to_path_buf(),
                cause: e.to_string(),
            })
    }

    async fn extract_inner(&self, path: &Path, format: FileFormat) -> Result<ExtractedContent> {
        let bytes = tokio::fs::read(path).await?;

        match format {
            FileFormat::Pdf => PdfExtractor::extract(&bytes),
            FileFormat::Docx => DocxExtractor::extract(&bytes),
            FileFormat::PlainText => TextExtractor::extract(&bytes),
            FileFormat::Image => ImageExtractor::extract(&bytes, &self.ocr, &self.ocr_config).await,
        }
    }
}
