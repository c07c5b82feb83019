//! OCR (Optical Character Recognition) support for scanned resumes.
//!
//! Images are preprocessed for recognition accuracy and then run through a
//! local Tesseract engine. When Tesseract is not installed the provider
//! degrades to an unavailable state: construction still succeeds, and each
//! OCR call fails with a per-file error the pipeline logs and skips.

mod preprocessing;
mod provider;

pub use preprocessing::preprocess_image;
pub use provider::OcrProvider;
