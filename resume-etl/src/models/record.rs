use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized output of one format extractor invocation.
///
/// `page_count` is taken from decoder page metadata when the format carries
/// any (PDF) and defaults to 1 otherwise (DOCX, OCR, plain text).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    pub text: String,
    pub page_count: i32,
}

/// Canonical record persisted for one successfully extracted resume.
///
/// `file_path` is the business key: loading upserts by path, so the stored
/// row for a path is always the most recent extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeRecord {
    pub file_path: String,
    pub total_pages: i32,
    pub total_words: i32,
    pub file_format: String,
    pub extracted_text: String,
    pub inserted_at: DateTime<Utc>,
}
