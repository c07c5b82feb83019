//! Resume text extraction pipeline.
//!
//! Walks a directory of resume files (PDF, DOCX, scanned images), extracts
//! their text through format-specific decoders, computes word statistics, and
//! upserts one canonical record per file path into a libsql store. Individual
//! corrupt or unsupported files are logged and skipped so a batch of
//! thousands of files survives bad inputs.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
