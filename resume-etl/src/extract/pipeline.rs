use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use libsql::Connection;

use crate::db::{Database, ResumeRepository};
use crate::error::Result;
use crate::models::{format_label, FileFormat, ResumeRecord};

use super::extractor::ResumeExtractor;
use super::{discover, stats};

/// The four stages of the extraction pipeline: enumerate candidates, extract
/// per file, load the batch, run end to end.
#[async_trait]
pub trait Pipeline {
    fn read(&self, root: &Path) -> Result<Vec<PathBuf>>;
    async fn extract(&self, paths: &[PathBuf]) -> Vec<ResumeRecord>;
    async fn load(&self, records: &[ResumeRecord], conn: &Connection) -> Result<()>;
    async fn run(&self, root: &Path, db: &Database) -> Result<()>;
}

pub struct ResumePipeline {
    extractor: ResumeExtractor,
}

impl ResumePipeline {
    pub fn new(extractor: ResumeExtractor) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl Pipeline for ResumePipeline {
    fn read(&self, root: &Path) -> Result<Vec<PathBuf>> {
        tracing::info!(root = %root.display(), "reading resume files");
        discover::discover(root)
    }

    /// Extract every candidate, isolating per-file failures.
    ///
    /// An unsupported extension or a failed decode skips that file; the rest
    /// of the batch proceeds. The output therefore holds at most one record
    /// per supported, successfully decoded input.
    async fn extract(&self, paths: &[PathBuf]) -> Vec<ResumeRecord> {
        let mut records = Vec::new();
        for path in paths {
            let Some(format) = FileFormat::from_path(path) else {
                tracing::warn!(path = %path.display(), "unsupported file format, skipping");
                continue;
            };

            tracing::info!(path = %path.display(), "extracting text");
            match self.extractor.extract(path, format).await {
                Ok(content) => {
                    records.push(ResumeRecord {
                        file_path: path.display().to_string(),
                        total_pages: content.page_count,
                        total_words: stats::count_words(&content.text),
                        file_format: format_label(path),
                        extracted_text: content.text,
                        inserted_at: Utc::now(),
                    });
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "extraction failed, skipping");
                }
            }
        }

        tracing::info!(
            extracted = records.len(),
            candidates = paths.len(),
            "text extraction completed"
        );
        records
    }

    /// Upsert the batch inside one transaction.
    ///
    /// A write failure rolls the whole batch back (the transaction is
    /// released on every exit path) and propagates to the caller.
    async fn load(&self, records: &[ResumeRecord], conn: &Connection) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("no resume records to load");
            return Ok(());
        }

        let tx = conn.transaction().await?;
        for record in records {
            ResumeRepository::upsert(&tx, record).await?;
        }
        tx.commit().await?;

        tracing::info!(loaded = records.len(), "resume records loaded");
        Ok(())
    }

    async fn run(&self, root: &Path, db: &Database) -> Result<()> {
        let paths = self.read(root)?;
        let records = self.extract(&paths).await;
        let conn = db.connect()?;
        self.load(&records, &conn).await?;

        Ok(())
    }
}
