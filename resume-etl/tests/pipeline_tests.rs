use std::fs;
use std::io::Cursor;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use resume_etl::config::{DatabaseConfig, OcrConfig};
use resume_etl::db::{Database, ResumeRepository};
use resume_etl::extract::{Pipeline, ResumeExtractor, ResumePipeline};
use resume_etl::ocr::OcrProvider;

fn memory_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: ":memory:".to_string(),
        busy_timeout_ms: 5000,
        journal_mode: "WAL".to_string(),
        synchronous: "NORMAL".to_string(),
    }
}

fn test_ocr_config() -> OcrConfig {
    OcrConfig {
        languages: "eng".to_string(),
        timeout_secs: 60,
        max_image_dimension: 4096,
        min_image_dimension: 50,
    }
}

fn test_pipeline() -> ResumePipeline {
    let config = test_ocr_config();
    let ocr = OcrProvider::new(&config).expect("OCR provider construction never fails");
    ResumePipeline::new(ResumeExtractor::new(ocr, config))
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    use docx_rs::*;

    let mut docx = Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    fs::write(path, buffer.into_inner()).expect("Failed to write DOCX fixture");
}

#[tokio::test]
async fn test_all_supported_files_produce_records() {
    let dir = TempDir::new().unwrap();
    write_docx(&dir.path().join("jane.docx"), &["Jane Doe", "Engineer"]);
    write_docx(&dir.path().join("john.docx"), &["John Smith", "Analyst"]);

    let pipeline = test_pipeline();
    let paths = pipeline.read(dir.path()).unwrap();
    let records = pipeline.extract(&paths).await;

    assert_eq!(records.len(), paths.len());
}

#[tokio::test]
async fn test_corrupt_pdf_is_logged_and_skipped() {
    let dir = TempDir::new().unwrap();
    write_docx(&dir.path().join("jane.docx"), &["Jane Doe"]);
    write_docx(&dir.path().join("john.docx"), &["John Smith"]);
    fs::write(dir.path().join("broken.pdf"), b"this is not a pdf").unwrap();

    let pipeline = test_pipeline();
    let paths = pipeline.read(dir.path()).unwrap();
    assert_eq!(paths.len(), 3);

    let records = pipeline.extract(&paths).await;

    assert_eq!(records.len(), 2, "only the valid DOCX files yield records");
    assert!(records.iter().all(|r| r.file_format == ".docx"));
}

#[tokio::test]
async fn test_unsupported_format_is_silently_omitted() {
    let dir = TempDir::new().unwrap();
    write_docx(&dir.path().join("jane.docx"), &["Jane Doe"]);
    fs::write(dir.path().join("notes.xyz"), b"some bytes").unwrap();

    let pipeline = test_pipeline();
    let paths = pipeline.read(dir.path()).unwrap();
    let records = pipeline.extract(&paths).await;

    assert_eq!(records.len(), 1);
    assert!(records[0].file_path.ends_with("jane.docx"));
}

#[tokio::test]
async fn test_records_carry_stats_and_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jane.docx");
    write_docx(&path, &["Jane Doe", "Senior Software Engineer"]);

    let pipeline = test_pipeline();
    let records = pipeline.extract(&[path.clone()]).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.file_path, path.display().to_string());
    assert_eq!(record.total_pages, 1);
    assert_eq!(record.total_words, 5);
    assert_eq!(record.file_format, ".docx");
    assert_eq!(record.extracted_text, "Jane Doe\nSenior Software Engineer");
}

#[tokio::test]
async fn test_empty_batch_performs_no_writes() {
    let dir = TempDir::new().unwrap();

    let db = Database::new(&memory_db_config()).await.unwrap();
    let pipeline = test_pipeline();
    pipeline.run(dir.path(), &db).await.unwrap();

    let conn = db.connect().unwrap();
    assert_eq!(ResumeRepository::count(&conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_run_loads_one_row_per_file() {
    let dir = TempDir::new().unwrap();
    write_docx(&dir.path().join("jane.docx"), &["Jane Doe", "Engineer"]);
    write_docx(&dir.path().join("john.docx"), &["John Smith", "Analyst"]);

    let db = Database::new(&memory_db_config()).await.unwrap();
    let pipeline = test_pipeline();
    pipeline.run(dir.path(), &db).await.unwrap();

    let conn = db.connect().unwrap();
    assert_eq!(ResumeRepository::count(&conn).await.unwrap(), 2);

    let jane_path = dir.path().join("jane.docx").display().to_string();
    let stored = ResumeRepository::get_by_path(&conn, &jane_path)
        .await
        .unwrap()
        .expect("jane.docx should be loaded");
    assert_eq!(stored.extracted_text, "Jane Doe\nEngineer");
    assert_eq!(stored.total_words, 3);
}

#[tokio::test]
async fn test_rerun_is_idempotent_and_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("jane.docx");
    write_docx(&path, &["Jane Doe", "Engineer"]);

    let db = Database::new(&memory_db_config()).await.unwrap();
    let pipeline = test_pipeline();

    pipeline.run(dir.path(), &db).await.unwrap();

    // Reprocessing after the file changed must replace the row, not add one.
    write_docx(&path, &["Jane Doe", "Principal Engineer"]);
    pipeline.run(dir.path(), &db).await.unwrap();

    let conn = db.connect().unwrap();
    assert_eq!(ResumeRepository::count(&conn).await.unwrap(), 1);

    let stored = ResumeRepository::get_by_path(&conn, &path.display().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.extracted_text, "Jane Doe\nPrincipal Engineer");
    assert_eq!(stored.total_words, 4);
}

#[tokio::test]
async fn test_missing_directory_aborts_before_any_work() {
    let pipeline = test_pipeline();
    let result = pipeline.read(Path::new("/no/such/resume/dir"));
    assert!(result.is_err());
}
