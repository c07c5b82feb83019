use std::io::Cursor;

use resume_etl::extract::extractors::DocxExtractor;

fn create_test_docx<F>(builder_fn: F) -> Vec<u8>
where
    F: FnOnce(docx_rs::Docx) -> docx_rs::Docx,
{
    use docx_rs::*;

    let docx = builder_fn(Docx::new());
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

#[test]
fn test_docx_basic_text() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Senior Software Engineer")),
            )
    });

    let result = DocxExtractor::extract(&bytes);
    assert!(result.is_ok(), "Should successfully extract DOCX content");

    let extracted = result.unwrap();
    assert!(extracted.text.contains("Jane Doe"));
    assert!(extracted.text.contains("Senior Software Engineer"));
    assert_eq!(
        extracted.text, "Jane Doe\nSenior Software Engineer",
        "paragraphs become newline-separated lines"
    );
}

#[test]
fn test_docx_page_count_defaults_to_one() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text("Experience")))
    });

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(
        extracted.page_count, 1,
        "DOCX carries no native pagination"
    );
}

#[test]
fn test_docx_empty_paragraphs_are_dropped() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text("Education")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("  ")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("BSc Computer Science")))
    });

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(extracted.text, "Education\nBSc Computer Science");
}

#[test]
fn test_docx_table_cells_are_flattened() {
    use docx_rs::*;

    let table = Table::new(vec![
        TableRow::new(vec![
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Skill"))),
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Years"))),
        ]),
        TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Rust"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("5"))),
        ]),
    ]);

    let bytes = create_test_docx(|docx| docx.add_table(table));

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(extracted.text, "Skill Years\nRust 5");
}

#[test]
fn test_docx_invalid_bytes_are_rejected() {
    let result = DocxExtractor::extract(b"definitely not a zip archive");
    assert!(result.is_err());
}
