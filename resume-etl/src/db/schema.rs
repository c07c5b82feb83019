use libsql::Connection;

use crate::error::Result;

/// Create the resume table if absent.
///
/// `file_path` carries a UNIQUE constraint so reprocessing a file replaces
/// its row instead of inserting a duplicate; the autoincrement `id` is kept
/// for sink compatibility but is not the upsert key.
pub async fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS resume (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_path TEXT NOT NULL UNIQUE,
            total_num_of_pages INTEGER NOT NULL DEFAULT 1,
            total_num_words INTEGER NOT NULL DEFAULT 0,
            file_format TEXT NOT NULL,
            extracted_text TEXT NOT NULL DEFAULT '',
            inserted_date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_resume_file_format ON resume(file_format);
        "#,
    )
    .await?;

    Ok(())
}

/// Drop the resume table if present.
pub async fn drop_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS resume;").await?;

    Ok(())
}
