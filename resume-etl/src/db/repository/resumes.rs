use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::ResumeRecord;

pub struct ResumeRepository;

impl ResumeRepository {
    /// Insert-or-replace keyed by `file_path`: the stored row for a path is
    /// always the most recent extraction.
    pub async fn upsert(conn: &Connection, record: &ResumeRecord) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO resume (
                file_path, total_num_of_pages, total_num_words, file_format,
                extracted_text, inserted_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(file_path) DO UPDATE SET
                total_num_of_pages = excluded.total_num_of_pages,
                total_num_words = excluded.total_num_words,
                file_format = excluded.file_format,
                extracted_text = excluded.extracted_text,
                inserted_date = excluded.inserted_date
            "#,
            params![
                record.file_path.clone(),
                record.total_pages,
                record.total_words,
                record.file_format.clone(),
                record.extracted_text.clone(),
                record.inserted_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_path(conn: &Connection, file_path: &str) -> Result<Option<ResumeRecord>> {
        let mut rows = conn
            .query(
                r#"
                SELECT file_path, total_num_of_pages, total_num_words, file_format,
                       extracted_text, inserted_date
                FROM resume WHERE file_path = ?1
                "#,
                params![file_path],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_record(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn count(conn: &Connection) -> Result<i64> {
        let mut rows = conn.query("SELECT COUNT(*) FROM resume", ()).await?;

        let total = if let Some(row) = rows.next().await? {
            row.get(0)?
        } else {
            0
        };
        Ok(total)
    }

    fn row_to_record(row: &libsql::Row) -> Result<ResumeRecord> {
        Ok(ResumeRecord {
            file_path: row.get(0)?,
            total_pages: row.get(1)?,
            total_words: row.get(2)?,
            file_format: row.get(3)?,
            extracted_text: row.get(4)?,
            inserted_at: DateTime::parse_from_rfc3339(&row.get::<String>(5)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
