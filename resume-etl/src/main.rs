use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume_etl::config::Config;
use resume_etl::db::{schema, Database};
use resume_etl::extract::{Pipeline, ResumeExtractor, ResumePipeline};
use resume_etl::ocr::OcrProvider;

#[derive(Parser)]
#[command(name = "resume-etl")]
#[command(about = "Extracts text from a directory of resumes and loads it into SQLite")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk a resume directory, extract text, and upsert one record per file
    Extract {
        /// Directory to read resume files from
        #[arg(long, default_value = "data/resume")]
        dirpath: PathBuf,
    },
    /// Administer the resume table schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Create the resume table if absent
    Ensure,
    /// Drop the resume table if present
    Drop,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_etl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    match cli.command {
        Command::Extract { dirpath } => {
            tracing::info!(dirpath = %dirpath.display(), "starting extraction run");

            tracing::info!("Initializing database...");
            let db = Database::new(&config.database).await?;

            tracing::info!("Initializing OCR provider...");
            let ocr = OcrProvider::new(&config.ocr)?;
            if !ocr.is_available() {
                tracing::warn!("OCR unavailable - image resumes will be skipped");
            }

            let pipeline = ResumePipeline::new(ResumeExtractor::new(ocr, config.ocr.clone()));
            pipeline.run(&dirpath, &db).await?;
        }
        Command::Schema { action } => {
            let db = Database::new(&config.database).await?;
            let conn = db.connect()?;
            match action {
                SchemaAction::Ensure => {
                    tracing::info!("Creating resume table");
                    schema::ensure_schema(&conn).await?;
                }
                SchemaAction::Drop => {
                    tracing::info!("Dropping resume table");
                    schema::drop_schema(&conn).await?;
                }
            }
        }
    }

    Ok(())
}
