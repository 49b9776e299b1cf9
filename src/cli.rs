// src/cli.rs
use crate::core::{Database, FsOps, TestResultRecord};
use crate::insights::{self, catalogue};
use crate::results::{NewTestResult, RecordError, TestResultService};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "orientation-cli")]
#[command(about = "Interpret career test results and manage stored records")]
pub struct OrientationCli {
    #[command(subcommand)]
    pub command: OrientationCommand,

    #[arg(long, global = true, default_value = "data/orientation.db")]
    pub database_path: PathBuf,
}

#[derive(Subcommand)]
pub enum OrientationCommand {
    /// Print the insights for a results document
    Analyze {
        test_type: String,
        /// JSON file with the raw results, `-` for stdin
        #[arg(long)]
        results: Option<PathBuf>,
    },
    /// List supported test types
    Types,
    /// Initialize the database
    Init,
    /// Store a test result for a user
    Record {
        user_id: i64,
        test_type: String,
        #[arg(long)]
        results: PathBuf,
        /// JSON array of the raw answers
        #[arg(long)]
        answers: Option<PathBuf>,
        #[arg(long)]
        confidence_score: Option<i64>,
    },
    /// List stored results of a user
    List { user_id: i64 },
    /// Export stored results to a CSV file
    Export {
        output: PathBuf,
        #[arg(long)]
        user_id: Option<i64>,
    },
}

pub async fn handle_command(cli: OrientationCli) -> Result<()> {
    match cli.command {
        OrientationCommand::Analyze { test_type, results } => {
            let results = match results {
                Some(path) => read_json_input(&path).await?,
                None => Value::Object(Default::default()),
            };
            let insights = insights::interpret(&test_type, &results);
            print_json(&insights)?;
        }

        OrientationCommand::Types => {
            print_json(&catalogue())?;
        }

        OrientationCommand::Init => {
            Database::new(&cli.database_path).await?;
            info!("Database initialized at {}", cli.database_path.display());
            println!("Database ready: {}", cli.database_path.display());
        }

        OrientationCommand::Record {
            user_id,
            test_type,
            results,
            answers,
            confidence_score,
        } => {
            let db = Database::new(&cli.database_path).await?;
            let results = read_json_input(&results).await?;
            let answers = match answers {
                Some(path) => read_json_input(&path).await?,
                None => Value::Array(Vec::new()),
            };

            let new_result = NewTestResult {
                user_id,
                test_type,
                results,
                answers,
                confidence_score,
            };

            match TestResultService::new(&db).record(new_result).await {
                Ok(record) => print_json(&record)?,
                Err(RecordError::Invalid(reason)) => {
                    error!("Rejected test result: {}", reason);
                    anyhow::bail!("Invalid test result: {}", reason);
                }
                Err(RecordError::Storage(e)) => return Err(e),
            }
        }

        OrientationCommand::List { user_id } => {
            let db = Database::new(&cli.database_path).await?;
            let records = TestResultService::new(&db).list_for_user(user_id).await?;
            print_json(&records)?;
        }

        OrientationCommand::Export { output, user_id } => {
            let db = Database::new(&cli.database_path).await?;
            let service = TestResultService::new(&db);
            let records = match user_id {
                Some(user_id) => service.list_for_user(user_id).await?,
                None => service.list_all().await?,
            };

            FsOps::ensure_parent_exists(&output).await?;
            let file = std::fs::File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            write_csv(&records, file)?;
            println!("Exported {} test results to {}", records.len(), output.display());
        }
    }

    Ok(())
}

async fn read_json_input(path: &Path) -> Result<Value> {
    if path == Path::new("-") {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read stdin")?;
        serde_json::from_str(&content).context("Invalid JSON on stdin")
    } else {
        FsOps::read_json(path).await
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    user_id: i64,
    test_type: &'a str,
    confidence_score: Option<i64>,
    created_at: String,
    results: String,
    answers: String,
}

/// Write records as CSV, JSON columns inlined as compact strings
pub fn write_csv<W: Write>(records: &[TestResultRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(CsvRow {
                id: &record.id,
                user_id: record.user_id,
                test_type: &record.test_type,
                confidence_score: record.confidence_score,
                created_at: record.created_at.to_rfc3339(),
                results: record.results.to_string(),
                answers: record.answers.to_string(),
            })
            .with_context(|| format!("Failed to write CSV row for {}", record.id))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
