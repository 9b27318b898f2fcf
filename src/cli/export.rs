//! Export command implementation
//!
//! Owns all of the I/O plumbing around the rendering core: argument checks,
//! file-existence checks, the overwrite guard, reading the SQL source,
//! opening the database, and writing the finished document.

use anyhow::{bail, Context, Result};
use clap::Args;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::run_query;
use crate::render::{assemble_document, header_comments};

const MARKDOWN_EXT: &str = "md";

#[derive(Args)]
pub struct ExportArgs {
    /// SQLite database file to query
    #[arg(value_name = "DB_FILE")]
    pub db: PathBuf,

    /// SQL file containing the query (leading `--` comments become body text)
    #[arg(value_name = "SQL_FILE")]
    pub sql: PathBuf,

    /// Directory for the exported Markdown file (defaults to the SQL file's directory)
    #[arg(value_name = "EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    // SQLite would silently create an empty database for a bad path, so
    // check existence up front and open read-only.
    if !args.db.is_file() {
        bail!("Database not found: {}", args.db.display());
    }
    if !args.sql.is_file() {
        bail!("SQL file not found: {}", args.sql.display());
    }

    let sql_dir = args.sql.parent().unwrap_or_else(|| Path::new(""));
    let Some(stem) = args.sql.file_stem().and_then(|s| s.to_str()) else {
        bail!("SQL path has no usable file name: {}", args.sql.display());
    };

    // Export to the SQL file's own directory unless one was given.
    let export_dir = args.export_dir.clone().unwrap_or_else(|| sql_dir.to_path_buf());

    // A .sql file named like the output would be clobbered by the export.
    let sql_ext = args.sql.extension().and_then(|e| e.to_str());
    if sql_ext == Some(MARKDOWN_EXT) && export_dir == sql_dir {
        bail!(
            "SQL file ({}) has the .{} extension and would be overwritten by the export",
            args.sql.display(),
            MARKDOWN_EXT
        );
    }

    let sql = fs::read_to_string(&args.sql)
        .with_context(|| format!("Failed to read SQL file {}", args.sql.display()))?;

    let conn = Connection::open_with_flags(
        &args.db,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open database {}", args.db.display()))?;

    let result = run_query(&conn, &sql)?;
    tracing::debug!(
        columns = result.columns.len(),
        rows = result.rows.len(),
        "query executed"
    );

    let comments = header_comments(&sql);
    let lines = assemble_document(stem, &comments, &result)?;

    fs::create_dir_all(&export_dir)
        .with_context(|| format!("Failed to create export directory {}", export_dir.display()))?;

    let export_path = export_dir.join(format!("{stem}.{MARKDOWN_EXT}"));
    let mut content = String::new();
    for line in &lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&export_path, content)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;
    tracing::debug!(path = %export_path.display(), lines = lines.len(), "document written");

    println!("Export complete: {}", export_path.display());
    Ok(())
}
