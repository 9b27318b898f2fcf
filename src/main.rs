//! sqlmd: Export SQLite query results as Markdown documents
//!
//! This tool executes a single SQL query from a file against a SQLite
//! database and writes the result set as a Markdown document: a title,
//! optional body text taken from leading comments in the SQL source, and a
//! table of the returned rows.

mod cli;
mod db;
mod domain;
mod render;

fn main() {
    // Any failure in the pipeline surfaces here as one human-readable line;
    // the process must never unwind past main with a raw error.
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
