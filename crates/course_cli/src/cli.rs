//! Command-line surface.

use clap::{Parser, Subcommand};

/// Manage the course catalog.
#[derive(Debug, Parser)]
#[command(name = "course", version, about)]
pub struct Cli {
    /// SQLite database file (falls back to `COURSE_DB_PATH`).
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Log level: trace|debug|info|warn|error (falls back to `COURSE_LOG_LEVEL`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (falls back to `COURSE_LOG_DIR`).
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Field values are parsed as JSON when possible, otherwise taken as
/// strings, so `--lessons 10` is a number and `--lessons '"10"'` is not.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List courses, optionally filtered by name.
    List {
        #[arg(long)]
        q: Option<String>,
    },
    /// Register a new course.
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        lessons: String,
    },
    /// Change fields of an existing course.
    Edit {
        id_to_edit: String,
        #[arg(long = "id")]
        new_id: Option<String>,
        #[arg(long = "name")]
        new_name: Option<String>,
        #[arg(long = "lessons", allow_hyphen_values = true)]
        new_lessons: Option<String>,
    },
    /// Delete a course by id.
    Delete { id: String },
}
