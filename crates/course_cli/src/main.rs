//! `course` binary: thin caller over `course_core`.
//!
//! # Responsibility
//! - Turn command-line arguments into raw DTO input.
//! - Print DTO output as JSON and map errors to exit codes.
//!
//! # Invariants
//! - Raw values always pass through `CourseDto` before `CourseBusiness`.
//! - Exit codes: 0 ok, 2 validation, 3 not found, 1 anything else.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use course_core::db::open_db;
use course_core::{
    init_logging, CoreConfig, CourseBusiness, CourseDto, CourseError, CourseRepository,
    SqliteCourseRepository,
};
use log::error;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

#[derive(Debug)]
enum CliError {
    Course(CourseError),
    Setup(String),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Course(CourseError::Validation(_)) => 2,
            Self::Course(CourseError::NotFound(_)) => 3,
            Self::Course(CourseError::Repo(_)) | Self::Setup(_) => 1,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Course(err) => write!(f, "{err}"),
            Self::Setup(message) => f.write_str(message),
        }
    }
}

impl From<CourseError> for CliError {
    fn from(value: CourseError) -> Self {
        Self::Course(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error exit_code={}", err.exit_code());
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = CoreConfig::resolve(
        cli.db.as_deref(),
        cli.log_level.as_deref(),
        cli.log_dir.as_deref(),
    )
    .map_err(CliError::Setup)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, &log_dir.to_string_lossy()).map_err(CliError::Setup)?;
    }

    let conn = open_db(&config.db_path)
        .map_err(|err| CliError::Setup(format!("failed to open course database: {err}")))?;
    let repo = SqliteCourseRepository::try_new(&conn)
        .map_err(|err| CliError::Setup(format!("failed to prepare course storage: {err}")))?;
    let business = CourseBusiness::new(repo);

    let output = execute(&business, CourseDto::new(), cli.command)?;
    serde_json::to_string_pretty(&output)
        .map_err(|err| CliError::Setup(format!("failed to encode output: {err}")))
}

fn execute<R: CourseRepository>(
    business: &CourseBusiness<R>,
    dto: CourseDto,
    command: Command,
) -> Result<Value, CliError> {
    match command {
        Command::List { q } => {
            let q = q.map(Value::String);
            let input = dto.get_courses_input(q.as_ref())?;
            to_json(&business.get_courses(&input)?)
        }
        Command::Create { id, name, lessons } => {
            let input = dto.create_course_input(
                &parse_raw(&id),
                &parse_raw(&name),
                &parse_raw(&lessons),
            )?;
            to_json(&business.create_course(&input)?)
        }
        Command::Edit {
            id_to_edit,
            new_id,
            new_name,
            new_lessons,
        } => {
            let new_id = new_id.as_deref().map(parse_raw);
            let new_name = new_name.as_deref().map(parse_raw);
            let new_lessons = new_lessons.as_deref().map(parse_raw);
            let input = dto.edit_course_input(
                id_to_edit,
                new_id.as_ref(),
                new_name.as_ref(),
                new_lessons.as_ref(),
            )?;
            to_json(&business.edit_course(&input)?)
        }
        Command::Delete { id } => {
            let input = dto.delete_course_input(&Value::String(id))?;
            to_json(&business.delete_course(&input)?)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value)
        .map_err(|err| CliError::Setup(format!("failed to encode output: {err}")))
}

/// Reads an argument as JSON, falling back to a plain string.
fn parse_raw(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
