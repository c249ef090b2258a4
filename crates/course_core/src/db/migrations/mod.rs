//! `courses` schema steps and verification.
//!
//! Step `n` in `SCHEMA_STEPS` brings the catalog to `user_version = n + 1`.
//! New steps are only ever appended.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_init.sql")];

/// Columns the repository reads and writes, with their declared types.
const COURSE_COLUMNS: &[(&str, &str)] = &[("id", "TEXT"), ("name", "TEXT"), ("lessons", "INTEGER")];

/// Returns the schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Applies pending schema steps, then checks the resulting `courses` table.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    if found < supported {
        let tx = conn.transaction()?;
        for (version, sql) in (1..).zip(SCHEMA_STEPS).skip(found as usize) {
            tx.execute_batch(sql)?;
            tx.pragma_update(None, "user_version", version)?;
        }
        tx.commit()?;
        info!("event=db_migrate module=db status=ok from_version={found} to_version={supported}");
    }

    verify_course_schema(conn)
}

/// Checks that `courses` exists with every column the repository uses.
///
/// # Errors
/// - `DbError::CourseSchema` naming the missing table or column, or a
///   column whose declared type differs.
pub fn verify_course_schema(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info('courses');")?;
    let columns = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(DbError::CourseSchema(
            "table `courses` does not exist".to_string(),
        ));
    }

    for (expected_name, expected_type) in COURSE_COLUMNS {
        match columns.iter().find(|(name, _)| name.as_str() == *expected_name) {
            None => {
                return Err(DbError::CourseSchema(format!(
                    "column `courses.{expected_name}` is missing"
                )));
            }
            Some((_, declared)) if !declared.eq_ignore_ascii_case(expected_type) => {
                return Err(DbError::CourseSchema(format!(
                    "column `courses.{expected_name}` is `{declared}`, expected `{expected_type}`"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
