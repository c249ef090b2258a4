//! Course repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the lookup/insert/update/delete calls `CourseBusiness` needs.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `courses.id` is the primary key; duplicate inserts fail at the DB.
//! - Listing is ordered by `id ASC`.
//! - Update and delete report `RepoError::NotFound` when no row changed.

use crate::db::{verify_course_schema, DbError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const COURSE_SELECT_SQL: &str = "SELECT id, name, lessons FROM courses";

pub type RepoResult<T> = Result<T, RepoError>;

/// Raw persisted representation of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub lessons: i64,
}

/// Repository error for course persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "course not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted course data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage collaborator consumed by `CourseBusiness`.
pub trait CourseRepository {
    /// Lists stored courses, optionally narrowed by a name filter.
    fn find_courses(&self, filter: Option<&str>) -> RepoResult<Vec<CourseRecord>>;
    /// Looks up one course by id.
    fn find_course_by_id(&self, id: &str) -> RepoResult<Option<CourseRecord>>;
    fn insert_course(&self, record: &CourseRecord) -> RepoResult<()>;
    /// Overwrites the row currently stored under `id`; `record.id` may differ.
    fn update_course(&self, id: &str, record: &CourseRecord) -> RepoResult<()>;
    fn delete_course_by_id(&self, id: &str) -> RepoResult<()>;
}

impl<R: CourseRepository + ?Sized> CourseRepository for &R {
    fn find_courses(&self, filter: Option<&str>) -> RepoResult<Vec<CourseRecord>> {
        (**self).find_courses(filter)
    }

    fn find_course_by_id(&self, id: &str) -> RepoResult<Option<CourseRecord>> {
        (**self).find_course_by_id(id)
    }

    fn insert_course(&self, record: &CourseRecord) -> RepoResult<()> {
        (**self).insert_course(record)
    }

    fn update_course(&self, id: &str, record: &CourseRecord) -> RepoResult<()> {
        (**self).update_course(id, record)
    }

    fn delete_course_by_id(&self, id: &str) -> RepoResult<()> {
        (**self).delete_course_by_id(id)
    }
}

/// SQLite-backed course repository.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// Fails with `RepoError::Db(DbError::CourseSchema(..))` when the
    /// connection did not come from `open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_course_schema(conn)?;
        Ok(Self { conn })
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn find_courses(&self, filter: Option<&str>) -> RepoResult<Vec<CourseRecord>> {
        let pattern = filter
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| format!("%{}%", escape_like(value)));

        let mut courses = Vec::new();
        match pattern {
            Some(pattern) => {
                let mut stmt = self.conn.prepare(&format!(
                    "{COURSE_SELECT_SQL} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id ASC;"
                ))?;
                let mut rows = stmt.query([pattern])?;
                while let Some(row) = rows.next()? {
                    courses.push(parse_course_row(row)?);
                }
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    courses.push(parse_course_row(row)?);
                }
            }
        }

        Ok(courses)
    }

    fn find_course_by_id(&self, id: &str) -> RepoResult<Option<CourseRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{COURSE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                |row| Ok(parse_course_row(row)),
            )
            .optional()?;

        record.transpose()
    }

    fn insert_course(&self, record: &CourseRecord) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO courses (id, name, lessons) VALUES (?1, ?2, ?3);",
            params![record.id, record.name, record.lessons],
        )?;
        Ok(())
    }

    fn update_course(&self, id: &str, record: &CourseRecord) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE courses
             SET
                id = ?1,
                name = ?2,
                lessons = ?3
             WHERE id = ?4;",
            params![record.id, record.name, record.lessons, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn delete_course_by_id(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM courses WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<CourseRecord> {
    let id: String = row.get("id")?;
    let name: String = row.get("name")?;
    let lessons: i64 = row.get("lessons").map_err(|err| {
        RepoError::InvalidData(format!("invalid lessons value for course `{id}`: {err}"))
    })?;

    Ok(CourseRecord { id, name, lessons })
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
