//! Course entity.
//!
//! # Responsibility
//! - Hold one course's identity, name and lesson count.
//! - Convert between the entity and its stored record shape.
//!
//! # Invariants
//! - Values are immutable once built; field changes go through `with_*`
//!   transformations that return a new value.
//! - Constructors never validate. `name.chars().count() >= 2` and
//!   `lessons > 0` are checked by `CourseBusiness`.

use crate::repo::course_repo::CourseRecord;
use serde::Serialize;

/// Caller-assigned course identifier.
pub type CourseId = String;

/// Canonical course entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    name: String,
    lessons: i64,
}

impl Course {
    /// Builds a course from raw parts without validation.
    pub fn new(id: impl Into<CourseId>, name: impl Into<String>, lessons: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lessons,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lessons(&self) -> i64 {
        self.lessons
    }

    /// Returns this course with `id` replaced.
    pub fn with_id(self, id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }

    /// Returns this course with `name` replaced.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Returns this course with `lessons` replaced.
    pub fn with_lessons(self, lessons: i64) -> Self {
        Self { lessons, ..self }
    }

    /// Projects this entity into the storage record shape.
    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            lessons: self.lessons,
        }
    }
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Self::new(record.id, record.name, record.lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::Course;

    #[test]
    fn with_helpers_change_one_field_only() {
        let course = Course::new("c1", "Math", 10);

        let renamed = course.clone().with_name("Physics");
        assert_eq!(renamed.id(), "c1");
        assert_eq!(renamed.name(), "Physics");
        assert_eq!(renamed.lessons(), 10);

        let moved = course.with_id("c2").with_lessons(4);
        assert_eq!(moved.id(), "c2");
        assert_eq!(moved.name(), "Math");
        assert_eq!(moved.lessons(), 4);
    }

    #[test]
    fn constructor_does_not_validate() {
        let course = Course::new("", "x", -1);
        assert_eq!(course.name(), "x");
        assert_eq!(course.lessons(), -1);
    }
}
