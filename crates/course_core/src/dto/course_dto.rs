//! Course input validation and output shaping.
//!
//! # Responsibility
//! - Check primitive shapes of raw input before business rules run.
//! - Build `{message, course}` envelopes for create/edit responses.
//!
//! # Invariants
//! - Absent optional input (`None`) is never type-checked; present input
//!   always is, including JSON `null`.
//! - `lessons` must be a JSON number with an integral value.

use crate::error::{CourseError, CourseResult};
use crate::model::course::Course;
use serde::Serialize;
use serde_json::Value;

pub const CREATE_SUCCESS_MESSAGE: &str = "Curso registrado com sucesso";
pub const EDIT_SUCCESS_MESSAGE: &str = "Curso atualizado com sucesso";
pub const DELETE_SUCCESS_MESSAGE: &str = "Curso deletado com sucesso";

const ID_NOT_STRING: &str = "'id' deve ser string";
const NAME_NOT_STRING: &str = "'name' deve ser string";
const LESSONS_NOT_NUMBER: &str = "'lessons' deve ser number";
const QUERY_NOT_STRING: &str = "'q' deve ser string";

/// Typed input for `CourseBusiness::get_courses`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCoursesInput {
    pub q: Option<String>,
}

/// Typed input for `CourseBusiness::create_course`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseInput {
    pub id: String,
    pub name: String,
    pub lessons: i64,
}

/// Typed input for `CourseBusiness::edit_course`.
///
/// `None` means "leave the stored value as is".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCourseInput {
    pub id_to_edit: String,
    pub new_id: Option<String>,
    pub new_name: Option<String>,
    pub new_lessons: Option<i64>,
}

/// Typed input for `CourseBusiness::delete_course`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCourseInput {
    pub id_to_delete: String,
}

/// Flattened course projection used in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub id: String,
    pub name: String,
    pub lessons: i64,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            lessons: course.lessons(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCourseOutput {
    pub message: String,
    pub course: CourseView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditCourseOutput {
    pub message: String,
    pub course: CourseView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCourseOutput {
    pub message: String,
}

/// Stateless validator/shaper for course DTOs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseDto;

impl CourseDto {
    pub fn new() -> Self {
        Self
    }

    /// Validates the optional list filter.
    pub fn get_courses_input(&self, q: Option<&Value>) -> CourseResult<GetCoursesInput> {
        let q = q.map(|value| expect_string(value, QUERY_NOT_STRING)).transpose()?;
        Ok(GetCoursesInput { q })
    }

    /// Validates raw create input.
    ///
    /// # Errors
    /// - `Validation` when `id`/`name` is not a string or `lessons` is not an
    ///   integral number, checked in that order.
    pub fn create_course_input(
        &self,
        id: &Value,
        name: &Value,
        lessons: &Value,
    ) -> CourseResult<CreateCourseInput> {
        let id = expect_string(id, ID_NOT_STRING)?;
        let name = expect_string(name, NAME_NOT_STRING)?;
        let lessons = expect_integer(lessons, LESSONS_NOT_NUMBER)?;

        Ok(CreateCourseInput { id, name, lessons })
    }

    pub fn create_course_output(&self, course: &Course) -> CreateCourseOutput {
        CreateCourseOutput {
            message: CREATE_SUCCESS_MESSAGE.to_string(),
            course: CourseView::from(course),
        }
    }

    /// Validates raw edit input. `id_to_edit` is already typed by the caller
    /// (it normally comes from the route path) and is not checked here.
    pub fn edit_course_input(
        &self,
        id_to_edit: impl Into<String>,
        new_id: Option<&Value>,
        new_name: Option<&Value>,
        new_lessons: Option<&Value>,
    ) -> CourseResult<EditCourseInput> {
        let new_id = new_id
            .map(|value| expect_string(value, ID_NOT_STRING))
            .transpose()?;
        let new_name = new_name
            .map(|value| expect_string(value, NAME_NOT_STRING))
            .transpose()?;
        let new_lessons = new_lessons
            .map(|value| expect_integer(value, LESSONS_NOT_NUMBER))
            .transpose()?;

        Ok(EditCourseInput {
            id_to_edit: id_to_edit.into(),
            new_id,
            new_name,
            new_lessons,
        })
    }

    pub fn edit_course_output(&self, course: &Course) -> EditCourseOutput {
        EditCourseOutput {
            message: EDIT_SUCCESS_MESSAGE.to_string(),
            course: CourseView::from(course),
        }
    }

    pub fn delete_course_input(&self, id_to_delete: &Value) -> CourseResult<DeleteCourseInput> {
        let id_to_delete = expect_string(id_to_delete, ID_NOT_STRING)?;
        Ok(DeleteCourseInput { id_to_delete })
    }

    pub fn delete_course_output(&self) -> DeleteCourseOutput {
        DeleteCourseOutput {
            message: DELETE_SUCCESS_MESSAGE.to_string(),
        }
    }
}

fn expect_string(value: &Value, message: &'static str) -> CourseResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CourseError::validation(message))
}

fn expect_integer(value: &Value, message: &'static str) -> CourseResult<i64> {
    let Value::Number(number) = value else {
        return Err(CourseError::validation(message));
    };

    if let Some(integer) = number.as_i64() {
        return Ok(integer);
    }

    // Integral floats (`10.0`) are accepted; fractions and values outside
    // the i64 range are not.
    match number.as_f64() {
        Some(float)
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        _ => Err(CourseError::validation(message)),
    }
}
