//! Course use-case orchestration.
//!
//! # Invariants
//! - Field rules run before any storage lookup.
//! - `name` has at least 2 chars and `lessons > 0` for every course written
//!   through this service.
//! - Course ids are unique; duplicates are rejected before insert/rename.
//! - Edit overrides are applied on presence (`Some`), never on truthiness.

use crate::dto::course_dto::{
    CourseDto, CreateCourseInput, CreateCourseOutput, DeleteCourseInput, DeleteCourseOutput,
    EditCourseInput, EditCourseOutput, GetCoursesInput,
};
use crate::error::{CourseError, CourseResult};
use crate::model::course::Course;
use crate::repo::course_repo::CourseRepository;
use log::{info, warn};

const NAME_MIN_CHARS: usize = 2;

const NAME_TOO_SHORT: &str = "'name' deve possuir pelo menos 2 caracteres";
const LESSONS_NOT_POSITIVE: &str = "'lessons' não pode ser zero ou negativo";
const ID_EMPTY: &str = "'id' não pode ser vazio";
const ID_ALREADY_EXISTS: &str = "'id' já existe";
const EDIT_ID_NOT_FOUND: &str = "'id' para editar não existe";
const DELETE_ID_NOT_FOUND: &str = "'id' para deletar não existe";

/// Course business service over a storage collaborator.
pub struct CourseBusiness<R: CourseRepository> {
    dto: CourseDto,
    repo: R,
}

impl<R: CourseRepository> CourseBusiness<R> {
    pub fn new(repo: R) -> Self {
        Self {
            dto: CourseDto::new(),
            repo,
        }
    }

    /// Lists courses, optionally filtered by `input.q`.
    pub fn get_courses(&self, input: &GetCoursesInput) -> CourseResult<Vec<Course>> {
        let records = self.repo.find_courses(input.q.as_deref())?;
        let courses = records.into_iter().map(Course::from).collect::<Vec<_>>();

        info!(
            "event=course_list module=business status=ok filtered={} count={}",
            input.q.is_some(),
            courses.len()
        );
        Ok(courses)
    }

    /// Creates a new course.
    ///
    /// # Errors
    /// - `Validation` for a short name, non-positive lessons or an id that
    ///   already exists.
    /// - `Repo` when storage fails.
    pub fn create_course(&self, input: &CreateCourseInput) -> CourseResult<CreateCourseOutput> {
        let result = self.try_create_course(input);
        log_outcome("course_create", &input.id, &result);
        result
    }

    fn try_create_course(&self, input: &CreateCourseInput) -> CourseResult<CreateCourseOutput> {
        check_name(&input.name)?;
        check_lessons(input.lessons)?;

        if self.repo.find_course_by_id(&input.id)?.is_some() {
            return Err(CourseError::validation(ID_ALREADY_EXISTS));
        }

        let course = Course::new(input.id.as_str(), input.name.as_str(), input.lessons);
        self.repo.insert_course(&course.to_record())?;

        Ok(self.dto.create_course_output(&course))
    }

    /// Applies the provided overrides to an existing course.
    ///
    /// # Errors
    /// - `Validation` when a provided field breaks a rule, or `new_id` is
    ///   already used by another course.
    /// - `NotFound` when `id_to_edit` does not exist.
    pub fn edit_course(&self, input: &EditCourseInput) -> CourseResult<EditCourseOutput> {
        let result = self.try_edit_course(input);
        log_outcome("course_edit", &input.id_to_edit, &result);
        result
    }

    fn try_edit_course(&self, input: &EditCourseInput) -> CourseResult<EditCourseOutput> {
        if let Some(new_id) = &input.new_id {
            check_id(new_id)?;
        }
        if let Some(new_name) = &input.new_name {
            check_name(new_name)?;
        }
        if let Some(new_lessons) = input.new_lessons {
            check_lessons(new_lessons)?;
        }

        let stored = self
            .repo
            .find_course_by_id(&input.id_to_edit)?
            .ok_or_else(|| CourseError::not_found(EDIT_ID_NOT_FOUND))?;

        if let Some(new_id) = &input.new_id {
            if new_id != &input.id_to_edit && self.repo.find_course_by_id(new_id)?.is_some() {
                return Err(CourseError::validation(ID_ALREADY_EXISTS));
            }
        }

        let mut course = Course::from(stored);
        if let Some(new_id) = &input.new_id {
            course = course.with_id(new_id.as_str());
        }
        if let Some(new_name) = &input.new_name {
            course = course.with_name(new_name.as_str());
        }
        if let Some(new_lessons) = input.new_lessons {
            course = course.with_lessons(new_lessons);
        }

        self.repo
            .update_course(&input.id_to_edit, &course.to_record())?;

        Ok(self.dto.edit_course_output(&course))
    }

    /// Deletes one course by id.
    ///
    /// # Errors
    /// - `NotFound` when `id_to_delete` does not exist.
    pub fn delete_course(&self, input: &DeleteCourseInput) -> CourseResult<DeleteCourseOutput> {
        let result = self.try_delete_course(input);
        log_outcome("course_delete", &input.id_to_delete, &result);
        result
    }

    fn try_delete_course(&self, input: &DeleteCourseInput) -> CourseResult<DeleteCourseOutput> {
        let stored = self
            .repo
            .find_course_by_id(&input.id_to_delete)?
            .ok_or_else(|| CourseError::not_found(DELETE_ID_NOT_FOUND))?;

        self.repo.delete_course_by_id(&stored.id)?;

        Ok(self.dto.delete_course_output())
    }
}

fn check_id(id: &str) -> CourseResult<()> {
    if id.is_empty() {
        return Err(CourseError::validation(ID_EMPTY));
    }
    Ok(())
}

// Length is counted in Unicode scalar values, not UTF-16 code units, so a
// single astral character such as "😀" is one char and too short.
fn check_name(name: &str) -> CourseResult<()> {
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(CourseError::validation(NAME_TOO_SHORT));
    }
    Ok(())
}

fn check_lessons(lessons: i64) -> CourseResult<()> {
    if lessons <= 0 {
        return Err(CourseError::validation(LESSONS_NOT_POSITIVE));
    }
    Ok(())
}

fn log_outcome<T>(event: &str, course_id: &str, result: &CourseResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=business status=ok course_id={course_id}"),
        Err(err) => warn!(
            "event={event} module=business status=error course_id={course_id} error_code={} status_code={}",
            err.code(),
            err.status_code()
        ),
    }
}
