//! Core logic for the course catalog.
//! This crate owns course validation rules and storage orchestration.

pub mod business;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;

pub use business::course_business::CourseBusiness;
pub use config::CoreConfig;
pub use dto::course_dto::{
    CourseDto, CourseView, CreateCourseInput, CreateCourseOutput, DeleteCourseInput,
    DeleteCourseOutput, EditCourseInput, EditCourseOutput, GetCoursesInput,
};
pub use error::{CourseError, CourseResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId};
pub use repo::course_repo::{
    CourseRecord, CourseRepository, RepoError, RepoResult, SqliteCourseRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
