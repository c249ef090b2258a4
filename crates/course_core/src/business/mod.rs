//! Course use-cases.
//!
//! # Responsibility
//! - Enforce course business rules on typed DTO input.
//! - Orchestrate storage lookups and writes for list/create/edit/delete.
//!
//! # Invariants
//! - Business entry points accept only DTO input types; raw values must
//!   pass through `CourseDto` first.
//! - Layer remains storage-agnostic.

pub mod course_business;
