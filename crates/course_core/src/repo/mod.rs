//! Storage collaborator contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the course data access contract consumed by business logic.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Repositories do not apply business validation; they persist records
//!   as given and report semantic `NotFound` errors for missing rows.

pub mod course_repo;
