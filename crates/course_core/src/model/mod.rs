//! Course domain model.
//!
//! # Responsibility
//! - Define the canonical course entity used by business logic.
//!
//! # Invariants
//! - Entities carry no validation of their own; the DTO/business boundary
//!   enforces `name` and `lessons` rules before an entity is persisted.

pub mod course;
