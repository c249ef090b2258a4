//! Boundary DTOs.
//!
//! # Responsibility
//! - Turn untyped caller input (`serde_json::Value`) into typed inputs.
//! - Shape entities into serializable output envelopes.

pub mod course_dto;
