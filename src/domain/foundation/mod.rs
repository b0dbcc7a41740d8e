//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Readiness Compass domain.

mod errors;
mod ids;
mod percentage;
mod points;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentRecordId, SubmissionId};
pub use percentage::Percentage;
pub use points::Points;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
