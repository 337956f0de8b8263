//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the habitpet domain.

mod errors;
mod ids;
mod mission_date;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GithubHandle, UserId};
pub use mission_date::MissionDate;
