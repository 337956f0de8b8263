//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `pet` - Pet profile aggregate, level curve, and mission rewards

pub mod foundation;
pub mod pet;
