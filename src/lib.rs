//! Habitpet - virtual-pet habit gamification core.
//!
//! Daily missions (login, journal, puzzle, commit sync) award experience
//! to a per-user pet that levels up along a fixed curve. The chat-platform
//! dispatcher and message rendering live outside this crate; handlers
//! return plain outcome structs for the presentation layer to format.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
