//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileStore` - durable per-user game state (relational or in-memory)
//! - `CommitActivitySource` - external daily commit-count lookup

mod activity_source;
mod profile_store;

pub use activity_source::CommitActivitySource;
pub use profile_store::{ProfileImportRecord, ProfileStore};
