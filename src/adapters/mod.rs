//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - relational profile store
//! - `memory` - in-memory profile store for tests and non-durable runs
//! - `github` - commit-count lookup against the GitHub API
//! - `import` - one-time migration from the legacy flat-file layout

pub mod github;
pub mod import;
pub mod memory;
pub mod postgres;

pub use github::{GithubCommitSource, GithubSourceConfig};
pub use import::{FlatFileImporter, ImportSummary};
pub use memory::InMemoryProfileStore;
pub use postgres::PostgresProfileStore;
